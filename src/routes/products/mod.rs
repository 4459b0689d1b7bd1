//! Product catalog routes backed by the static catalog.

mod detail;
mod list;

pub(crate) use detail::ProductDetailPage;
pub(crate) use list::ProductsPage;
