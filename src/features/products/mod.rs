//! Static product catalog shown on the products pages.

pub mod catalog;

pub use catalog::{find_product, products, Product};
