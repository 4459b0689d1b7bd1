mod about;
mod contact;
mod home;
mod nasa;
mod not_found;
pub(crate) mod paths;
mod posts;
mod products;
mod users;

pub(crate) use about::AboutPage;
pub(crate) use contact::ContactPage;
pub(crate) use home::HomePage;
pub(crate) use nasa::NasaPage;
pub(crate) use not_found::{NotFoundContent, NotFoundPage};
pub(crate) use posts::PostsPage;
pub(crate) use products::{ProductDetailPage, ProductsPage};
pub(crate) use users::{UserDetailPage, UsersListPage};

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/about") view=AboutPage />
            <Route path=path!("/contact") view=ContactPage />
            <Route path=path!("/products") view=ProductsPage />
            <Route path=path!("/products/:id") view=ProductDetailPage />
            <Route path=path!("/users") view=UsersListPage />
            <Route path=path!("/users/:id") view=UserDetailPage />
            <Route path=path!("/posts") view=PostsPage />
            <Route path=path!("/FetchAPI_EmptyArray") view=PostsPage />
            <Route path=path!("/nasa") view=NasaPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
