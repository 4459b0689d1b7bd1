//! Client route paths, shared by the router, the navigation bar and links.

use crate::app_lib::api::encode_path_segment;

pub const HOME: &str = "/";
pub const ABOUT: &str = "/about";
pub const CONTACT: &str = "/contact";
pub const PRODUCTS: &str = "/products";
pub const POSTS: &str = "/posts";
pub const NASA: &str = "/nasa";
pub const USERS: &str = "/users";

pub fn product_detail(id: &str) -> String {
    format!("{PRODUCTS}/{}", encode_path_segment(id))
}

pub fn user_detail(id: &str) -> String {
    format!("{USERS}/{}", encode_path_segment(id))
}
