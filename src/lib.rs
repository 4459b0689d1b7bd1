//! Storefront browser application: static marketing pages, a product catalog,
//! a users console backed by a REST API, and two demo views over public APIs.
//!
//! Domain logic (HTTP error normalization, envelope handling, the users
//! resource, form validation, fetch state) compiles on every target so it can
//! be tested natively. The Leptos views, the browser transport and logging
//! setup are only built for `wasm32`.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod routes;
