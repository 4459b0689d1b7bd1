//! Shared frontend utilities for API access, configuration, errors, request
//! state, and build metadata.
//!
//! ## Request flow
//!
//! 1. A view mounts and asks a feature hook for data.
//! 2. The hook takes a ticket from its [`fetch::RequestScope`] and calls a
//!    feature client function with a [`Transport`].
//! 3. The transport (in the browser, [`HttpClient`]) issues the JSON request
//!    and turns every failure into an [`ApiError`].
//! 4. The hook writes the outcome into its [`fetch::FetchState`] only if the
//!    ticket is still current, so a superseded or unmounted request never
//!    overwrites fresher state.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;
pub mod fetch;
#[cfg(target_arch = "wasm32")]
pub mod http;
#[cfg(target_arch = "wasm32")]
pub mod logging;

pub use api::{unwrap_envelope, ApiRequest, Method, Transport};
pub use errors::{ApiError, ErrorKind};
#[cfg(target_arch = "wasm32")]
pub use http::HttpClient;
