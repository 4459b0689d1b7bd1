//! Users resource: REST access functions, the validated create/edit form, and
//! (in the browser) the list/detail fetch hooks.

pub mod client;
pub mod form;
#[cfg(target_arch = "wasm32")]
pub mod hooks;
pub mod types;

pub use types::{CreateUserBody, UpdateUserBody, User, UserInput};
