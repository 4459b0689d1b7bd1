//! Placeholder post feed: fetched once per visit, with a client-only set of
//! ticked posts.

pub mod client;
pub mod types;

pub use types::{Post, TickedSet};
