//! NASA image library browser: search, then drill into one asset's files,
//! metadata and captions. All view state lives in one [`NasaState`] value.

pub mod client;
pub mod state;
pub mod types;

pub use state::{DetailState, NasaState};
pub use types::{AssetDetails, SearchItem};
