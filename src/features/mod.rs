//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while request mapping, validation and
//! view state live in dedicated feature areas.

pub mod nasa;
pub mod posts;
pub mod products;
pub mod users;
