//! Core data types: resource kinds, the coerced `Cell` value, and the
//! market-data records returned by the gateway.
//!
//! Every record is an immutable value with no identity beyond value
//! equality. Serde keys follow the snapshot and API payloads
//! (`market_status`, `last_price`, `change`, `yield`, ...).

pub mod cell;
pub mod enums;
pub mod market_data;

pub use cell::*;
pub use enums::*;
pub use market_data::*;
