//! Configuration types for floorpay core
//!
//! Only exports resolved data types. Discovery and file loading live in the CLI layer.

pub mod types;

pub use types::{ClientConfig, Origin, API_SUFFIX, DEFAULT_PORT, DEFAULT_TIMEOUT_MS};
