//! # floorpay Core
//!
//! Core library for floorpay - the client side of the floor position service.
//!
//! Provides the API client bound to the page origin, the admin login gate,
//! the application's route table and the record types exchanged with the
//! backend.

// Core modules
pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod router;

// Re-export commonly used types
pub use auth::{GateOutcome, LoginGate, Prompter};
pub use config::{ClientConfig, Origin};
pub use error::{Error, Result};
pub use http::{ApiBackend, ApiClient};
pub use router::{app_router, Navigation, Router};

/// Current version of the floorpay-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
