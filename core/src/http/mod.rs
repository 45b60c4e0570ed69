//! HTTP access to the floorpay backend
//!
//! `ApiBackend` is the seam the login gate and commands talk to;
//! `ApiClient` is the reqwest-backed implementation bound to the page origin.

pub mod client;

pub use client::{ApiBackend, ApiClient, ApiResult};
