//! Record shapes exchanged with the backend
//!
//! All of these are read-only view models populated from responses.

pub mod auth;
pub mod payment;
pub mod slave;

pub use auth::LoginRequest;
pub use payment::{AmountMismatch, PaymentAmount, PaymentSuccess};
pub use slave::{SlavePosition, SlaveResponse, SlaveType};
