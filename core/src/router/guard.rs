//! Per-route authorization hooks evaluated by the router

use super::route::Route;
use crate::error::RouterError;
use async_trait::async_trait;

/// Outcome of a guard check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the requested route
    Allow,
    /// Replace the current location with the given path instead
    Redirect(String),
}

/// Authorization predicate for protected routes
#[async_trait]
pub trait RouteGuard: Send + Sync {
    async fn authorize(&self, route: &Route) -> GuardDecision;
}

/// Guard that admits everything
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAll;

#[async_trait]
impl RouteGuard for AllowAll {
    async fn authorize(&self, _route: &Route) -> GuardDecision {
        GuardDecision::Allow
    }
}

/// Something that can move the current location without adding history
pub trait Navigator: Send {
    fn replace(&mut self, path: &str) -> Result<(), RouterError>;
}
