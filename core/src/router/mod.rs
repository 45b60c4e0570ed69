//! Router module for the application's views
//!
//! Static path → view table, navigation history, lazy view tracking and
//! per-route guards.

pub mod app;
pub mod guard;
pub mod route;
#[allow(clippy::module_inception)]
pub mod router;

// Re-export commonly used types
pub use app::{app_router, app_routes, paths};
pub use guard::{AllowAll, GuardDecision, Navigator, RouteGuard};
pub use route::{normalize_path, Route, RouteId, ViewLoading};
pub use router::{Navigation, Router, RouterConfig, RouterResult, RouterState};
