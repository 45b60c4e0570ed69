//! Route definitions and utilities
//!
//! This module defines the core route types for the application's views.

use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a route, the view's name (e.g. `node-manage`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub String);

impl RouteId {
    /// Create a new route ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RouteId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RouteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// When a view's code is acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewLoading {
    /// Available as soon as the router is built
    Eager,
    /// Deferred until the first navigation to the route
    Lazy,
}

/// Route definition containing path and view metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Unique identifier for this route
    pub id: RouteId,
    /// URL path this route is matched against
    pub path: String,
    /// Optional description of what this route displays
    pub description: Option<String>,
    /// Whether this route is the default route
    pub is_default: bool,
    /// How the view behind this route is loaded
    pub loading: ViewLoading,
    /// Whether navigation must pass a route guard first
    pub requires_auth: bool,
}

impl Route {
    /// Create a new eagerly loaded, unprotected route
    pub fn new(path: impl Into<String>, id: impl Into<RouteId>) -> Self {
        Self {
            id: id.into(),
            path: normalize_path(&path.into()),
            description: None,
            is_default: false,
            loading: ViewLoading::Eager,
            requires_auth: false,
        }
    }

    /// Set the description for this route
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark this route as the default route
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Defer loading the view until first navigation
    pub fn lazy(mut self) -> Self {
        self.loading = ViewLoading::Lazy;
        self
    }

    /// Require a route guard to admit navigation
    pub fn protected(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    pub fn is_lazy(&self) -> bool {
        self.loading == ViewLoading::Lazy
    }
}

/// Canonical form of a path for matching: no query, no fragment, no
/// trailing slash except for the root.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/manage/"), "/manage");
        assert_eq!(normalize_path("payment"), "/payment");
        assert_eq!(normalize_path("/payment-success?orderId=1"), "/payment-success");
        assert_eq!(normalize_path("/generate-qr#code"), "/generate-qr");
    }

    #[test]
    fn test_route_builder() {
        let route = Route::new("/manage/", "node-manage")
            .lazy()
            .protected()
            .with_description("Device management");

        assert_eq!(route.path, "/manage");
        assert_eq!(route.id.as_str(), "node-manage");
        assert!(route.is_lazy());
        assert!(route.requires_auth);
        assert!(!route.is_default);
    }

    #[test]
    fn test_route_id_traits() {
        let route_id = RouteId::from("test");

        assert_eq!(format!("{}", route_id), "test");

        let s: &str = route_id.as_ref();
        assert_eq!(s, "test");

        let s: &str = route_id.borrow();
        assert_eq!(s, "test");
    }
}
