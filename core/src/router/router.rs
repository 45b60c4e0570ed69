//! Router implementation for managing navigation state
//!
//! This module provides the core router functionality including
//! state management, navigation, and route resolution.

use super::guard::{GuardDecision, Navigator, RouteGuard};
use super::route::{normalize_path, Route, RouteId};
use crate::error::RouterError;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Type alias for router operation results
pub type RouterResult<T> = Result<T, RouterError>;

/// Current state of the router
#[derive(Debug, Clone)]
pub struct RouterState {
    /// Currently active route ID
    pub current_route: RouteId,
    /// Navigation history (most recent first)
    pub history: Vec<RouteId>,
    /// Maximum number of history entries to keep
    pub max_history: usize,
}

impl RouterState {
    /// Create a new router state with the given initial route
    pub fn new(initial_route: RouteId) -> Self {
        Self {
            current_route: initial_route,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Navigate to a new route
    pub fn navigate_to(&mut self, route_id: RouteId) {
        // Add current route to history if it's different
        if self.current_route != route_id {
            self.history.insert(0, self.current_route.clone());
            self.history.truncate(self.max_history);
        }

        self.current_route = route_id;
    }

    /// Swap the current route without recording history
    pub fn replace_with(&mut self, route_id: RouteId) {
        self.current_route = route_id;
    }

    /// Go back to the previous route in history
    pub fn go_back(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }
        self.current_route = self.history.remove(0);
        true
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Get the current route ID
    pub fn current_route(&self) -> &RouteId {
        &self.current_route
    }
}

/// Configuration for the router
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// All available routes, in declaration order
    pub routes: Vec<Route>,
    /// Default route to use when no route is specified
    pub default_route: Option<RouteId>,
    /// Whether to enable navigation history
    pub enable_history: bool,
    /// Maximum number of history entries
    pub max_history: usize,
}

impl RouterConfig {
    /// Create a new router configuration
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            default_route: None,
            enable_history: true,
            max_history: 50,
        }
    }

    /// Add a route to the configuration
    pub fn add_route(mut self, route: Route) -> Self {
        if route.is_default && self.default_route.is_none() {
            self.default_route = Some(route.id.clone());
        }
        self.routes.push(route);
        self
    }

    /// Set the default route
    pub fn with_default_route(mut self, route_id: RouteId) -> Self {
        self.default_route = Some(route_id);
        self
    }

    /// Disable navigation history
    pub fn without_history(mut self) -> Self {
        self.enable_history = false;
        self
    }

    /// Get the default route ID
    pub fn default_route(&self) -> Option<&RouteId> {
        self.default_route.as_ref()
    }

    /// Get all routes
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a guarded navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The requested route is now current
    Arrived(RouteId),
    /// A guard turned the navigation away to another route
    Redirected { from: RouteId, to: RouteId },
}

/// Main router struct that manages navigation state and configuration
#[derive(Debug, Clone)]
pub struct Router {
    config: RouterConfig,
    state: RouterState,
    by_path: HashMap<String, usize>,
    by_id: HashMap<RouteId, usize>,
    loaded: HashSet<RouteId>,
}

impl Router {
    /// Create a new router with the given configuration
    pub fn new(config: RouterConfig) -> RouterResult<Self> {
        if config.routes().is_empty() {
            return Err(RouterError::NoRoutes);
        }

        let mut by_path = HashMap::new();
        let mut by_id = HashMap::new();
        for (index, route) in config.routes().iter().enumerate() {
            if by_path.insert(route.path.clone(), index).is_some() {
                return Err(RouterError::DuplicatePath(route.path.clone()));
            }
            if by_id.insert(route.id.clone(), index).is_some() {
                return Err(RouterError::DuplicateId(route.id.0.clone()));
            }
        }

        // Determine initial route: explicit default, then root path, then first declared
        let initial_route = if let Some(default_route) = config.default_route() {
            if !by_id.contains_key(default_route) {
                return Err(RouterError::InitialRouteMissing(default_route.0.clone()));
            }
            default_route.clone()
        } else if let Some(&index) = by_path.get("/") {
            config.routes[index].id.clone()
        } else {
            config.routes[0].id.clone()
        };

        let mut state = RouterState::new(initial_route.clone());
        state.max_history = if config.enable_history {
            config.max_history
        } else {
            0
        };

        let mut loaded: HashSet<RouteId> = config
            .routes()
            .iter()
            .filter(|r| !r.is_lazy())
            .map(|r| r.id.clone())
            .collect();
        loaded.insert(initial_route);

        Ok(Self {
            config,
            state,
            by_path,
            by_id,
            loaded,
        })
    }

    /// Resolve a path to its route without changing any state
    pub fn resolve(&self, path: &str) -> RouterResult<&Route> {
        let normalized = normalize_path(path);
        self.by_path
            .get(&normalized)
            .map(|&index| &self.config.routes[index])
            .ok_or(RouterError::RouteNotFound(normalized))
    }

    /// Look up a route by its ID
    pub fn route(&self, id: &RouteId) -> Option<&Route> {
        self.by_id.get(id).map(|&index| &self.config.routes[index])
    }

    /// All routes in declaration order
    pub fn routes(&self) -> &[Route] {
        self.config.routes()
    }

    /// Navigate to a path, recording history. Guards are not consulted.
    pub fn navigate(&mut self, path: &str) -> RouterResult<&Route> {
        let id = self.resolve(path)?.id.clone();
        debug!(%path, route = %id, "Navigating");
        self.mark_loaded(&id);
        self.state.navigate_to(id.clone());
        self.route_or_missing(&id)
    }

    /// Replace the current location with a path, without recording history
    pub fn replace(&mut self, path: &str) -> RouterResult<&Route> {
        let id = self.resolve(path)?.id.clone();
        debug!(%path, route = %id, "Replacing current route");
        self.mark_loaded(&id);
        self.state.replace_with(id.clone());
        self.route_or_missing(&id)
    }

    /// Navigate to a path, evaluating `guard` first when the route is protected
    pub async fn navigate_guarded(
        &mut self,
        path: &str,
        guard: &dyn RouteGuard,
    ) -> RouterResult<Navigation> {
        let route = self.resolve(path)?.clone();

        if route.requires_auth {
            if let GuardDecision::Redirect(target) = guard.authorize(&route).await {
                let to = self.replace(&target)?.id.clone();
                info!(from = %route.id, to = %to, "Navigation redirected by guard");
                return Ok(Navigation::Redirected { from: route.id, to });
            }
        }

        self.navigate(&route.path)?;
        Ok(Navigation::Arrived(route.id))
    }

    /// Go back to the previous route
    pub fn go_back(&mut self) -> bool {
        self.config.enable_history && self.state.go_back()
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.config.enable_history && self.state.can_go_back()
    }

    /// Get the current route
    pub fn current_route(&self) -> Option<&Route> {
        self.route(self.state.current_route())
    }

    /// Get the current route ID
    pub fn current_route_id(&self) -> &RouteId {
        self.state.current_route()
    }

    /// Whether the view behind a route has been loaded yet
    pub fn is_loaded(&self, id: &RouteId) -> bool {
        self.loaded.contains(id)
    }

    fn mark_loaded(&mut self, id: &RouteId) {
        if self.loaded.insert(id.clone()) {
            info!(route = %id, "Loaded lazy view");
        }
    }

    fn route_or_missing(&self, id: &RouteId) -> RouterResult<&Route> {
        self.route(id)
            .ok_or_else(|| RouterError::RouteNotFound(id.0.clone()))
    }
}

impl Navigator for Router {
    fn replace(&mut self, path: &str) -> Result<(), RouterError> {
        Router::replace(self, path).map(|_| ())
    }
}
