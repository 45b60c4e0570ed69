//! The application's route table

use super::route::Route;
use super::router::{Router, RouterConfig, RouterResult};

/// Paths of the application's views
pub mod paths {
    pub const HOME: &str = "/";
    pub const NODE_MANAGE: &str = "/manage";
    pub const PAYMENT: &str = "/payment";
    pub const PAYMENT_SUCCESS: &str = "/payment-success";
    pub const GENERATE_QR: &str = "/generate-qr";
}

/// Route table for the application
///
/// The admin views (`/manage`, `/generate-qr`) are protected and only open
/// through a guard such as the login gate.
pub fn app_routes() -> RouterConfig {
    RouterConfig::new()
        .add_route(
            Route::new(paths::HOME, "home")
                .as_default()
                .with_description("Landing page"),
        )
        .add_route(
            Route::new(paths::NODE_MANAGE, "node-manage")
                .lazy()
                .protected()
                .with_description("Place and inspect devices on each floor"),
        )
        .add_route(
            Route::new(paths::PAYMENT, "payment")
                .lazy()
                .with_description("Purchase a position"),
        )
        .add_route(
            Route::new(paths::PAYMENT_SUCCESS, "payment-success")
                .lazy()
                .with_description("Payment confirmation"),
        )
        .add_route(
            Route::new(paths::GENERATE_QR, "generate-qr")
                .lazy()
                .protected()
                .with_description("Generate device QR codes"),
        )
}

/// Router over the application route table, starting at home
pub fn app_router() -> RouterResult<Router> {
    Router::new(app_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{AllowAll, Navigation, RouteId};

    #[test]
    fn test_declared_paths_resolve_to_named_views() {
        let router = app_router().unwrap();
        let expected = [
            ("/", "home"),
            ("/manage", "node-manage"),
            ("/payment", "payment"),
            ("/payment-success", "payment-success"),
            ("/generate-qr", "generate-qr"),
        ];

        for (path, name) in expected {
            assert_eq!(router.resolve(path).unwrap().id.as_str(), name, "{path}");
        }
        assert_eq!(router.routes().len(), expected.len());
    }

    #[test]
    fn test_only_home_is_eager() {
        let router = app_router().unwrap();
        for route in router.routes() {
            assert_eq!(route.is_lazy(), route.path != paths::HOME, "{}", route.path);
            assert_eq!(router.is_loaded(&route.id), !route.is_lazy());
        }
    }

    #[test]
    fn test_admin_views_are_protected() {
        let router = app_router().unwrap();
        let protected: Vec<_> = router
            .routes()
            .iter()
            .filter(|r| r.requires_auth)
            .map(|r| r.path.as_str())
            .collect();
        assert_eq!(protected, vec![paths::NODE_MANAGE, paths::GENERATE_QR]);
    }

    #[tokio::test]
    async fn test_every_path_navigates_without_error() {
        let mut router = app_router().unwrap();
        for route in app_routes().routes() {
            let outcome = router.navigate_guarded(&route.path, &AllowAll).await.unwrap();
            assert_eq!(outcome, Navigation::Arrived(route.id.clone()));
            assert_eq!(router.current_route_id(), &RouteId::from(route.id.as_str()));
        }
    }
}
