//! Guarded navigation command

use super::build_gate;
use crate::config::AppConfigLoader;
use anyhow::Result;
use floorpay_core::{app_router, Navigation};
use tracing::info;

/// Navigate from home to `path`, asking for the admin password when the
/// route is protected
pub async fn navigate_command(path: String, loader: AppConfigLoader) -> Result<()> {
    let mut router = app_router()?;

    // Fail on unknown paths before anything prompts
    let target = router.resolve(&path)?.clone();
    info!(path = %target.path, route = %target.id, "Navigating");

    let outcome = if target.requires_auth {
        let gate = build_gate(&loader).await?;
        router.navigate_guarded(&target.path, &gate).await?
    } else {
        router.navigate(&target.path)?;
        Navigation::Arrived(target.id.clone())
    };

    match outcome {
        Navigation::Arrived(id) => {
            println!("✅ {} ({})", id, target.path);
        }
        Navigation::Redirected { from, to } => {
            let current = router
                .current_route()
                .map(|r| r.path.as_str())
                .unwrap_or("/");
            println!("↩️  {} refused, redirected to {} ({})", from, to, current);
        }
    }

    Ok(())
}
