//! Login command

use super::build_gate;
use crate::config::AppConfigLoader;
use anyhow::Result;
use floorpay_core::app_router;

/// Run the login gate once; returns whether the password was accepted
pub async fn login_command(loader: AppConfigLoader) -> Result<bool> {
    let gate = build_gate(&loader).await?;
    let mut router = app_router()?;

    let admitted = gate.attempt_login(&mut router).await;
    if admitted {
        println!("🔓 Logged in");
    } else {
        println!("🔒 Not logged in, back at {}", router.current_route_id());
    }

    Ok(admitted)
}
