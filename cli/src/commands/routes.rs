//! Route table listing command

use anyhow::Result;
use floorpay_core::app_router;
use tracing::info;

/// Print the application's route table
pub async fn routes_command() -> Result<()> {
    info!("Listing routes");

    let router = app_router()?;

    println!("🧭 Routes\n");
    for route in router.routes() {
        let mut flags = Vec::new();
        if route.is_lazy() {
            flags.push("lazy");
        }
        if route.requires_auth {
            flags.push("protected");
        }

        println!("{:<18} {:<16} {}", route.path, route.id.as_str(), flags.join(", "));
        if let Some(description) = &route.description {
            println!("{:<18} {}", "", description);
        }
    }

    Ok(())
}
