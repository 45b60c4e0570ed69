//! CLI command implementations

pub mod login;
pub mod navigate;
pub mod payment;
pub mod routes;
pub mod slaves;

pub use login::login_command;
pub use navigate::navigate_command;
pub use payment::payment_command;
pub use routes::routes_command;
pub use slaves::slaves_command;

use crate::config::AppConfigLoader;
use crate::terminal::TerminalPrompter;
use anyhow::{Context, Result};
use floorpay_core::{ApiClient, LoginGate};
use std::path::Path;
use std::sync::Arc;

/// Resolve configuration and build a login gate talking to the configured origin
async fn build_gate(loader: &AppConfigLoader) -> Result<LoginGate<TerminalPrompter>> {
    let config = loader.load().await?;
    tracing::debug!(base_url = %config.base_url(), "Resolved API base URL");
    let client = ApiClient::new(&config).context("Failed to create API client")?;
    Ok(LoginGate::new(Arc::new(client), TerminalPrompter::new()))
}

/// Read and parse a JSON record file
async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
