//! CLI configuration loader for floorpay
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./floorpay.json or ./.floorpay/config.json
//! 3. XDG config: $XDG_CONFIG_HOME/floorpay/config.json or the platform config dir
//! 4. Built-in defaults
//!
//! `--origin` / `FLOORPAY_ORIGIN` and `--timeout-ms` / `FLOORPAY_TIMEOUT_MS`
//! override whatever the file says.

use anyhow::{anyhow, Context, Result};
use floorpay_core::config::DEFAULT_TIMEOUT_MS;
use floorpay_core::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Origin used when nothing else is configured
pub const DEFAULT_ORIGIN: &str = "http://localhost";

/// Raw configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// Origin the application is served from, e.g. `http://10.0.0.2:8080`
    #[serde(default)]
    pub origin: Option<String>,
    /// Request timeout in milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

/// CLI configuration loader
#[derive(Debug, Default)]
pub struct AppConfigLoader {
    config_override: Option<PathBuf>,
    origin_override: Option<String>,
    timeout_override: Option<u64>,
}

impl AppConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set origin override
    pub fn with_origin_override(mut self, origin: String) -> Self {
        self.origin_override = Some(origin);
        self
    }

    /// Set timeout override
    pub fn with_timeout_override(mut self, timeout_ms: u64) -> Self {
        self.timeout_override = Some(timeout_ms);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<ClientConfig> {
        let mut config = if let Some(override_path) = &self.config_override {
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        if let Some(origin) = &self.origin_override {
            config.origin = Some(origin.clone());
        }
        if let Some(timeout_ms) = self.timeout_override {
            config.timeout_ms = Some(timeout_ms);
        }

        self.resolve_config(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        let cwd = std::env::current_dir()?;
        let mut candidates = vec![
            cwd.join("floorpay.json"),
            cwd.join(".floorpay").join("config.json"),
        ];
        if let Some(config_dir) = self.get_xdg_config_dir() {
            candidates.push(config_dir.join("floorpay").join("config.json"));
        }

        for candidate in candidates {
            if candidate.is_file() {
                debug!(path = %candidate.display(), "Using config file");
                return self.load_file(&candidate).await;
            }
        }

        debug!("No config file found, using defaults");
        Ok(RawConfig::default())
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get XDG config directory
    fn get_xdg_config_dir(&self) -> Option<PathBuf> {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(dirs::config_dir)
    }

    /// Resolve raw config to ClientConfig
    fn resolve_config(&self, config: RawConfig) -> Result<ClientConfig> {
        let origin = config.origin.as_deref().unwrap_or(DEFAULT_ORIGIN);
        let timeout_ms = config.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS);

        let resolved = ClientConfig::from_origin(origin)?
            .with_timeout(Duration::from_millis(timeout_ms));

        resolved
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(resolved)
    }
}
