//! # floorpay CLI
//!
//! Terminal shell for the floor position service.
//!
//! ## Usage
//!
//! - `floorpay routes` - Show the route table
//! - `floorpay navigate /manage` - Open a view, logging in first if it is protected
//! - `floorpay login` - Check the admin password
//! - `floorpay payment receipt.json` - Show a payment confirmation
//! - `floorpay slaves devices.json` - List device positions

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod terminal;

use commands::{login_command, navigate_command, payment_command, routes_command, slaves_command};
use config::AppConfigLoader;

/// floorpay - client for the floor position service
#[derive(Parser)]
#[command(name = "floorpay")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Route table, admin login and record viewer for the floor position service")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Origin the application is served from, e.g. http://10.0.0.2:8080
    #[arg(long, env = "FLOORPAY_ORIGIN", global = true)]
    origin: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, env = "FLOORPAY_TIMEOUT_MS", global = true)]
    timeout_ms: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the route table
    Routes,

    /// Navigate to a path, logging in first if the view is protected
    Navigate {
        /// Path to open, e.g. /manage
        path: String,
    },

    /// Check the admin password against the server
    Login,

    /// Show a payment confirmation record
    Payment {
        /// JSON file holding the record
        file: PathBuf,
    },

    /// List device positions
    Slaves {
        /// JSON file holding the device listing
        file: PathBuf,

        /// Only show this floor
        #[arg(long)]
        floor: Option<i32>,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> AppConfigLoader {
    let mut loader = AppConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(origin) = &cli.origin {
        loader = loader.with_origin_override(origin.clone());
    }

    if let Some(timeout_ms) = cli.timeout_ms {
        loader = loader.with_timeout_override(timeout_ms);
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    floorpay_core::init_tracing_with_debug(cli.verbose);

    let config_loader = build_config_loader(&cli);

    match cli.command {
        Commands::Routes => routes_command().await,
        Commands::Navigate { path } => navigate_command(path, config_loader).await,
        Commands::Login => {
            if !login_command(config_loader).await? {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Payment { file } => payment_command(file).await,
        Commands::Slaves { file, floor } => slaves_command(file, floor).await,
    }
}
