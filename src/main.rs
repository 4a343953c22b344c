//! urlshort: path-based URL redirect server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ axum (trace, timeout)
//!                         │
//!                         ▼
//!                  RedirectService ── path in table? ──▶ 302 Found + Location
//!                         │
//!                         │ no
//!                         ▼
//!                  fallback router ──▶ configured status + body
//!
//!     redirects.yaml / .json ──▶ RouteTable ──(watcher, atomic swap)──▶ RedirectService
//! ```

use std::path::PathBuf;

use clap::Parser;

use urlshort::config::{load_route_table, read_config, validate_config, ConfigError, ServerConfig};
use urlshort::lifecycle::{self, Shutdown};
use urlshort::observability::init_logging;

#[derive(Parser)]
#[command(name = "urlshort")]
#[command(version, about = "Redirect request paths to configured URLs", long_about = None)]
struct Cli {
    /// Server configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,

    /// Override redirects.file (YAML or JSON)
    #[arg(short, long)]
    redirects: Option<PathBuf>,

    /// Load and parse everything, then exit without serving
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(file) = cli.redirects {
        config.redirects.file = Some(file);
    }

    init_logging(&config.observability)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::info!("urlshort v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        redirect_file = ?config.redirects.file,
        inline_rules = config.redirects.rules.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if cli.check {
        let table = load_route_table(&config.redirects)?;
        tracing::info!(routes = table.len(), "Configuration OK");
        return Ok(());
    }

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();
    lifecycle::serve(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
