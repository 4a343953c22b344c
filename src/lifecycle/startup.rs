//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the initial redirect table from the validated configuration
//! - Start the redirect file watcher when enabled
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last, once the table is loaded

use tokio::net::TcpListener;
use thiserror::Error;

use crate::config::{load_route_table, ConfigError, RedirectWatcher, ServerConfig};
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;

/// Error type for server startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("listener error: {0}")]
    Io(#[from] std::io::Error),

    #[error("redirect watcher error: {0}")]
    Watch(#[from] notify::Error),
}

/// Load the table, then serve until `shutdown` fires.
pub async fn serve(config: ServerConfig, shutdown: &Shutdown) -> Result<(), StartupError> {
    let shutdown_rx = shutdown.subscribe();
    let table = load_route_table(&config.redirects)?;
    tracing::info!(routes = table.len(), "Redirect table loaded");

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config, table);

    // Dropping the watcher stops it, so it lives until the server returns.
    let redirects = &server.config().redirects;
    let _watcher = if redirects.watch && redirects.file.is_some() {
        Some(RedirectWatcher::new(redirects.clone(), server.table()).run()?)
    } else {
        None
    };

    server.run(listener, shutdown_rx).await?;
    Ok(())
}
