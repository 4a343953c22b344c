//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the redirect service in front of the fallback
//! - Wire up middleware (tracing, request timeout)
//! - Bind server to listener
//! - Stop accepting and drain on shutdown

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::fallback::fallback_router;
use crate::redirect::{RedirectService, RouteTable, RouteTableHandle};

/// HTTP server for the redirect service.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
    table: RouteTableHandle,
}

impl HttpServer {
    /// Create a new HTTP server serving `table` with the given configuration.
    pub fn new(config: ServerConfig, table: RouteTable) -> Self {
        let table = RouteTableHandle::new(table);
        let redirects = RedirectService::new(table.clone(), fallback_router(&config.fallback));

        let router = Self::build_router(&config, redirects);
        Self {
            router,
            config,
            table,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, redirects: RedirectService<Router>) -> Router {
        Router::new()
            .fallback_service(redirects)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// Handle for replacing the served table (hot reload).
    pub fn table(&self) -> RouteTableHandle {
        self.table.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run the server until a shutdown signal is broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.table.load().len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
