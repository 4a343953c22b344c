//! Path-based URL redirect service library.
//!
//! Maps request paths to redirect destinations loaded from YAML, JSON or an
//! in-memory map, delegating unmapped paths to a fallback service.
//!
//! ```no_run
//! use axum::{http::StatusCode, Router};
//! use urlshort::redirect::yaml_handler;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let fallback = Router::new().fallback(|| async { (StatusCode::NOT_FOUND, "not found") });
//! let yaml = b"- path: /go\n  url: https://example.com/go\n";
//! let redirects = yaml_handler(yaml, fallback)?;
//!
//! let app = Router::new().fallback_service(redirects);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod redirect;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use redirect::{RedirectService, RouteTable};
