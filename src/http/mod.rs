//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace + timeout layers)
//!     → redirect::RedirectService (path lookup)
//!     → 302 Found, or fallback.rs (configured response)
//!     → Send to client
//! ```

pub mod fallback;
pub mod server;

pub use fallback::fallback_router;
pub use server::HttpServer;
