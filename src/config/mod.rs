//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!
//! redirect sources (inline rules + YAML/JSON file)
//!     → loader.rs (load_route_table)
//!     → RouteTable published through RouteTableHandle
//!
//! On redirect file change:
//!     watcher.rs detects change
//!     → loader.rs rebuilds the table
//!     → atomic swap of the current RouteTable
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; only the redirect table hot-reloads
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, load_route_table, read_config, ConfigError};
pub use schema::{
    FallbackConfig, ListenerConfig, ObservabilityConfig, RedirectsConfig, ServerConfig,
    TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
pub use watcher::RedirectWatcher;
