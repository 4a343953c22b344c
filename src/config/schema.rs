//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the redirect
//! server. All types derive Serde traits for deserialization from TOML.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::redirect::{Format, PathRule};

/// Root configuration for the redirect server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Where redirect rules come from.
    pub redirects: RedirectsConfig,

    /// Response for paths without a redirect.
    pub fallback: FallbackConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Redirect rule sources.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RedirectsConfig {
    /// YAML or JSON redirect document. Relative paths are resolved against
    /// the config file's directory.
    pub file: Option<PathBuf>,

    /// Explicit document format; inferred from `file`'s extension when unset.
    pub format: Option<Format>,

    /// Reload `file` when it changes on disk.
    pub watch: bool,

    /// Inline rules, applied before the rules from `file`.
    pub rules: Vec<PathRule>,
}

impl RedirectsConfig {
    /// The format `file` is parsed with, if one can be determined.
    pub fn format(&self) -> Option<Format> {
        self.format
            .or_else(|| self.file.as_deref().and_then(Format::from_path))
    }
}

impl Default for RedirectsConfig {
    fn default() -> Self {
        Self {
            file: None,
            format: None,
            watch: true,
            rules: Vec::new(),
        }
    }
}

/// Fixed response served when no redirect matches.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// HTTP status code.
    pub status: u16,

    /// Plain-text body.
    pub body: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            status: 404,
            body: "404 page not found".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Log line format: "full" or "compact".
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "urlshort=info,tower_http=info".to_string(),
            log_format: "full".to_string(),
        }
    }
}
