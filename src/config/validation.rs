//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, status codes, bind address)
//! - Check the redirect file has a usable format
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::schema::ServerConfig;

const LOG_FORMATS: &[&str] = &["full", "compact"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    InvalidBindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("fallback.status {0} is not an HTTP status code")]
    InvalidFallbackStatus(u16),

    #[error("observability.log_format {0:?} is not one of full, compact")]
    UnknownLogFormat(String),

    #[error("cannot infer format of redirect file {0:?}; set redirects.format")]
    UnknownRedirectFormat(PathBuf),

    #[error("redirects.rules[{0}] has an empty path")]
    EmptyRulePath(usize),
}

/// Check every semantic rule, collecting all violations.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if !(100..=599).contains(&config.fallback.status) {
        errors.push(ValidationError::InvalidFallbackStatus(config.fallback.status));
    }

    if !LOG_FORMATS.contains(&config.observability.log_format.as_str()) {
        errors.push(ValidationError::UnknownLogFormat(
            config.observability.log_format.clone(),
        ));
    }

    if let Some(file) = &config.redirects.file {
        if config.redirects.format().is_none() {
            errors.push(ValidationError::UnknownRedirectFormat(file.clone()));
        }
    }

    for (i, rule) in config.redirects.rules.iter().enumerate() {
        if rule.path.is_empty() {
            errors.push(ValidationError::EmptyRulePath(i));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
