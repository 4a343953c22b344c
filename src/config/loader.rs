//! Configuration and redirect loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{RedirectsConfig, ServerConfig};
use crate::config::validation::{validate_config, ValidationError};
use crate::redirect::{ParseError, PathRule, RouteTable};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error("Redirect file {path:?}: {source}")]
    Redirects {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Cannot infer format of redirect file {0:?}")]
    UnknownFormat(PathBuf),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read a TOML config file without semantic validation.
///
/// A relative `redirects.file` is resolved against the config file's
/// directory.
pub fn read_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: ServerConfig = toml::from_str(&content)?;

    if let (Some(file), Some(dir)) = (config.redirects.file.as_mut(), path.parent()) {
        if file.is_relative() {
            *file = dir.join(&*file);
        }
    }

    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Collect the configured rules in precedence order: inline rules first,
/// then the redirect file's rules.
pub fn load_rules(redirects: &RedirectsConfig) -> Result<Vec<PathRule>, ConfigError> {
    let mut rules = redirects.rules.clone();

    if let Some(file) = &redirects.file {
        let format = redirects
            .format()
            .ok_or_else(|| ConfigError::UnknownFormat(file.clone()))?;
        let data = fs::read(file).map_err(|source| ConfigError::Io {
            path: file.clone(),
            source,
        })?;
        let parsed = format.parse(&data).map_err(|source| ConfigError::Redirects {
            path: file.clone(),
            source,
        })?;
        tracing::debug!(file = ?file, format = %format, rules = parsed.len(), "Redirect file parsed");
        rules.extend(parsed);
    }

    Ok(rules)
}

/// Build the route table from every configured source.
pub fn load_route_table(redirects: &RedirectsConfig) -> Result<RouteTable, ConfigError> {
    load_rules(redirects).map(RouteTable::build)
}
