//! Redirect file watcher for hot reload.

use std::path::Path;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::loader::{load_route_table, ConfigError};
use crate::config::schema::RedirectsConfig;
use crate::redirect::RouteTableHandle;

/// Rebuilds the route table when the redirect file changes.
///
/// A reload that fails to read or parse keeps the table currently served.
#[derive(Debug, Clone)]
pub struct RedirectWatcher {
    redirects: RedirectsConfig,
    table: RouteTableHandle,
}

impl RedirectWatcher {
    pub fn new(redirects: RedirectsConfig, table: RouteTableHandle) -> Self {
        Self { redirects, table }
    }

    /// Rebuild the table from all sources and publish it.
    ///
    /// Returns the number of routes now served.
    pub fn reload(&self) -> Result<usize, ConfigError> {
        let table = load_route_table(&self.redirects)?;
        let routes = table.len();
        self.table.replace(table);
        Ok(routes)
    }

    /// Start watching the redirect file in a background thread.
    ///
    /// The parent directory is watched so that editors replacing the file
    /// (write to temp, rename) are picked up as well.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let file = self
            .redirects
            .file
            .clone()
            .ok_or_else(|| notify::Error::generic("no redirect file configured"))?;
        let dir = match file.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => Path::new(".").to_path_buf(),
        };
        let file_name = file.file_name().map(ToOwned::to_owned);

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let relevant = event
                        .paths
                        .iter()
                        .any(|p| p.file_name() == file_name.as_deref());
                    if relevant && (event.kind.is_modify() || event.kind.is_create()) {
                        tracing::info!("Redirect file change detected, reloading...");
                        match self.reload() {
                            Ok(routes) => tracing::info!(routes, "Redirect table reloaded"),
                            Err(e) => tracing::error!(
                                "Failed to reload redirects: {}. Keeping current table.",
                                e
                            ),
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?file, "Redirect watcher started");
        Ok(watcher)
    }
}
