//! Path → destination lookup table.
//!
//! # Design Decisions
//! - Exact, case-sensitive matching; no trailing-slash normalization
//! - Later rules overwrite earlier ones with the same path
//! - Immutable after construction; reloads build a new table
//! - Shared snapshots are published through [`RouteTableHandle`] (lock-free)

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::redirect::rules::PathRule;

/// Immutable mapping from request path to redirect destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// Fold rules into a table in order; the last rule for a path wins.
    pub fn build<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = PathRule>,
    {
        rules
            .into_iter()
            .map(|rule| (rule.path, rule.destination))
            .collect()
    }

    /// Destination for an exact path, if configured.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.routes.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes.iter().map(|(p, d)| (p.as_str(), d.as_str()))
    }
}

impl<P, D> FromIterator<(P, D)> for RouteTable
where
    P: Into<String>,
    D: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (P, D)>>(iter: T) -> Self {
        let mut routes = HashMap::new();
        for (path, destination) in iter {
            routes.insert(path.into(), destination.into());
        }
        Self { routes }
    }
}

impl From<HashMap<String, String>> for RouteTable {
    fn from(routes: HashMap<String, String>) -> Self {
        Self { routes }
    }
}

/// Shared pointer to the current [`RouteTable`] snapshot.
///
/// Readers load a snapshot per request; [`replace`](Self::replace) publishes a
/// whole new table atomically.
#[derive(Debug, Clone)]
pub struct RouteTableHandle {
    current: Arc<ArcSwap<RouteTable>>,
}

impl RouteTableHandle {
    pub fn new(table: RouteTable) -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(table)),
        }
    }

    /// The table in effect right now.
    pub fn load(&self) -> Arc<RouteTable> {
        self.current.load_full()
    }

    /// Publish a new table for subsequent requests.
    pub fn replace(&self, table: RouteTable) {
        self.current.store(Arc::new(table));
    }
}
