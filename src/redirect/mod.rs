//! Redirect subsystem.
//!
//! # Data Flow
//! ```text
//! Redirect document (YAML / JSON bytes)
//!     → rules.rs (deserialize into ordered PathRule list)
//!     → table.rs (fold into RouteTable, last rule wins)
//!     → handler.rs (RedirectService closes over table + fallback)
//!
//! Incoming Request
//!     → handler.rs (path lookup in current table snapshot)
//!     → 302 Found + Location   (match)
//!     → fallback service       (no match)
//! ```
//!
//! # Design Decisions
//! - Tables are immutable; reloads swap in a whole new table
//! - Exact path matching only (no prefix, wildcard or slash normalization)
//! - Parsing and table building are pure functions

pub mod handler;
pub mod rules;
pub mod table;

pub use handler::{json_handler, map_handler, yaml_handler, RedirectLayer, RedirectService};
pub use rules::{parse_json, parse_yaml, Format, ParseError, PathRule};
pub use table::{RouteTable, RouteTableHandle};
