//! CLI command implementations
//!
//! Each subcommand is an async `run` function; shared helpers for the
//! catalog URL and the blocked-times preferences file live here.

pub mod conflicts;
pub mod parse;
pub mod search;
pub mod validate;

use crate::models::{BlockedTime, TimeInterval};
use crate::parser::blocked_to_interval;
use crate::{Context, Result};
use std::path::Path;

/// Default catalog endpoint, overridable per command or via
/// `COURSEPLAN_CATALOG_URL`
const DEFAULT_CATALOG_URL: &str = "http://localhost:3001/api/catalog";

/// Resolve the catalog base URL: explicit flag, then environment, then default
pub(crate) fn resolve_catalog_url(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var("COURSEPLAN_CATALOG_URL").ok())
        .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string())
}

/// Load blocked intervals from a YAML preferences file.
///
/// Entries that fail to parse (unknown day, bad clock time) are dropped;
/// a missing `--blocked` flag means no blocked time at all.
pub(crate) fn load_blocked(path: Option<&Path>) -> Result<Vec<TimeInterval>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read blocked-times file {}", path.display()))?;
    let entries: Vec<BlockedTime> =
        serde_yaml::from_str(&content).context("Failed to parse blocked-times file")?;
    Ok(entries.iter().filter_map(blocked_to_interval).collect())
}
