//! Configuration for campus-route
//!
//! The map file is resolved from, in order: an explicit path, the
//! `CAMPUS_ROUTE_MAP` environment variable, the global config file, and
//! finally `data/campus_map.txt`.

pub mod global;

use std::path::PathBuf;

pub use global::GlobalConfig;

/// Map file used when nothing else is configured
pub const DEFAULT_MAP_PATH: &str = "data/campus_map.txt";

/// Environment variable naming the map file
pub const MAP_ENV_VAR: &str = "CAMPUS_ROUTE_MAP";

/// Pick the map file from an explicit path, env value, or config, in that order
pub fn resolve_map_path(
    explicit: Option<PathBuf>,
    env_value: Option<PathBuf>,
    config: &GlobalConfig,
) -> PathBuf {
    explicit
        .or(env_value)
        .or_else(|| config.map_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MAP_PATH))
}
