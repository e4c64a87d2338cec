//! Campus Route Core Library
//!
//! Graph storage and shortest-route algorithms for campus maps, plus the map
//! loader, configuration and logging shared with the `campus-route` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod map;
