//! Command trait and context for dispatching commands

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use campus_route_core::config::{resolve_map_path, GlobalConfig, MAP_ENV_VAR};
use campus_route_core::error::{Result, RouteError};
use campus_route_core::map::{load_campus_map, CampusMap};
use campus_route_core::trace_time;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a GlobalConfig,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        cli: &'a Cli,
        config: &'a GlobalConfig,
        format: OutputFormat,
        start: Instant,
    ) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    pub fn map_path(&self) -> PathBuf {
        let env_value = env::var_os(MAP_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        resolve_map_path(self.cli.map.clone(), env_value, self.config)
    }

    /// Load the campus map, rejecting a map without locations
    pub fn load_map(&self) -> Result<CampusMap> {
        let path = self.map_path();
        let map = load_campus_map(&path)?;

        if self.cli.verbose {
            debug!(elapsed = ?self.start.elapsed(), path = %path.display(), "load_map");
        }
        trace_time!(self.start, "load_map", locations = map.num_locations());

        if map.is_empty() {
            return Err(RouteError::EmptyMap { path });
        }
        Ok(map)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("campus-route {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest-route planner for campus maps.");
        println!();
        println!("Run `campus-route --help` for usage information.");
        Ok(())
    }
}
