//! Command implementations for all campus-route commands

use std::io;

use tracing::debug;

use crate::cli::{Commands, OutputFormat};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{connected, locations, menu, route};
use campus_route_core::bail_usage;
use campus_route_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        // Usage errors take precedence over map loading errors
        if matches!(self, Commands::Menu) && ctx.format == OutputFormat::Json {
            bail_usage!(menu::JSON_UNSUPPORTED);
        }

        let map = ctx.load_map()?;

        let result = match self {
            Commands::Locations => locations::execute(ctx.cli, ctx.format, &map),
            Commands::Path { from, to } => route::execute_path(ctx.cli, ctx.format, &map, from, to),
            Commands::Hops { from, to } => route::execute_hops(ctx.cli, ctx.format, &map, from, to),
            Commands::Connected => connected::execute(ctx.cli, ctx.format, &map),
            Commands::Avoid {
                from,
                to,
                block_from,
                block_to,
            } => route::execute_avoid(
                ctx.cli,
                ctx.format,
                &map,
                route::AvoidQuery {
                    from,
                    to,
                    block_from,
                    block_to,
                },
            ),
            Commands::Menu => {
                let stdin = io::stdin();
                menu::execute(ctx.format, &map, stdin.lock(), io::stdout().lock())
            }
        };

        if ctx.cli.verbose {
            debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        }
        result
    }
}
