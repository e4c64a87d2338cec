//! Command dispatch logic for campus-route

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use campus_route_core::config::GlobalConfig;
use campus_route_core::error::Result;

mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, config: &GlobalConfig, format: OutputFormat, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, format, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
