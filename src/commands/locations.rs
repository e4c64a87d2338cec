//! Locations command

use std::io;

use super::render;
use crate::cli::{Cli, OutputFormat};
use campus_route_core::error::Result;
use campus_route_core::map::CampusMap;

/// Execute the `locations` command
pub fn execute(cli: &Cli, format: OutputFormat, map: &CampusMap) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = map
                .locations()
                .map(|(id, name)| serde_json::json!({ "id": id, "name": name }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human if cli.quiet => {
            for (_, name) in map.locations() {
                println!("{}", name);
            }
        }
        OutputFormat::Human => {
            render::write_locations(&mut io::stdout().lock(), map)?;
        }
    }

    Ok(())
}
