//! Connectivity command

use std::io;

use super::render;
use crate::cli::{Cli, OutputFormat};
use campus_route_core::error::Result;
use campus_route_core::graph::{is_connected, reachable_count};
use campus_route_core::map::CampusMap;

/// Execute the `connected` command
pub fn execute(cli: &Cli, format: OutputFormat, map: &CampusMap) -> Result<()> {
    let graph = map.graph();
    let connected = is_connected(graph);
    let reachable = reachable_count(graph, 0);

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "connected": connected,
                "locations": graph.num_vertices(),
                "reachable": reachable,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            render::write_connectivity(&mut io::stdout().lock(), connected)?;
            if !connected && !cli.quiet {
                println!(
                    "{} of {} locations reachable from {}",
                    reachable,
                    graph.num_vertices(),
                    map.location_name(0).unwrap_or("?")
                );
            }
        }
    }

    Ok(())
}
