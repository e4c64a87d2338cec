//! Route commands: `path`, `hops` and `avoid`

use std::io::{self, Write};

use serde::Serialize;

use super::render;
use crate::cli::{Cli, OutputFormat};
use campus_route_core::error::Result;
use campus_route_core::graph::{
    bfs_shortest_path, dijkstra_avoiding_edge, dijkstra_shortest_path, hop_count, VertexId,
    WeightedPath,
};
use campus_route_core::map::CampusMap;

/// JSON shape shared by all route commands
#[derive(Debug, Serialize)]
pub struct RouteReport<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub found: bool,
    pub path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hops: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<[&'a str; 2]>,
}

impl<'a> RouteReport<'a> {
    fn new(map: &CampusMap, from: &'a str, to: &'a str, path: &[VertexId]) -> Self {
        Self {
            from,
            to,
            found: !path.is_empty(),
            path: map.path_names(path),
            total_distance: None,
            hops: None,
            blocked: None,
        }
    }

    fn weighted(map: &CampusMap, from: &'a str, to: &'a str, result: &WeightedPath) -> Self {
        let mut report = Self::new(map, from, to, &result.path);
        if result.found() {
            report.total_distance = Some(result.total_weight);
        }
        report
    }
}

/// Endpoint and blocked-road names for the `avoid` command
pub struct AvoidQuery<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub block_from: &'a str,
    pub block_to: &'a str,
}

fn print_json(report: &RouteReport<'_>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_header(out: &mut impl Write, cli: &Cli, header: &str) -> io::Result<()> {
    if !cli.quiet {
        writeln!(out, "{}", header)?;
    }
    Ok(())
}

/// Execute the `path` command
pub fn execute_path(
    cli: &Cli,
    format: OutputFormat,
    map: &CampusMap,
    from: &str,
    to: &str,
) -> Result<()> {
    let src = map.resolve(from)?;
    let dest = map.resolve(to)?;

    let result = dijkstra_shortest_path(map.graph(), src, dest)?;

    match format {
        OutputFormat::Json => print_json(&RouteReport::weighted(map, from, to, &result)),
        OutputFormat::Human => {
            let mut out = io::stdout().lock();
            print_header(&mut out, cli, render::WEIGHTED_HEADER)?;
            render::write_weighted(&mut out, map, &result)?;
            Ok(())
        }
    }
}

/// Execute the `hops` command
pub fn execute_hops(
    cli: &Cli,
    format: OutputFormat,
    map: &CampusMap,
    from: &str,
    to: &str,
) -> Result<()> {
    let src = map.resolve(from)?;
    let dest = map.resolve(to)?;

    let path = bfs_shortest_path(map.graph(), src, dest)?;

    match format {
        OutputFormat::Json => {
            let mut report = RouteReport::new(map, from, to, &path);
            report.hops = hop_count(&path);
            print_json(&report)
        }
        OutputFormat::Human => {
            let mut out = io::stdout().lock();
            print_header(&mut out, cli, render::HOPS_HEADER)?;
            render::write_hops(&mut out, map, &path)?;
            Ok(())
        }
    }
}

/// Execute the `avoid` command
pub fn execute_avoid(
    cli: &Cli,
    format: OutputFormat,
    map: &CampusMap,
    query: AvoidQuery<'_>,
) -> Result<()> {
    let src = map.resolve(query.from)?;
    let dest = map.resolve(query.to)?;
    let avoid_u = map.resolve(query.block_from)?;
    let avoid_v = map.resolve(query.block_to)?;

    let result = dijkstra_avoiding_edge(map.graph(), src, dest, avoid_u, avoid_v)?;

    match format {
        OutputFormat::Json => {
            let mut report = RouteReport::weighted(map, query.from, query.to, &result);
            report.blocked = Some([query.block_from, query.block_to]);
            print_json(&report)
        }
        OutputFormat::Human => {
            let mut out = io::stdout().lock();
            let header = render::avoid_header(query.block_from, query.block_to);
            print_header(&mut out, cli, &header)?;
            render::write_weighted(&mut out, map, &result)?;
            Ok(())
        }
    }
}
