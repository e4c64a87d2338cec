//! CLI argument parsing for campus-route
//!
//! Supports global flags: --map, --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use campus_route_core::format::OutputFormat;
use parse::parse_output_format;

/// campus-route - shortest routes over a campus map
#[derive(Parser, Debug)]
#[command(name = "campus-route")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Campus map file (defaults to $CAMPUS_ROUTE_MAP, the config file, then data/campus_map.txt)
    #[arg(long, global = true)]
    pub map: Option<PathBuf>,

    /// Output format: human or json
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, or campus_route_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all locations with their ids
    Locations,

    /// Shortest path by total distance
    Path {
        /// Start location (exact name)
        from: String,

        /// Destination location (exact name)
        to: String,
    },

    /// Shortest path by number of hops, ignoring distances
    Hops {
        /// Start location (exact name)
        from: String,

        /// Destination location (exact name)
        to: String,
    },

    /// Check whether every location is reachable from the first one
    Connected,

    /// Shortest path by distance with one road blocked
    Avoid {
        /// Start location (exact name)
        from: String,

        /// Destination location (exact name)
        to: String,

        /// One end of the blocked road
        block_from: String,

        /// Other end of the blocked road
        block_to: String,
    },

    /// Interactive menu reading choices from stdin
    Menu,
}
