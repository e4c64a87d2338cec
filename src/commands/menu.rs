//! Interactive menu session over a loaded campus map
//!
//! Input is read as whitespace-separated tokens, so location names cannot contain spaces.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::debug;

use super::render;
use crate::cli::OutputFormat;
use campus_route_core::bail_usage;
use campus_route_core::error::Result;
use campus_route_core::graph::{
    bfs_shortest_path, dijkstra_avoiding_edge, dijkstra_shortest_path, is_connected, VertexId,
};
use campus_route_core::map::CampusMap;

const MENU: &str = "\n=== IITJ Campus Route Planner ===
1. List all locations
2. Shortest path (by distance)
3. Shortest path (by number of hops)
4. Check if campus map is connected
5. Shortest path with a blocked road
6. Exit
Enter choice: ";

pub const JSON_UNSUPPORTED: &str = "the interactive menu does not support --format json";

const START_PROMPT: &str = "Enter start location (exact name): ";
const DEST_PROMPT: &str = "Enter destination location (exact name): ";
const BLOCK_FROM_PROMPT: &str = "Enter blocked road FROM location: ";
const BLOCK_TO_PROMPT: &str = "Enter blocked road TO location: ";

/// Whitespace-separated tokens pulled lazily from a line reader
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input
    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

/// One menu session: prompts, reads answers and prints results
struct Session<'a, R, W> {
    map: &'a CampusMap,
    input: Tokens<R>,
    out: W,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(self.input.next_token()?.unwrap_or_default())
    }

    /// Prompt for start and destination; `None` after reporting unknown names
    fn read_endpoints(&mut self) -> Result<Option<(VertexId, VertexId)>> {
        let start = self.prompt(START_PROMPT)?;
        let dest = self.prompt(DEST_PROMPT)?;
        match (self.map.location_id(&start), self.map.location_id(&dest)) {
            (Some(src), Some(dest)) => Ok(Some((src, dest))),
            _ => {
                writeln!(self.out, "Unknown start or destination.")?;
                Ok(None)
            }
        }
    }

    fn shortest_by_distance(&mut self) -> Result<()> {
        let Some((src, dest)) = self.read_endpoints()? else {
            return Ok(());
        };
        let result = dijkstra_shortest_path(self.map.graph(), src, dest)?;
        writeln!(self.out, "{}", render::WEIGHTED_HEADER)?;
        render::write_weighted(&mut self.out, self.map, &result)?;
        Ok(())
    }

    fn shortest_by_hops(&mut self) -> Result<()> {
        let Some((src, dest)) = self.read_endpoints()? else {
            return Ok(());
        };
        let path = bfs_shortest_path(self.map.graph(), src, dest)?;
        writeln!(self.out, "{}", render::HOPS_HEADER)?;
        render::write_hops(&mut self.out, self.map, &path)?;
        Ok(())
    }

    fn shortest_avoiding(&mut self) -> Result<()> {
        let Some((src, dest)) = self.read_endpoints()? else {
            return Ok(());
        };
        let block_from = self.prompt(BLOCK_FROM_PROMPT)?;
        let block_to = self.prompt(BLOCK_TO_PROMPT)?;
        let (Some(avoid_u), Some(avoid_v)) = (
            self.map.location_id(&block_from),
            self.map.location_id(&block_to),
        ) else {
            writeln!(self.out, "Unknown blocked road endpoints.")?;
            return Ok(());
        };

        let result = dijkstra_avoiding_edge(self.map.graph(), src, dest, avoid_u, avoid_v)?;
        writeln!(self.out, "{}", render::avoid_header(&block_from, &block_to))?;
        render::write_weighted(&mut self.out, self.map, &result)?;
        Ok(())
    }

    fn run(&mut self) -> Result<()> {
        loop {
            write!(self.out, "{}", MENU)?;
            self.out.flush()?;

            let choice = self
                .input
                .next_token()?
                .and_then(|token| token.parse::<i64>().ok());
            let Some(choice) = choice else {
                writeln!(self.out, "Invalid input. Exiting.")?;
                return Ok(());
            };
            debug!(choice, "menu_choice");

            match choice {
                1 => render::write_locations(&mut self.out, self.map)?,
                2 => self.shortest_by_distance()?,
                3 => self.shortest_by_hops()?,
                4 => render::write_connectivity(&mut self.out, is_connected(self.map.graph()))?,
                5 => self.shortest_avoiding()?,
                6 => {
                    writeln!(self.out, "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.out, "Invalid choice. Try again.")?,
            }
        }
    }
}

/// Execute the `menu` command
///
/// Runs until option 6, end of input, or a non-numeric choice.
pub fn execute<R: BufRead, W: Write>(
    format: OutputFormat,
    map: &CampusMap,
    input: R,
    out: W,
) -> Result<()> {
    if format == OutputFormat::Json {
        bail_usage!(JSON_UNSUPPORTED);
    }

    let mut session = Session {
        map,
        input: Tokens::new(input),
        out,
    };
    session.run()
}
