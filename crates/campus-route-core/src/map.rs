//! Campus map loading and location name lookup
//!
//! Map files are whitespace-delimited:
//!
//! ```text
//! N M
//! name_0
//! ...
//! name_{N-1}
//! nameU nameV weight      (M lines)
//! ```
//!
//! Every road is bidirectional. Names may not contain whitespace.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::bail_invalid_map;
use crate::error::{Result, RouteError};
use crate::graph::{Graph, VertexId};

/// A graph plus the bijection between location names and vertex ids
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    graph: Graph,
    name_to_id: HashMap<String, VertexId>,
    id_to_name: Vec<String>,
}

impl CampusMap {
    /// Create a map with the given locations (ids by position) and no roads.
    ///
    /// A repeated name resolves to its last id; earlier ids keep their name.
    pub fn with_locations<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id_to_name: Vec<String> = names.into_iter().map(Into::into).collect();
        let name_to_id = id_to_name
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();
        Self {
            graph: Graph::new(id_to_name.len()),
            name_to_id,
            id_to_name,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Add a road between two named locations
    pub fn add_road(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        let u = self.resolve(from)?;
        let v = self.resolve(to)?;
        self.graph.add_edge(u, v, weight, true)
    }

    pub fn num_locations(&self) -> usize {
        self.id_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.num_vertices() == 0
    }

    /// Get the location id for a name, or `None` if unknown
    pub fn location_id(&self, name: &str) -> Option<VertexId> {
        self.name_to_id.get(name).copied()
    }

    /// Like [`CampusMap::location_id`] but fails with `UnknownLocation`
    pub fn resolve(&self, name: &str) -> Result<VertexId> {
        self.location_id(name)
            .ok_or_else(|| RouteError::unknown_location(name))
    }

    pub fn location_name(&self, id: VertexId) -> Option<&str> {
        self.id_to_name.get(id).map(String::as_str)
    }

    /// Iterate `(id, name)` pairs in id order
    pub fn locations(&self) -> impl Iterator<Item = (VertexId, &str)> {
        self.id_to_name
            .iter()
            .enumerate()
            .map(|(id, name)| (id, name.as_str()))
    }

    /// Names along a path; ids without a name render as `?`
    pub fn path_names(&self, path: &[VertexId]) -> Vec<String> {
        path.iter()
            .map(|&id| self.location_name(id).unwrap_or("?").to_string())
            .collect()
    }
}

fn parse_count(token: Option<&str>) -> Option<usize> {
    token.and_then(|t| t.parse::<usize>().ok())
}

/// Parse a campus map from the text format described in the module docs.
///
/// Malformed headers and missing location names are errors. A truncated or
/// unreadable edge line stops edge reading, keeping the roads read so far; a road
/// naming an unknown location or carrying a negative or non-finite weight is skipped.
pub fn parse_campus_map(content: &str) -> Result<CampusMap> {
    let mut tokens = content.split_whitespace();

    let (Some(n), Some(m)) = (parse_count(tokens.next()), parse_count(tokens.next())) else {
        bail_invalid_map!("invalid file header (expected vertex and edge counts)");
    };

    let mut names = Vec::new();
    for i in 0..n {
        match tokens.next() {
            Some(name) => names.push(name),
            None => bail_invalid_map!(format!("expected {} location names, found {}", n, i)),
        }
    }
    let mut map = CampusMap::with_locations(names);

    let mut roads = 0;
    for i in 0..m {
        let (Some(u_name), Some(v_name), Some(weight_token)) =
            (tokens.next(), tokens.next(), tokens.next())
        else {
            warn!(edge = i, "failed to read edge from map, stopping");
            break;
        };
        let Ok(weight) = weight_token.parse::<f64>() else {
            warn!(edge = i, weight = weight_token, "failed to read edge weight, stopping");
            break;
        };

        let (Some(u), Some(v)) = (map.location_id(u_name), map.location_id(v_name)) else {
            warn!(from = u_name, to = v_name, "unknown location(s) in edge, skipping");
            continue;
        };
        if !weight.is_finite() || weight < 0.0 {
            warn!(from = u_name, to = v_name, weight, "invalid edge weight, skipping");
            continue;
        }

        map.graph.add_edge(u, v, weight, true)?;
        roads += 1;
    }

    debug!(locations = n, roads, "parsed_campus_map");
    Ok(map)
}

/// Load a campus map from a file
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_campus_map(path: &Path) -> Result<CampusMap> {
    let content = fs::read_to_string(path)
        .map_err(|e| RouteError::io_operation("read campus map", path.display(), e))?;
    parse_campus_map(&content)
}
