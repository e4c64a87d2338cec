//! Adjacency-list graph over dense vertex ids

use crate::bail_out_of_range;
use crate::error::Result;
use crate::graph::types::{Edge, VertexId};

/// Fixed-size vertex set with per-vertex outgoing edges in insertion order
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adj: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `n` vertices and no edges
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
        }
    }

    /// Replace the graph with `n` vertices and no edges
    pub fn resize(&mut self, n: usize) {
        self.adj.clear();
        self.adj.resize(n, Vec::new());
    }

    pub fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    /// Total number of directed edges (a bidirectional road counts twice)
    pub fn num_edges(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, u: VertexId) -> bool {
        u < self.adj.len()
    }

    /// Insert `u -> v`, and `v -> u` as well when `bidirectional` is set.
    ///
    /// Parallel edges are kept; searches relax each of them.
    pub fn add_edge(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: f64,
        bidirectional: bool,
    ) -> Result<()> {
        let n = self.num_vertices();
        if u >= n {
            bail_out_of_range!("add_edge", u, n);
        }
        if v >= n {
            bail_out_of_range!("add_edge", v, n);
        }

        self.adj[u].push(Edge::new(v, weight));
        if bidirectional {
            self.adj[v].push(Edge::new(u, weight));
        }
        Ok(())
    }

    /// Outgoing edges of `u` in insertion order
    pub fn neighbors(&self, u: VertexId) -> Result<&[Edge]> {
        match self.adj.get(u) {
            Some(edges) => Ok(edges),
            None => bail_out_of_range!("neighbors", u, self.num_vertices()),
        }
    }

    /// Fail with `VertexOutOfRange` unless `u` is a vertex of this graph
    pub(crate) fn check_vertex(&self, operation: &str, u: VertexId) -> Result<()> {
        if !self.contains(u) {
            bail_out_of_range!(operation, u, self.num_vertices());
        }
        Ok(())
    }

    /// Adjacency of a vertex already known to be in range
    pub(crate) fn edges_of(&self, u: VertexId) -> &[Edge] {
        &self.adj[u]
    }
}
