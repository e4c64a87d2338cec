use crate::error::Result;
use crate::graph::path::reconstruct_path;
use crate::graph::types::{VertexId, WeightedPath};
use crate::graph::Graph;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub vertex: VertexId,
    pub distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// An undirected edge `{u, v}` treated as absent for the duration of one query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockedEdge {
    pub u: VertexId,
    pub v: VertexId,
}

impl BlockedEdge {
    pub fn new(u: VertexId, v: VertexId) -> Self {
        Self { u, v }
    }

    /// True when `from -> to` is this edge in either direction
    pub fn matches(&self, from: VertexId, to: VertexId) -> bool {
        (from == self.u && to == self.v) || (from == self.v && to == self.u)
    }
}

/// Per-query working state; allocated fresh and dropped on return
struct DijkstraState {
    dist: Vec<f64>,
    parent: Vec<Option<VertexId>>,
    visited: Vec<bool>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(n: usize, src: VertexId) -> Self {
        let mut state = Self {
            dist: vec![f64::INFINITY; n],
            parent: vec![None; n],
            visited: vec![false; n],
            heap: BinaryHeap::new(),
        };
        state.dist[src] = 0.0;
        state.heap.push(Reverse(HeapEntry {
            vertex: src,
            distance: 0.0,
        }));
        state
    }
}

/// Lazy-deletion Dijkstra with early exit once `dest` is finalized.
///
/// Both endpoints must already be validated against the graph.
fn dijkstra_search(
    graph: &Graph,
    src: VertexId,
    dest: VertexId,
    blocked: Option<BlockedEdge>,
) -> WeightedPath {
    let mut state = DijkstraState::new(graph.num_vertices(), src);

    while let Some(Reverse(HeapEntry { vertex: u, .. })) = state.heap.pop() {
        // Stale entry for an already-finalized vertex
        if state.visited[u] {
            continue;
        }
        state.visited[u] = true;

        if u == dest {
            break;
        }

        for edge in graph.edges_of(u) {
            if blocked.is_some_and(|b| b.matches(u, edge.to)) {
                continue;
            }

            let candidate = state.dist[u] + edge.weight;
            if candidate < state.dist[edge.to] {
                state.dist[edge.to] = candidate;
                state.parent[edge.to] = Some(u);
                state.heap.push(Reverse(HeapEntry {
                    vertex: edge.to,
                    distance: candidate,
                }));
            }
        }
    }

    if !state.dist[dest].is_finite() {
        return WeightedPath::not_found();
    }

    let path = reconstruct_path(src, dest, &state.parent);
    if path.is_empty() {
        return WeightedPath::not_found();
    }

    WeightedPath {
        path,
        total_weight: state.dist[dest],
    }
}

/// Shortest path from `src` to `dest` by cumulative edge weight.
///
/// Returns an empty path with zero weight when `dest` is unreachable.
/// Fails with `VertexOutOfRange` when either endpoint is not a vertex of `graph`.
#[tracing::instrument(skip(graph), fields(vertices = graph.num_vertices()))]
pub fn dijkstra_shortest_path(
    graph: &Graph,
    src: VertexId,
    dest: VertexId,
) -> Result<WeightedPath> {
    graph.check_vertex("dijkstra_shortest_path", src)?;
    graph.check_vertex("dijkstra_shortest_path", dest)?;

    let result = dijkstra_search(graph, src, dest, None);
    tracing::debug!(
        found = result.found(),
        total_weight = result.total_weight,
        "dijkstra_complete"
    );
    Ok(result)
}

/// Shortest weighted path that never traverses the road `{avoid_u, avoid_v}`.
///
/// The blocked edge is filtered during relaxation; `graph` is neither mutated nor copied.
/// Blocked ids that are not vertices of `graph` simply match no edge.
#[tracing::instrument(skip(graph), fields(vertices = graph.num_vertices()))]
pub fn dijkstra_avoiding_edge(
    graph: &Graph,
    src: VertexId,
    dest: VertexId,
    avoid_u: VertexId,
    avoid_v: VertexId,
) -> Result<WeightedPath> {
    graph.check_vertex("dijkstra_avoiding_edge", src)?;
    graph.check_vertex("dijkstra_avoiding_edge", dest)?;

    let blocked = BlockedEdge::new(avoid_u, avoid_v);
    let result = dijkstra_search(graph, src, dest, Some(blocked));
    tracing::debug!(
        found = result.found(),
        total_weight = result.total_weight,
        "dijkstra_avoiding_edge_complete"
    );
    Ok(result)
}
