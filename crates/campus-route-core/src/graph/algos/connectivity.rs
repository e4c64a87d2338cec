use crate::graph::types::VertexId;
use crate::graph::Graph;
use std::collections::VecDeque;

/// Number of distinct vertices reachable from `root` along directed edges (root included).
///
/// Returns 0 when `root` is not a vertex of `graph`.
pub fn reachable_count(graph: &Graph, root: VertexId) -> usize {
    if !graph.contains(root) {
        return 0;
    }

    let mut visited = vec![false; graph.num_vertices()];
    let mut queue = VecDeque::new();
    visited[root] = true;
    queue.push_back(root);
    let mut count = 1;

    while let Some(u) = queue.pop_front() {
        for edge in graph.edges_of(u) {
            if !visited[edge.to] {
                visited[edge.to] = true;
                queue.push_back(edge.to);
                count += 1;
            }
        }
    }

    count
}

/// True iff every vertex is reachable from vertex 0.
///
/// An empty graph is connected. One-way edges make this a reachability test from
/// vertex 0, not an undirected connectivity test.
#[tracing::instrument(skip(graph), fields(vertices = graph.num_vertices()))]
pub fn is_connected(graph: &Graph) -> bool {
    let n = graph.num_vertices();
    if n == 0 {
        return true;
    }

    let reached = reachable_count(graph, 0);
    tracing::debug!(reached, "connectivity_census");
    reached == n
}
