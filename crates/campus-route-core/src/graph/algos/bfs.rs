use crate::error::Result;
use crate::graph::path::reconstruct_path;
use crate::graph::types::VertexId;
use crate::graph::Graph;
use std::collections::VecDeque;

/// State tracked during BFS search
struct BfsState {
    visited: Vec<bool>,
    parent: Vec<Option<VertexId>>,
    queue: VecDeque<VertexId>,
}

impl BfsState {
    fn new(n: usize, src: VertexId) -> Self {
        let mut state = Self {
            visited: vec![false; n],
            parent: vec![None; n],
            queue: VecDeque::new(),
        };
        state.visited[src] = true;
        state.queue.push_back(src);
        state
    }
}

/// Shortest path from `src` to `dest` by number of edges, ignoring weights.
///
/// Vertices are marked on discovery, so each enters the queue at most once.
/// Returns an empty path when `dest` is unreachable; the hop count of a found
/// path is `path.len() - 1`.
#[tracing::instrument(skip(graph), fields(vertices = graph.num_vertices()))]
pub fn bfs_shortest_path(graph: &Graph, src: VertexId, dest: VertexId) -> Result<Vec<VertexId>> {
    graph.check_vertex("bfs_shortest_path", src)?;
    graph.check_vertex("bfs_shortest_path", dest)?;

    let mut state = BfsState::new(graph.num_vertices(), src);

    while let Some(u) = state.queue.pop_front() {
        if u == dest {
            break;
        }

        for edge in graph.edges_of(u) {
            if !state.visited[edge.to] {
                state.visited[edge.to] = true;
                state.parent[edge.to] = Some(u);
                state.queue.push_back(edge.to);
            }
        }
    }

    let path = reconstruct_path(src, dest, &state.parent);
    tracing::debug!(
        found = !path.is_empty(),
        hops = path.len().saturating_sub(1),
        "bfs_complete"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;

    #[test]
    fn test_bfs_line_graph() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1, 1.0, true).unwrap();
        g.add_edge(1, 2, 2.0, true).unwrap();

        let path = bfs_shortest_path(&g, 0, 2).unwrap();
        assert_eq!(path, vec![0, 1, 2]);
        assert_eq!(path.len() - 1, 2);
    }

    #[test]
    fn test_bfs_ignores_weights() {
        // Direct road is heavy, detour is light; BFS takes the direct one
        let mut g = Graph::new(3);
        g.add_edge(0, 1, 1.0, true).unwrap();
        g.add_edge(1, 2, 1.0, true).unwrap();
        g.add_edge(0, 2, 100.0, true).unwrap();

        assert_eq!(bfs_shortest_path(&g, 0, 2).unwrap(), vec![0, 2]);
    }

    #[test]
    fn test_bfs_source_equals_destination() {
        let g = Graph::new(2);
        assert_eq!(bfs_shortest_path(&g, 1, 1).unwrap(), vec![1]);
    }

    #[test]
    fn test_bfs_unreachable() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1, 1.0, true).unwrap();
        g.add_edge(2, 3, 1.0, true).unwrap();

        assert!(bfs_shortest_path(&g, 0, 3).unwrap().is_empty());
    }

    #[test]
    fn test_bfs_follows_direction() {
        let mut g = Graph::new(3);
        g.add_edge(0, 1, 1.0, false).unwrap();
        g.add_edge(1, 2, 1.0, false).unwrap();

        assert_eq!(bfs_shortest_path(&g, 0, 2).unwrap(), vec![0, 1, 2]);
        assert!(bfs_shortest_path(&g, 2, 0).unwrap().is_empty());
    }

    #[test]
    fn test_bfs_with_cycle() {
        let mut g = Graph::new(4);
        g.add_edge(0, 1, 1.0, true).unwrap();
        g.add_edge(1, 2, 1.0, true).unwrap();
        g.add_edge(2, 0, 1.0, true).unwrap();
        g.add_edge(2, 3, 1.0, true).unwrap();

        assert_eq!(bfs_shortest_path(&g, 0, 3).unwrap(), vec![0, 2, 3]);
    }

    #[test]
    fn test_bfs_invalid_endpoints() {
        let g = Graph::new(2);
        assert!(matches!(
            bfs_shortest_path(&g, 2, 0),
            Err(RouteError::VertexOutOfRange { .. })
        ));
        assert!(matches!(
            bfs_shortest_path(&g, 0, 2),
            Err(RouteError::VertexOutOfRange { .. })
        ));
    }
}
