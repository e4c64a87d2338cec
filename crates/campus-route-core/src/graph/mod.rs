//! Graph store and route-finding operations
//!
//! Provides the algorithmic core of campus-route:
//! - Adjacency-list graph over dense vertex ids
//! - Dijkstra for weighted shortest paths, with an edge-avoiding variant
//! - BFS for hop-count shortest paths
//! - Reachability census for connectivity checks
//!
//! Every search allocates its own working state, so concurrent read-only queries
//! against one `Graph` need no coordination.

pub mod algos;
pub mod path;
pub mod store;
pub mod types;

pub use algos::{
    bfs_shortest_path, dijkstra_avoiding_edge, dijkstra_shortest_path, is_connected,
    reachable_count, BlockedEdge,
};
pub use path::reconstruct_path;
pub use store::Graph;
pub use types::{hop_count, Edge, VertexId, WeightedPath};
