//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Unweighted (hop-count) shortest path
//! - `dijkstra`: Weighted shortest path, optionally avoiding one road
//! - `connectivity`: Reachability census from vertex 0

pub mod bfs;
pub mod connectivity;
pub mod dijkstra;

pub use bfs::bfs_shortest_path;
pub use connectivity::{is_connected, reachable_count};
pub use dijkstra::{dijkstra_avoiding_edge, dijkstra_shortest_path, BlockedEdge};
