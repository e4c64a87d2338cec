/// Dense vertex identifier in `[0, N)`
pub type VertexId = usize;

/// A directed, weighted edge stored in the source vertex's adjacency list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: VertexId,
    pub weight: f64,
}

impl Edge {
    pub fn new(to: VertexId, weight: f64) -> Self {
        Self { to, weight }
    }
}

/// Result of a weighted search
///
/// An empty `path` means the destination is unreachable; `total_weight` is 0 in that case.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeightedPath {
    pub path: Vec<VertexId>,
    pub total_weight: f64,
}

impl WeightedPath {
    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Number of edges on a non-empty path, `None` when no path exists
pub fn hop_count(path: &[VertexId]) -> Option<usize> {
    path.len().checked_sub(1)
}
