//! Path reconstruction from a predecessor array

use crate::graph::types::VertexId;

/// Walk predecessor links back from `dest` and return the path in source-first order.
///
/// Returns an empty path when either endpoint is outside `parent`, when `dest` was
/// never reached, or when the walk runs out of links before reaching `src`.
pub fn reconstruct_path(
    src: VertexId,
    dest: VertexId,
    parent: &[Option<VertexId>],
) -> Vec<VertexId> {
    if dest >= parent.len() || src >= parent.len() {
        return Vec::new();
    }
    if parent[dest].is_none() && dest != src {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = Some(dest);
    while let Some(v) = current {
        path.push(v);
        if v == src {
            break;
        }
        // A consistent parent map has no cycles, so a walk longer than N is broken.
        if path.len() > parent.len() {
            return Vec::new();
        }
        current = parent[v];
    }

    path.reverse();
    if path.first() == Some(&src) {
        path
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_simple_chain() {
        // 0 -> 1 -> 2
        let parent = vec![None, Some(0), Some(1)];
        assert_eq!(reconstruct_path(0, 2, &parent), vec![0, 1, 2]);
    }

    #[test]
    fn test_reconstruct_source_equals_dest() {
        let parent = vec![None, None];
        assert_eq!(reconstruct_path(1, 1, &parent), vec![1]);
    }

    #[test]
    fn test_unreached_destination() {
        let parent = vec![None, Some(0), None];
        assert!(reconstruct_path(0, 2, &parent).is_empty());
    }

    #[test]
    fn test_out_of_range_endpoints() {
        let parent = vec![None, Some(0)];
        assert!(reconstruct_path(0, 2, &parent).is_empty());
        assert!(reconstruct_path(5, 1, &parent).is_empty());
    }

    #[test]
    fn test_walk_not_reaching_source() {
        // 2 was reached from 1, but 1 has no parent and is not the source
        let parent = vec![None, None, Some(1)];
        assert!(reconstruct_path(0, 2, &parent).is_empty());
    }

    #[test]
    fn test_cyclic_parent_map() {
        let parent = vec![None, Some(2), Some(1)];
        assert!(reconstruct_path(0, 2, &parent).is_empty());
    }
}
