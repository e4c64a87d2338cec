//! Property tests for the route-finding algorithms, checked against
//! an all-pairs Floyd-Warshall reference on small random graphs.

use proptest::prelude::*;

use campus_route_core::graph::{
    bfs_shortest_path, dijkstra_avoiding_edge, dijkstra_shortest_path, is_connected, Graph,
    VertexId,
};

const MAX_VERTICES: usize = 8;
const EPSILON: f64 = 1e-9;

type EdgeSpec = (usize, usize, f64, bool);

fn build_graph(n: usize, edges: &[EdgeSpec]) -> Graph {
    let mut graph = Graph::new(n);
    for &(u, v, weight, bidirectional) in edges {
        graph.add_edge(u, v, weight, bidirectional).unwrap();
    }
    graph
}

/// All-pairs distances; `unit` replaces every weight with 1.
fn floyd_warshall(graph: &Graph, unit: bool) -> Vec<Vec<f64>> {
    let n = graph.num_vertices();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (u, row) in dist.iter_mut().enumerate() {
        row[u] = 0.0;
        for edge in graph.neighbors(u).unwrap() {
            let w = if unit { 1.0 } else { edge.weight };
            if w < row[edge.to] {
                row[edge.to] = w;
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let via = dist[i][k] + dist[k][j];
                if via < dist[i][j] {
                    dist[i][j] = via;
                }
            }
        }
    }
    dist
}

/// Lightest edge `u -> v`, if any
fn lightest_edge(graph: &Graph, u: VertexId, v: VertexId) -> Option<f64> {
    graph
        .neighbors(u)
        .unwrap()
        .iter()
        .filter(|e| e.to == v)
        .map(|e| e.weight)
        .reduce(f64::min)
}

fn path_weight(graph: &Graph, path: &[VertexId]) -> Option<f64> {
    path.windows(2)
        .map(|pair| lightest_edge(graph, pair[0], pair[1]))
        .sum()
}

// Strategy producing a vertex count and edges over it.
fn graph_strategy() -> impl Strategy<Value = (usize, Vec<EdgeSpec>)> {
    (1..=MAX_VERTICES).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n, 0.0_f64..10.0, any::<bool>()), 0..n * 3);
        (Just(n), edges)
    })
}

fn query_strategy() -> impl Strategy<Value = (usize, Vec<EdgeSpec>, usize, usize)> {
    graph_strategy().prop_flat_map(|(n, edges)| (Just(n), Just(edges), 0..n, 0..n))
}

proptest! {
    #[test]
    fn dijkstra_path_is_valid_and_optimal((n, edges, src, dest) in query_strategy()) {
        let graph = build_graph(n, &edges);
        let reference = floyd_warshall(&graph, false);
        let result = dijkstra_shortest_path(&graph, src, dest).unwrap();

        if reference[src][dest].is_finite() {
            prop_assert_eq!(result.path.first(), Some(&src));
            prop_assert_eq!(result.path.last(), Some(&dest));
            let walked = path_weight(&graph, &result.path);
            prop_assert!(walked.is_some(), "consecutive vertices must share an edge");
            prop_assert!((walked.unwrap() - result.total_weight).abs() < EPSILON);
            prop_assert!((result.total_weight - reference[src][dest]).abs() < EPSILON);
        } else {
            prop_assert!(result.path.is_empty());
            prop_assert_eq!(result.total_weight, 0.0);
        }
    }

    #[test]
    fn bfs_path_has_minimum_hops((n, edges, src, dest) in query_strategy()) {
        let graph = build_graph(n, &edges);
        let reference = floyd_warshall(&graph, true);
        let path = bfs_shortest_path(&graph, src, dest).unwrap();

        if reference[src][dest].is_finite() {
            prop_assert_eq!(path.first(), Some(&src));
            prop_assert_eq!(path.last(), Some(&dest));
            prop_assert!(path_weight(&graph, &path).is_some());
            prop_assert_eq!((path.len() - 1) as f64, reference[src][dest]);
        } else {
            prop_assert!(path.is_empty());
        }
    }

    #[test]
    fn same_endpoint_is_single_vertex((n, edges, src, _dest) in query_strategy()) {
        let graph = build_graph(n, &edges);

        let weighted = dijkstra_shortest_path(&graph, src, src).unwrap();
        prop_assert_eq!(&weighted.path, &vec![src]);
        prop_assert_eq!(weighted.total_weight, 0.0);

        prop_assert_eq!(bfs_shortest_path(&graph, src, src).unwrap(), vec![src]);

        let avoided = dijkstra_avoiding_edge(&graph, src, src, 0, n - 1).unwrap();
        prop_assert_eq!(&avoided.path, &vec![src]);
    }

    #[test]
    fn blocking_absent_edge_changes_nothing(
        (n, edges, src, dest) in query_strategy(),
        block in (0..MAX_VERTICES, 0..MAX_VERTICES)
    ) {
        let graph = build_graph(n, &edges);
        let (a, b) = block;
        let present = (0..n).any(|u| {
            graph.neighbors(u).unwrap().iter().any(|e| {
                (u == a && e.to == b) || (u == b && e.to == a)
            })
        });
        prop_assume!(!present);

        let direct = dijkstra_shortest_path(&graph, src, dest).unwrap();
        let avoided = dijkstra_avoiding_edge(&graph, src, dest, a, b).unwrap();
        prop_assert_eq!(direct, avoided);
    }

    #[test]
    fn avoiding_edge_matches_graph_without_it(
        (n, edges, src, dest) in query_strategy(),
        pick in any::<prop::sample::Index>()
    ) {
        prop_assume!(!edges.is_empty());
        let (a, b, _, _) = edges[pick.index(edges.len())];

        let graph = build_graph(n, &edges);
        let pruned: Vec<EdgeSpec> = edges
            .iter()
            .copied()
            .filter(|&(u, v, _, _)| !((u == a && v == b) || (u == b && v == a)))
            .collect();
        let reference = floyd_warshall(&build_graph(n, &pruned), false);

        let result = dijkstra_avoiding_edge(&graph, src, dest, a, b).unwrap();
        if reference[src][dest].is_finite() {
            prop_assert!((result.total_weight - reference[src][dest]).abs() < EPSILON);
            for pair in result.path.windows(2) {
                let blocked = (pair[0] == a && pair[1] == b) || (pair[0] == b && pair[1] == a);
                prop_assert!(!blocked, "path uses blocked edge {:?}", pair);
            }
        } else {
            prop_assert!(result.path.is_empty());
        }
    }

    #[test]
    fn connectivity_matches_reachability_from_zero((n, edges) in graph_strategy()) {
        let graph = build_graph(n, &edges);
        let reference = floyd_warshall(&graph, true);
        let expected = reference[0].iter().all(|d| d.is_finite());
        prop_assert_eq!(is_connected(&graph), expected);
    }
}

#[test]
fn three_location_scenario() {
    const A: VertexId = 0;
    const B: VertexId = 1;
    const C: VertexId = 2;

    let graph = build_graph(3, &[(A, B, 1.0, true), (B, C, 2.0, true)]);

    let weighted = dijkstra_shortest_path(&graph, A, C).unwrap();
    assert_eq!(weighted.path, vec![A, B, C]);
    assert_eq!(weighted.total_weight, 3.0);

    let hops = bfs_shortest_path(&graph, A, C).unwrap();
    assert_eq!(hops, vec![A, B, C]);
    assert_eq!(hops.len() - 1, 2);

    let blocked = dijkstra_avoiding_edge(&graph, A, C, A, B).unwrap();
    assert!(blocked.path.is_empty());

    assert!(is_connected(&graph));
}

#[test]
fn empty_graph_is_connected() {
    assert!(is_connected(&Graph::new(0)));
}
