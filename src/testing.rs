//! Helpers shared by the unit tests of this crate.

use itertools::Itertools;
use rand::Rng;

use crate::*;

/// Creates an `n x n` grid where every cell independently holds a non-zero weight in
/// `-5..=5` with probability `p` and `0` otherwise.
pub(crate) fn random_grid<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Vec<Vec<Weight>> {
    (0..n)
        .map(|_| {
            (0..n)
                .map(|_| {
                    if rng.random_bool(p) {
                        random_nonzero_weight(rng)
                    } else {
                        0
                    }
                })
                .collect_vec()
        })
        .collect_vec()
}

/// Uniformly draws a weight from `-5..=5` without `0`
pub(crate) fn random_nonzero_weight<R: Rng>(rng: &mut R) -> Weight {
    let w = rng.random_range(1..=5);
    if rng.random_bool(0.5) { w } else { -w }
}

/// Creates a random graph, see [`random_grid`]
pub(crate) fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> GraphMatrix {
    GraphMatrix::from_matrix(random_grid(rng, n, p)).unwrap()
}

/// Unit-weight graph on `n` nodes with the given directed edges
pub(crate) fn from_edges(n: NumNodes, edges: &[(Node, Node)]) -> GraphMatrix {
    let mut graph = GraphMatrix::zeros(n);
    for &(u, v) in edges {
        graph.set_weight(u, v, 1);
    }
    graph
}

/// Same as [`from_edges`] but inserts every edge in both directions
pub(crate) fn from_undirected_edges(n: NumNodes, edges: &[(Node, Node)]) -> GraphMatrix {
    let mut graph = GraphMatrix::zeros(n);
    for &(u, v) in edges {
        graph.set_weight(u, v, 1);
        graph.set_weight(v, u, 1);
    }
    graph
}
