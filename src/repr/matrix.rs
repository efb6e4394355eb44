/*!
# Dense Adjacency Matrix

[`GraphMatrix`] stores a directed, weighted graph as an `n x n` grid of [`Weight`]s where
cell `(u, v)` holds the weight of the edge from `u` to `v` and `0` means that there is no
edge. As a consequence, edges of weight `0` can not be represented.

The grid is square at all times: every constructor and [`GraphMatrix::load_graph`]
validate the shape, and every operator producing a new graph builds a fresh grid.
*/

use std::fmt::Display;

use itertools::Itertools;
use tracing::debug;

use crate::{error::*, ops::*, *};

/// A directed, weighted graph backed by a dense adjacency matrix.
///
/// # Examples
/// ```
/// use matgraph::prelude::*;
///
/// let graph = GraphMatrix::from_matrix(vec![
///     vec![0, 1, 0],
///     vec![0, 0, 1],
///     vec![0, 0, 0],
/// ]).unwrap();
///
/// assert_eq!(graph.size(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.to_string(), "[0, 1, 0], [0, 0, 1], [0, 0, 0]\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GraphMatrix {
    matrix: Vec<Vec<Weight>>,
}

/// Returns an error naming the first row whose length differs from the number of rows
fn validate_square(matrix: &[Vec<Weight>]) -> Result<()> {
    let expected = matrix.len();
    match matrix.iter().find_position(|row| row.len() != expected) {
        None => Ok(()),
        Some((row, cells)) => {
            debug!(row, len = cells.len(), expected, "rejecting non-square matrix");
            Err(GraphError::InvalidShape {
                row,
                len: cells.len(),
                expected,
            })
        }
    }
}

impl GraphMatrix {
    /// Creates an empty graph without any nodes
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `n` nodes and no edges
    pub fn zeros(n: NumNodes) -> Self {
        Self {
            matrix: vec![vec![0; n as usize]; n as usize],
        }
    }

    /// Creates a graph with `n` nodes where cell `(u, v)` is set to `f(u, v)`.
    /// The result is square by construction.
    pub fn from_fn<F>(n: NumNodes, mut f: F) -> Self
    where
        F: FnMut(Node, Node) -> Weight,
    {
        Self {
            matrix: (0..n)
                .map(|u| (0..n).map(|v| f(u, v)).collect_vec())
                .collect_vec(),
        }
    }

    /// Creates a graph from an adjacency matrix.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidShape`] if the matrix is not square.
    pub fn from_matrix(matrix: Vec<Vec<Weight>>) -> Result<Self> {
        validate_square(&matrix)?;
        Ok(Self { matrix })
    }

    /// Replaces the adjacency matrix of the graph.
    /// If the new matrix is rejected, the graph remains unchanged.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidShape`] if the matrix is not square.
    pub fn load_graph(&mut self, matrix: Vec<Vec<Weight>>) -> Result<()> {
        validate_square(&matrix)?;
        self.matrix = matrix;
        Ok(())
    }

    /// Returns the number of vertices
    pub fn size(&self) -> NumNodes {
        self.matrix.len() as NumNodes
    }

    /// Returns the number of non-zero cells, ie. the number of directed edges.
    /// An undirected graph given as a symmetric matrix counts every edge twice.
    pub fn edge_count(&self) -> NumEdges {
        self.matrix
            .iter()
            .flatten()
            .filter(|&&w| w != 0)
            .count() as NumEdges
    }

    /// Read-only view of the adjacency matrix
    pub fn matrix(&self) -> &[Vec<Weight>] {
        &self.matrix
    }

    /// Consumes the graph and returns the adjacency matrix
    pub fn into_matrix(self) -> Vec<Vec<Weight>> {
        self.matrix
    }

    /// Returns the weight of the edge `(u, v)` or `0` if there is none.
    /// ** Panics if `u >= n || v >= n` **
    pub fn weight(&self, u: Node, v: Node) -> Weight {
        self.matrix[u as usize][v as usize]
    }

    /// Sets the weight of the edge `(u, v)` and returns the previous weight.
    /// Setting a weight of `0` removes the edge.
    /// ** Panics if `u >= n || v >= n` **
    pub fn set_weight(&mut self, u: Node, v: Node, weight: Weight) -> Weight {
        std::mem::replace(&mut self.matrix[u as usize][v as usize], weight)
    }

    /// Returns the summary line `Graph with <V> vertices and <E> edges.`
    pub fn summary(&self) -> String {
        format!(
            "Graph with {} vertices and {} edges.",
            self.size(),
            self.edge_count()
        )
    }

    /// Prints the summary line to stdout
    pub fn print_graph(&self) {
        println!("{}", self.summary());
    }

    /// Fails with [`GraphError::DimensionMismatch`] if `other` has a different size
    pub(crate) fn check_same_size(&self, other: &GraphMatrix) -> Result<()> {
        if self.size() != other.size() {
            debug!(
                left = self.size(),
                right = other.size(),
                "graphs of different sizes combined"
            );
            return Err(GraphError::DimensionMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(())
    }

    /// Mutable iterator over all cells in row-major order
    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Weight> + '_ {
        self.matrix.iter_mut().flatten()
    }

    /// Iterator over pairs of cells of two equally sized graphs with the cells of `self`
    /// being mutable.
    pub(crate) fn zip_cells_mut<'a>(
        &'a mut self,
        other: &'a GraphMatrix,
    ) -> impl Iterator<Item = (&'a mut Weight, Weight)> + 'a {
        debug_assert_eq!(self.size(), other.size());
        self.matrix
            .iter_mut()
            .flatten()
            .zip(other.matrix.iter().flatten().copied())
    }
}

impl TryFrom<Vec<Vec<Weight>>> for GraphMatrix {
    type Error = GraphError;

    fn try_from(value: Vec<Vec<Weight>>) -> Result<Self> {
        Self::from_matrix(value)
    }
}

impl Display for GraphMatrix {
    /// Renders the matrix row-major as `[a, b], [c, d]` followed by a line break
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self
            .matrix
            .iter()
            .map(|row| format!("[{}]", row.iter().join(", ")))
            .join(", ");
        writeln!(f, "{rows}")
    }
}

impl GraphNodeOrder for GraphMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.size()
    }
}

impl GraphEdgeOrder for GraphMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.edge_count()
    }
}

impl AdjacencyList for GraphMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.matrix[u as usize]
            .iter()
            .enumerate()
            .filter_map(|(v, &w)| (w != 0).then_some(v as Node))
    }
}

impl AdjacencyTest for GraphMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight(u, v) != 0
    }
}

impl WeightedAdjacency for GraphMatrix {
    fn weight_of(&self, u: Node, v: Node) -> Weight {
        self.weight(u, v)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::random_grid;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn empty() {
        let graph = GraphMatrix::new();
        assert_eq!(graph.size(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
        assert_eq!(graph.to_string(), "\n");
        assert_eq!(graph.summary(), "Graph with 0 vertices and 0 edges.");
    }

    #[test]
    fn load_round_trip() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [0 as NumNodes, 1, 2, 5, 20] {
            for _ in 0..10 {
                let grid = random_grid(rng, n, 0.3);
                let graph = GraphMatrix::from_matrix(grid.clone()).unwrap();
                assert_eq!(graph.matrix(), grid.as_slice());
                assert_eq!(graph.size(), n);

                let mut loaded = GraphMatrix::new();
                loaded.load_graph(grid.clone()).unwrap();
                assert_eq!(loaded, graph);
                assert_eq!(loaded.into_matrix(), grid);
            }
        }
    }

    #[test]
    fn reject_non_square() {
        assert_eq!(
            GraphMatrix::from_matrix(vec![vec![0, 1], vec![0]]),
            Err(GraphError::InvalidShape {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert!(GraphMatrix::from_matrix(vec![vec![0, 1, 2]]).is_err());
        assert!(GraphMatrix::try_from(vec![vec![], vec![]]).is_err());

        let mut graph = GraphMatrix::from_matrix(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let before = graph.clone();
        assert!(graph.load_graph(vec![vec![1, 2, 3], vec![4, 5, 6]]).is_err());
        assert_eq!(graph, before);
    }

    #[test]
    fn edge_count() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);

        assert_eq!(GraphMatrix::zeros(7).edge_count(), 0);

        for n in [1 as NumNodes, 3, 10, 30] {
            let p = rng.random_range(0.0..1.0);
            let grid = random_grid(rng, n, p);
            let expected = grid.iter().flatten().filter(|&&w| w != 0).count() as NumEdges;
            let graph = GraphMatrix::from_matrix(grid).unwrap();
            assert_eq!(graph.edge_count(), expected);
            assert_eq!(graph.edges().count() as NumEdges, expected);
            assert_eq!(graph.degrees().sum::<NumNodes>(), expected);
        }
    }

    #[test]
    fn render() {
        let graph =
            GraphMatrix::from_matrix(vec![vec![0, 1, 0], vec![0, 0, -1], vec![1, 0, 0]]).unwrap();
        assert_eq!(graph.to_string(), "[0, 1, 0], [0, 0, -1], [1, 0, 0]\n");
        assert_eq!(graph.summary(), "Graph with 3 vertices and 3 edges.");

        let single = GraphMatrix::from_matrix(vec![vec![4]]).unwrap();
        assert_eq!(single.to_string(), "[4]\n");
    }

    #[test]
    fn adjacency() {
        let graph =
            GraphMatrix::from_matrix(vec![vec![0, 2, 3], vec![0, 0, 0], vec![-1, 0, 5]]).unwrap();

        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1, 2]);
        assert_eq!(graph.neighbors_of(1).count(), 0);
        assert_eq!(graph.degree_of(2), 2);
        assert_eq!(graph.max_degree(), 2);
        assert_eq!(graph.degree_distribution(), vec![(0, 1), (2, 2)]);

        assert!(graph.has_edge(2, 0));
        assert!(!graph.has_edge(0, 0));
        assert!(graph.has_self_loop(2));
        assert!(!graph.has_bidirected_edge(0, 2));

        assert_eq!(
            graph.edges().collect_vec(),
            vec![Edge(0, 1), Edge(0, 2), Edge(2, 0), Edge(2, 2)]
        );
        assert_eq!(
            graph.weighted_edges().map(|e| e.weight).collect_vec(),
            vec![2, 3, -1, 5]
        );
        assert_eq!(graph.total_weight(), 9);
    }

    #[test]
    fn set_weight() {
        let mut graph = GraphMatrix::zeros(3);
        assert_eq!(graph.set_weight(0, 2, 7), 0);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.set_weight(0, 2, 0), 7);
        assert!(graph.is_singleton_graph());
    }

    #[test]
    fn from_fn() {
        let graph = GraphMatrix::from_fn(4, |u, v| (u as Weight) - (v as Weight));
        assert_eq!(graph.size(), 4);
        assert_eq!(graph.weight(3, 1), 2);
        assert_eq!(graph.weight(1, 3), -2);
        assert_eq!(graph.edge_count(), 12);
    }
}
