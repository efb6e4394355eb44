//! Plain-value front end over the algorithm traits of this module.

use super::*;
use crate::error::Result;

/// Returned by [`GraphAlgorithms::shortest_path`] if the end node is unreachable
pub const NO_PATH: &str = "-1";

/// Returned by [`GraphAlgorithms::is_bipartite`] if the graph is rejected
pub const NOT_BIPARTITE: &str = "0";

/// Returned by [`GraphAlgorithms::negative_cycle`] if no negative cycle is found
pub const NO_NEGATIVE_CYCLE: &str = "0";

/// Stateless collection of the graph algorithms returning booleans and display strings.
///
/// # Examples
/// ```
/// use matgraph::{prelude::*, algo::*};
///
/// let graph = GraphMatrix::from_matrix(vec![
///     vec![0, 1, 0],
///     vec![1, 0, 1],
///     vec![0, 1, 0],
/// ]).unwrap();
///
/// assert!(GraphAlgorithms::is_connected(&graph));
/// assert_eq!(GraphAlgorithms::shortest_path(&graph, 0, 2).unwrap(), "0->1->2");
/// assert_eq!(GraphAlgorithms::shortest_path(&graph, 1, 1).unwrap(), "1");
/// assert!(!GraphAlgorithms::is_contains_cycle(&graph));
/// assert_eq!(
///     GraphAlgorithms::is_bipartite(&graph),
///     "The graph is bipartite: A={0, 2}, B={1}"
/// );
/// assert_eq!(GraphAlgorithms::negative_cycle(&graph), "0");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphAlgorithms;

impl GraphAlgorithms {
    /// *true* if every node is reachable from node `0`, see [`Connectivity::is_connected`]
    pub fn is_connected(graph: &GraphMatrix) -> bool {
        graph.is_connected()
    }

    /// The hop-minimal path as `0->1->2` or [`NO_PATH`], see [`ShortestPath::shortest_path`]
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`](crate::error::GraphError) for nodes `>= n`.
    pub fn shortest_path(graph: &GraphMatrix, start: Node, end: Node) -> Result<String> {
        Ok(graph
            .shortest_path(start, end)?
            .map_or_else(|| NO_PATH.to_string(), |path| path.to_string()))
    }

    /// See [`CycleDetection::contains_cycle`]
    pub fn is_contains_cycle(graph: &GraphMatrix) -> bool {
        graph.contains_cycle()
    }

    /// The two groups as `The graph is bipartite: A={..}, B={..}` or [`NOT_BIPARTITE`]
    pub fn is_bipartite(graph: &GraphMatrix) -> String {
        graph
            .bipartition()
            .map_or_else(|| NOT_BIPARTITE.to_string(), |parts| parts.to_string())
    }

    /// `Negative cycle: <distance>` or [`NO_NEGATIVE_CYCLE`],
    /// see [`NegativeCycleDetection::negative_cycle`]
    pub fn negative_cycle(graph: &GraphMatrix) -> String {
        graph
            .negative_cycle()
            .map_or_else(|| NO_NEGATIVE_CYCLE.to_string(), |cycle| cycle.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GraphError;

    fn graph(matrix: Vec<Vec<Weight>>) -> GraphMatrix {
        GraphMatrix::from_matrix(matrix).unwrap()
    }

    #[test]
    fn empty_graph() {
        let g = GraphMatrix::new();
        assert!(GraphAlgorithms::is_connected(&g));
        assert!(!GraphAlgorithms::is_contains_cycle(&g));
        assert_eq!(
            GraphAlgorithms::is_bipartite(&g),
            "The graph is bipartite: A={}, B={}"
        );
        assert_eq!(GraphAlgorithms::negative_cycle(&g), NO_NEGATIVE_CYCLE);
        assert_eq!(
            GraphAlgorithms::shortest_path(&g, 0, 0),
            Err(GraphError::VertexOutOfRange { node: 0, size: 0 })
        );
    }

    #[test]
    fn unreachable_end() {
        let g = graph(vec![vec![0, 0], vec![1, 0]]);
        assert!(!GraphAlgorithms::is_connected(&g));
        assert_eq!(GraphAlgorithms::shortest_path(&g, 0, 1).unwrap(), NO_PATH);
        assert_eq!(GraphAlgorithms::shortest_path(&g, 1, 0).unwrap(), "1->0");
    }

    #[test]
    fn out_of_range() {
        let g = graph(vec![vec![0, 1], vec![1, 0]]);
        assert_eq!(
            GraphAlgorithms::shortest_path(&g, 0, 2),
            Err(GraphError::VertexOutOfRange { node: 2, size: 2 })
        );
    }

    #[test]
    fn directed_triangle() {
        let g = graph(vec![vec![0, 1, 0], vec![0, 0, -3], vec![1, 0, 0]]);
        assert!(GraphAlgorithms::is_connected(&g));
        assert!(GraphAlgorithms::is_contains_cycle(&g));
        assert_eq!(GraphAlgorithms::is_bipartite(&g), NOT_BIPARTITE);
        assert_eq!(GraphAlgorithms::negative_cycle(&g), "Negative cycle: -2");
        assert_eq!(GraphAlgorithms::shortest_path(&g, 2, 1).unwrap(), "2->0->1");
    }

    #[test]
    fn mutual_pair() {
        let g = graph(vec![vec![0, 1], vec![1, 0]]);
        assert!(!GraphAlgorithms::is_contains_cycle(&g));
        assert_eq!(
            GraphAlgorithms::is_bipartite(&g),
            "The graph is bipartite: A={0}, B={1}"
        );
        assert_eq!(GraphAlgorithms::negative_cycle(&g), NO_NEGATIVE_CYCLE);
    }
}
