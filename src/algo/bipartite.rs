/*!
# Bipartite Graph Algorithms

A two-colouring computed by a BFS that starts at node `0` only. Edges are followed in their
direction; an edge between two nodes of the same colour rejects the graph.

Nodes that are not reachable from node `0` are never coloured. They are **not** treated
specially but are put on the right side of the resulting [`Bipartition`].
*/

use std::{collections::VecDeque, fmt::Display};

use itertools::Itertools;
use tracing::trace;

use super::*;

/// Side of a node in a two-colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other side
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Two groups of nodes, each in ascending order.
///
/// Renders as `The graph is bipartite: A={0, 2}, B={1}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bipartition {
    left: Vec<Node>,
    right: Vec<Node>,
}

impl Bipartition {
    /// Nodes coloured like node `0` (group `A`)
    pub fn left(&self) -> &[Node] {
        &self.left
    }

    /// All remaining nodes (group `B`)
    pub fn right(&self) -> &[Node] {
        &self.right
    }

    /// Returns the side of `u`.
    /// ** Panics if `u` is in neither group **
    pub fn side_of(&self, u: Node) -> Side {
        if self.left.binary_search(&u).is_ok() {
            Side::Left
        } else {
            assert!(self.right.binary_search(&u).is_ok());
            Side::Right
        }
    }

    /// Returns *true* if no edge of `graph` connects two nodes of the same group
    pub fn is_valid_for<G: AdjacencyList>(&self, graph: &G) -> bool {
        graph
            .edges()
            .all(|Edge(u, v)| self.side_of(u) != self.side_of(v))
    }
}

impl Display for Bipartition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The graph is bipartite: A={{{}}}, B={{{}}}",
            self.left.iter().join(", "),
            self.right.iter().join(", ")
        )
    }
}

/// A trait for computing bipartitions of graphs.
pub trait BipartiteTest: AdjacencyList {
    /// Colours the graph by a BFS from node `0` and returns the resulting groups or `None`
    /// if an edge connects two nodes of the same colour. The empty graph yields two empty
    /// groups.
    ///
    /// # Examples
    /// ```
    /// use matgraph::{prelude::*, algo::*};
    ///
    /// let path = GraphMatrix::from_matrix(vec![
    ///     vec![0, 1, 0],
    ///     vec![1, 0, 1],
    ///     vec![0, 1, 0],
    /// ]).unwrap();
    /// assert_eq!(
    ///     path.bipartition().unwrap().to_string(),
    ///     "The graph is bipartite: A={0, 2}, B={1}"
    /// );
    /// ```
    fn bipartition(&self) -> Option<Bipartition> {
        let mut colors: Vec<Option<Side>> = vec![None; self.len()];

        if !self.is_empty() {
            colors[0] = Some(Side::Left);
            let mut queue = VecDeque::from([0 as Node]);

            while let Some(u) = queue.pop_front() {
                let color = colors[u as usize];
                for v in self.neighbors_of(u) {
                    match colors[v as usize] {
                        None => {
                            colors[v as usize] = color.map(Side::opposite);
                            queue.push_back(v);
                        }
                        Some(c) if Some(c) == color => {
                            trace!(u, v, "edge within one colour class");
                            return None;
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        let (left, right): (Vec<Node>, Vec<Node>) = self
            .vertices_range()
            .partition(|&u| colors[u as usize] == Some(Side::Left));

        Some(Bipartition { left, right })
    }

    /// Returns *true* if [`BipartiteTest::bipartition`] succeeds
    fn is_bipartite(&self) -> bool {
        self.bipartition().is_some()
    }
}

impl<G> BipartiteTest for G where G: AdjacencyList {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{from_edges, from_undirected_edges};

    #[test]
    fn path() {
        for n in 1..10 {
            let edges = (0..n - 1).map(|u| (u, u + 1)).collect_vec();
            let mut graph = from_undirected_edges(n, &edges);

            let bip = graph.bipartition().unwrap();
            assert!(bip.is_valid_for(&graph));
            assert_eq!(bip.left().len() as NumNodes, n.div_ceil(2));

            if n > 2 {
                // closing the path into an odd cycle breaks bipartiteness
                let u = 1 - (n % 2);
                graph.set_weight(u, n - 1, 1);
                graph.set_weight(n - 1, u, 1);
                assert!(!graph.is_bipartite());
            }
        }
    }

    #[test]
    fn directed_triangle() {
        let graph = from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(graph.bipartition().is_none());
    }

    #[test]
    fn even_cycle() {
        let graph = from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(
            graph.bipartition().unwrap().to_string(),
            "The graph is bipartite: A={0, 2}, B={1, 3}"
        );
    }

    #[test]
    fn self_loop_rejects() {
        let graph = GraphMatrix::from_matrix(vec![vec![0, 1], vec![0, 3]]).unwrap();
        assert!(!graph.is_bipartite());
    }

    #[test]
    fn empty_graph() {
        let bip = GraphMatrix::new().bipartition().unwrap();
        assert_eq!(bip, Bipartition::default());
        assert_eq!(bip.to_string(), "The graph is bipartite: A={}, B={}");
    }

    #[test]
    fn unreached_nodes_end_up_on_the_right() {
        // 2 -> 3 is never explored from node 0
        let graph = from_edges(4, &[(0, 1), (2, 3)]);
        let bip = graph.bipartition().unwrap();

        assert_eq!(bip.left(), &[0]);
        assert_eq!(bip.right(), &[1, 2, 3]);
        assert_eq!(bip.side_of(2), Side::Right);
        assert!(!bip.is_valid_for(&graph));
    }

    #[test]
    fn odd_cycle_outside_of_reach_is_ignored() {
        let graph = from_edges(4, &[(1, 2), (2, 3), (3, 1)]);
        assert!(graph.is_bipartite());
    }
}
