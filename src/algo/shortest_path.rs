/*!
Unweighted shortest paths.

Every edge counts as a single **hop** regardless of its weight, so a breadth-first search
from the start node discovers every node along a path with the minimum number of hops.
*/

use std::fmt::Display;

use itertools::Itertools;
use tracing::trace;

use super::*;
use crate::error::*;

/// A path `start -> ... -> end` along directed edges.
///
/// Renders as the node indices joined by `->`, eg. `0->1->2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    nodes: Vec<Node>,
}

impl Path {
    /// The nodes of the path from start to end (inclusive)
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Consumes the path and returns its nodes
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// The first node of the path
    pub fn start(&self) -> Node {
        self.nodes[0]
    }

    /// The last node of the path
    pub fn end(&self) -> Node {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of edges on the path
    pub fn hops(&self) -> NumNodes {
        (self.nodes.len() - 1) as NumNodes
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nodes.iter().join("->"))
    }
}

/// Fails with [`GraphError::VertexOutOfRange`] if `u` is not a node of `graph`
pub(crate) fn check_node<G: GraphNodeOrder>(graph: &G, u: Node) -> Result<()> {
    if graph.contains_node(u) {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange {
            node: u,
            size: graph.number_of_nodes(),
        })
    }
}

/// Hop-based shortest paths
pub trait ShortestPath: AdjacencyList + Traversal {
    /// Computes a path from `start` to `end` with the minimum number of edges.
    ///
    /// - Returns `Ok(Some(path))` if `end` is reachable from `start`,
    /// - returns `Ok(None)` if it is not,
    /// - and for `start == end` the path consists of the single node.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `start` or `end` is not a node.
    ///
    /// # Examples
    /// ```
    /// use matgraph::{prelude::*, algo::*};
    ///
    /// let graph = GraphMatrix::from_matrix(vec![
    ///     vec![0, 1, 0],
    ///     vec![0, 0, 1],
    ///     vec![0, 0, 0],
    /// ]).unwrap();
    ///
    /// let path = graph.shortest_path(0, 2).unwrap().unwrap();
    /// assert_eq!(path.to_string(), "0->1->2");
    /// assert!(graph.shortest_path(2, 0).unwrap().is_none());
    /// ```
    fn shortest_path(&self, start: Node, end: Node) -> Result<Option<Path>> {
        check_node(self, start)?;
        check_node(self, end)?;

        if start == end {
            return Ok(Some(Path { nodes: vec![start] }));
        }

        let parent = self
            .bfs_with_predecessor(start)
            .stop_at(end)
            .parent_array(self.number_of_nodes());

        if parent[end as usize].is_none() {
            trace!(start, end, "no path");
            return Ok(None);
        }

        let mut nodes = vec![end];
        let mut node = end;
        while let Some(p) = parent[node as usize] {
            node = p.get();
            nodes.push(node);
        }
        nodes.reverse();

        debug_assert_eq!(nodes[0], start);
        Ok(Some(Path { nodes }))
    }

    /// Returns the hop distance from `start` to every node or `None` for unreachable nodes.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `start` is not a node.
    fn hop_distances(&self, start: Node) -> Result<Vec<Option<NumNodes>>> {
        check_node(self, start)?;
        Ok(self
            .bfs_with_predecessor(start)
            .depths(self.number_of_nodes()))
    }
}

impl<G> ShortestPath for G where G: AdjacencyList + Sized {}
