use tracing::trace;

use super::*;

/// Reachability queries anchored at a single node.
pub trait Connectivity: AdjacencyList + Traversal {
    /// Returns *true* if every node is reachable from node `0` along directed edges.
    ///
    /// Note that this is **not** strong connectivity: a node that can reach every other node
    /// but is not reachable from `0` makes the graph "not connected". The empty graph is
    /// connected.
    ///
    /// # Examples
    /// ```
    /// use matgraph::{prelude::*, algo::*};
    ///
    /// let chain = GraphMatrix::from_matrix(vec![
    ///     vec![0, 1, 0],
    ///     vec![0, 0, 1],
    ///     vec![0, 0, 0],
    /// ]).unwrap();
    /// assert!(chain.is_connected());
    ///
    /// let reversed = GraphMatrix::from_matrix(vec![
    ///     vec![0, 0, 0],
    ///     vec![1, 0, 0],
    ///     vec![0, 1, 0],
    /// ]).unwrap();
    /// assert!(!reversed.is_connected());
    /// ```
    fn is_connected(&self) -> bool {
        if self.is_empty() {
            return true;
        }

        let reached = self.bfs(0).count();
        trace!(reached, n = self.len(), "reachability from node 0");
        reached == self.len()
    }

    /// Returns all nodes reachable from `u` (including `u`) in ascending order.
    /// ** Panics if `u >= n` **
    fn reachable_from(&self, u: Node) -> Vec<Node> {
        let mut nodes: Vec<Node> = self.bfs(u).collect();
        nodes.sort_unstable();
        nodes
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}
