/*!
Cycle detection with a parent-only back-edge rule.

The search runs an iterative DFS from every yet unvisited node. A node is marked as visited
when it is popped from the stack. Every unvisited out-neighbor `v` of the current node `u` is
pushed and `u` is recorded as the parent of `v` (overwriting a parent recorded earlier). An
edge `(u, v)` to an already visited node `v` reports a cycle unless `v` is the parent of `u`.

This is deliberately weaker than tracking the recursion stack:
- the directed 2-cycle `0 -> 1 -> 0` is **not** reported, as `0` is the parent of `1`,
- an edge into a node visited via a different branch (eg. the diamond `0 -> 1, 0 -> 2, 1 -> 2`)
  **is** reported, even though the graph is acyclic.

For undirected graphs given as symmetric matrices the rule is exactly the classic
"back edge to a non-parent" test.
*/

use tracing::trace;

use super::*;

/// Detection of cycles using the parent-only back-edge rule, see the module documentation.
pub trait CycleDetection: AdjacencyList {
    /// Returns *true* if the search finds an edge to an already visited node which is not the
    /// parent of the current node.
    ///
    /// # Examples
    /// ```
    /// use matgraph::{prelude::*, algo::*};
    ///
    /// let triangle = GraphMatrix::from_matrix(vec![
    ///     vec![0, 1, 0],
    ///     vec![0, 0, 1],
    ///     vec![1, 0, 0],
    /// ]).unwrap();
    /// assert!(triangle.contains_cycle());
    ///
    /// let two_cycle = GraphMatrix::from_matrix(vec![vec![0, 1], vec![1, 0]]).unwrap();
    /// assert!(!two_cycle.contains_cycle());
    /// ```
    fn contains_cycle(&self) -> bool {
        let mut visited = self.vertex_bitset_unset();
        let mut parent: Vec<Option<OptionalNode>> = vec![None; self.len()];
        let mut stack = Vec::new();

        for root in self.vertices_range() {
            if visited.get_bit(root) {
                continue;
            }

            stack.push(root);
            while let Some(u) = stack.pop() {
                if visited.set_bit(u) {
                    continue;
                }

                for v in self.neighbors_of(u) {
                    if !visited.get_bit(v) {
                        stack.push(v);
                        parent[v as usize] = OptionalNode::new(u);
                    } else if parent[u as usize].map(|p| p.get()) != Some(v) {
                        trace!(u, v, "edge to visited non-parent");
                        return true;
                    }
                }
            }
        }

        false
    }
}

impl<G> CycleDetection for G where G: AdjacencyList {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{from_edges, from_undirected_edges};

    #[test]
    fn empty_and_trivial() {
        assert!(!GraphMatrix::new().contains_cycle());
        assert!(!GraphMatrix::zeros(5).contains_cycle());
    }

    #[test]
    fn directed_cycles() {
        assert!(from_edges(3, &[(0, 1), (1, 2), (2, 0)]).contains_cycle());
        assert!(from_edges(4, &[(0, 1), (2, 3), (3, 2), (3, 1), (1, 2)]).contains_cycle());
        assert!(!from_edges(3, &[(0, 1), (1, 2)]).contains_cycle());
    }

    #[test]
    fn self_loop() {
        let graph = GraphMatrix::from_matrix(vec![vec![0, 0], vec![0, -2]]).unwrap();
        assert!(graph.contains_cycle());
    }

    #[test]
    fn mutual_pair_is_not_reported() {
        assert!(!from_edges(2, &[(0, 1), (1, 0)]).contains_cycle());
        assert!(!from_undirected_edges(4, &[(0, 1), (1, 2), (2, 3)]).contains_cycle());
    }

    #[test]
    fn undirected_cycles() {
        assert!(from_undirected_edges(3, &[(0, 1), (1, 2), (2, 0)]).contains_cycle());
        assert!(from_undirected_edges(6, &[(0, 1), (3, 4), (4, 5), (5, 3)]).contains_cycle());
        assert!(!from_undirected_edges(6, &[(0, 1), (0, 2), (3, 4), (3, 5)]).contains_cycle());
    }

    #[test]
    fn diamond_dag_is_reported() {
        assert!(from_edges(3, &[(0, 1), (0, 2), (1, 2)]).contains_cycle());
        assert!(from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).contains_cycle());
    }

    #[test]
    fn later_roots_are_explored() {
        assert!(from_edges(5, &[(0, 1), (3, 4), (4, 2), (2, 3)]).contains_cycle());
    }
}
