/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph, such as **paths**, **cycles** and **cliques**.
Every inserted edge carries the same given weight and overwrites the previous weight of its
cell.

# Example

```rust
use matgraph::{prelude::*, gens::*};

let mut g = GraphMatrix::zeros(5);
g.connect_path([0, 1, 2], 1);
g.connect_cycle([2, 3, 4], -2);
g.connect_clique([0, 4], 7, false);

assert_eq!(
    g.weighted_edges().map(|e| e.to_string()).collect::<Vec<_>>(),
    vec!["(0,1;1)", "(0,4;7)", "(1,2;1)", "(2,3;-2)", "(3,4;-2)", "(4,0;7)", "(4,2;-2)"]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait Substructures {
    /// Connects the given nodes in order with a **simple path** of edges with weight `weight`.
    ///
    /// # Example
    /// ```rust
    /// use matgraph::{prelude::*, gens::*};
    ///
    /// let mut g = GraphMatrix::zeros(4);
    /// g.connect_path([0, 1, 2, 3], 2);
    ///
    /// assert_eq!(g.weight(0, 1), 2);
    /// assert_eq!(g.weight(2, 3), 2);
    /// assert_eq!(g.edge_count(), 3);
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last
    /// node is connected back to the first.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (both directions of every pair).
    /// If `with_loops` is `true`, each node also gets a self-loop.
    fn connect_clique<C>(&mut self, nodes: C, weight: Weight, with_loops: bool)
    where
        C: IntoIterator<Item = Node>;
}

impl Substructures for GraphMatrix {
    fn connect_path<P>(&mut self, nodes_on_path: P, weight: Weight)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.set_weight(u, v, weight);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C, weight: Weight)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.set_weight(prev, cur, weight);
                prev = cur;
            }

            self.set_weight(prev, first, weight);
        }
    }

    fn connect_clique<C>(&mut self, nodes: C, weight: Weight, with_loops: bool)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for &u in &nodes {
            for &v in &nodes {
                if with_loops || u != v {
                    self.set_weight(u, v, weight);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;

    #[test]
    fn path_is_acyclic_and_connected() {
        for n in 1..10 {
            let mut g = GraphMatrix::zeros(n);
            g.connect_path(0..n, 3);

            assert_eq!(g.edge_count(), n - 1);
            assert!(g.is_connected());
            assert!(!g.contains_cycle());
            assert_eq!(g.total_weight(), 3 * (n as i64 - 1));
        }
    }

    #[test]
    fn cycle() {
        for n in 3..10 {
            let mut g = GraphMatrix::zeros(n);
            g.connect_cycle(0..n, -1);

            assert_eq!(g.edge_count(), n);
            assert!(g.contains_cycle());
            assert!(g.negative_cycle().is_some());
            assert_eq!(g.is_bipartite(), n % 2 == 0);
        }

        // a single node cycle is a self-loop
        let mut g = GraphMatrix::zeros(2);
        g.connect_cycle([1], 4);
        assert!(g.has_self_loop(1));

        g.connect_cycle([], 4);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn clique() {
        let mut g = GraphMatrix::zeros(6);
        g.connect_clique([1, 3, 5], 2, false);
        assert_eq!(g.edge_count(), 6);
        assert!(g.has_bidirected_edge(1, 5));
        assert!(!g.has_self_loop(3));

        g.connect_clique([0, 2], 1, true);
        assert_eq!(g.edge_count(), 10);
        assert!(g.has_self_loop(2));
    }

    #[test]
    fn overwrite_weights() {
        let mut g = GraphMatrix::zeros(3);
        g.connect_path([0, 1, 2], 5);
        g.connect_path([1, 2], -5);
        assert_eq!(g.weight(0, 1), 5);
        assert_eq!(g.weight(1, 2), -5);
    }
}
