/*!
Negative cycle detection via Bellman-Ford.

[`BellmanFord`] relaxes every edge (in row-major order) `n - 1` times starting from a
single source node. Nodes without a known distance are never relaxed *from*, but a node
without a known distance is always relaxed *to*. Distances are accumulated as `i64`, so
adding up `i32` weights along a path of at most `2^32` edges can not overflow.

A further pass that still finds a relaxable edge proves a negative cycle reachable from the
source. The report carries the distance of that edge's source node at detection time; this
is generally **not** the total weight of the cycle.
*/

use std::fmt::Display;

use tracing::debug;

use super::*;

/// Tentative distance of a node: `None` while the node has not been reached
pub type Distance = Option<i64>;

/// Witness of a negative cycle found by [`BellmanFord::find_negative_cycle`].
///
/// Renders as `Negative cycle: <distance>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NegativeCycle {
    /// Source node of the first edge that could still be relaxed
    pub source: Node,
    /// Distance of `source` at detection time
    pub distance: i64,
}

impl Display for NegativeCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Negative cycle: {}", self.distance)
    }
}

/// Configurable Bellman-Ford search.
///
/// # Examples
/// ```
/// use matgraph::{prelude::*, algo::*};
///
/// let graph = GraphMatrix::from_matrix(vec![
///     vec![0, 4, 1],
///     vec![0, 0, 0],
///     vec![0, 2, 0],
/// ]).unwrap();
///
/// let distances = BellmanFord::new(&graph).distances();
/// assert_eq!(distances, vec![Some(0), Some(3), Some(1)]);
/// ```
#[derive(Debug, Clone)]
pub struct BellmanFord<'a, G> {
    graph: &'a G,
    source: Node,
}

impl<'a, G> BellmanFord<'a, G>
where
    G: WeightedAdjacency,
{
    /// Creates a new search with source node `0`
    pub fn new(graph: &'a G) -> Self {
        Self { graph, source: 0 }
    }

    /// Updates the source node
    pub fn source(mut self, source: Node) -> Self {
        self.source = source;
        self
    }

    /// Relaxes the edge `(u, v)` if possible and returns *true* iff it could be relaxed
    fn relax(distances: &mut [Distance], edge: WeightedEdge) -> bool {
        let Some(du) = distances[edge.source() as usize] else {
            return false;
        };

        let candidate = du + edge.weight as i64;
        let dv = &mut distances[edge.target() as usize];
        if dv.is_none_or(|dv| candidate < dv) {
            *dv = Some(candidate);
            true
        } else {
            false
        }
    }

    /// Runs `n - 1` relaxation passes and returns the resulting distances.
    /// ** Panics if the graph is not empty and `source >= n` **
    pub fn distances(&self) -> Vec<Distance> {
        let mut distances: Vec<Distance> = vec![None; self.graph.len()];
        if distances.is_empty() {
            return distances;
        }
        distances[self.source as usize] = Some(0);

        for _ in 1..self.graph.len() {
            let mut changed = false;
            for edge in self.graph.weighted_edges() {
                changed |= Self::relax(&mut distances, edge);
            }

            if !changed {
                break;
            }
        }

        distances
    }

    /// Runs [`BellmanFord::distances`] followed by a single detection pass and reports the
    /// first edge that can still be relaxed. The empty graph has no negative cycle.
    pub fn find_negative_cycle(&self) -> Option<NegativeCycle> {
        if self.graph.is_empty() {
            return None;
        }

        let distances = self.distances();
        let witness = self.graph.weighted_edges().find_map(|edge| {
            let du = distances[edge.source() as usize]?;
            let dv = distances[edge.target() as usize];
            dv.is_none_or(|dv| du + (edge.weight as i64) < dv)
                .then_some(NegativeCycle {
                    source: edge.source(),
                    distance: du,
                })
        });

        debug!(?witness, from = self.source, "bellman-ford detection pass");
        witness
    }
}

/// Detection of negative cycles reachable from node `0`.
pub trait NegativeCycleDetection: WeightedAdjacency + CycleDetection {
    /// Returns `None` immediately if [`CycleDetection::contains_cycle`] finds no cycle.
    /// Otherwise runs [`BellmanFord`] from node `0` and returns its witness, if any.
    ///
    /// # Examples
    /// ```
    /// use matgraph::{prelude::*, algo::*};
    ///
    /// let graph = GraphMatrix::from_matrix(vec![
    ///     vec![0, 1, 0],
    ///     vec![0, 0, -3],
    ///     vec![1, 0, 0],
    /// ]).unwrap();
    ///
    /// let cycle = graph.negative_cycle().unwrap();
    /// assert_eq!(cycle.to_string(), "Negative cycle: -2");
    /// ```
    fn negative_cycle(&self) -> Option<NegativeCycle> {
        if !self.contains_cycle() {
            return None;
        }
        BellmanFord::new(self).find_negative_cycle()
    }
}

impl<G> NegativeCycleDetection for G where G: WeightedAdjacency {}
