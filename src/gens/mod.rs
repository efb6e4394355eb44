/*!
# Graph Generators

This module provides random and deterministic generators for [`GraphMatrix`].

Random generators follow a builder-style pattern:

1. Create a generator instance (e.g., `RandomMatrix::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p).weights(-3..=3)`).
3. Generate edges via `stream()` or a whole graph via `generate()`.

The [`RandomGraph`] trait offers shorthands for the most common configurations, while
[`Substructures`] adds deterministic motifs (paths, cycles, cliques) to an existing graph.

```
use matgraph::{prelude::*, gens::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(3);
let mut graph = RandomMatrix::new().nodes(6).prob(0.2).weights(1..=9).generate(rng);
graph.connect_cycle([0, 1, 2], -4);

assert_eq!(graph.size(), 6);
assert_eq!(graph.weight(2, 0), -4);
assert!(graph.weighted_edges().all(|e| e.weight != 0));
```
*/

use std::ops::RangeInclusive;

use rand::Rng;

use crate::prelude::*;

mod random;
mod substructures;

pub use random::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Shorthands for creating random graphs from common configurations.
pub trait RandomGraph: Sized {
    /// Creates a random graph where every edge (including loops) exists independently with
    /// probability `p` and carries a uniform non-zero weight in `weights`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng;

    /// Same as [`RandomGraph::gnp`] without self-loops.
    fn gnp_no_loops<R>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        weights: RangeInclusive<Weight>,
    ) -> Self
    where
        R: Rng;

    /// Creates a random graph with a symmetric matrix and no self-loops, ie. an undirected graph.
    fn gnp_undirected<R>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        weights: RangeInclusive<Weight>,
    ) -> Self
    where
        R: Rng;
}

impl RandomGraph for GraphMatrix {
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng,
    {
        RandomMatrix::new()
            .nodes(n)
            .prob(p)
            .weights(weights)
            .generate(rng)
    }

    fn gnp_no_loops<R>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        weights: RangeInclusive<Weight>,
    ) -> Self
    where
        R: Rng,
    {
        RandomMatrix::new()
            .nodes(n)
            .prob(p)
            .weights(weights)
            .loops(false)
            .generate(rng)
    }

    fn gnp_undirected<R>(
        rng: &mut R,
        n: NumNodes,
        p: f64,
        weights: RangeInclusive<Weight>,
    ) -> Self
    where
        R: Rng,
    {
        RandomMatrix::new()
            .nodes(n)
            .prob(p)
            .weights(weights)
            .loops(false)
            .symmetric(true)
            .generate(rng)
    }
}
