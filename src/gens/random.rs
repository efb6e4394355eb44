use tracing::debug;

use super::*;

/// Generates random weighted adjacency matrices.
///
/// Every admissible cell `(u, v)` independently holds an edge with probability `p`. The weight
/// of an edge is drawn uniformly from the configured range with `0` excluded, as a weight of
/// `0` would denote a missing edge.
///
/// - With `loops(false)`, the diagonal stays empty.
/// - With `symmetric(true)`, only cells with `u <= v` are drawn and mirrored, so that every edge
///   `(u, v)` has a reverse edge `(v, u)` of the same weight.
#[derive(Debug, Clone)]
pub struct RandomMatrix {
    n: NumNodes,
    prob: f64,
    weights: RangeInclusive<Weight>,
    loops: bool,
    symmetric: bool,
}

impl Default for RandomMatrix {
    fn default() -> Self {
        Self {
            n: 0,
            prob: 0.5,
            weights: 1..=1,
            loops: true,
            symmetric: false,
        }
    }
}

impl RandomMatrix {
    /// Creates a new generator for unit weights with `p = 0.5`
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the edge probability.
    /// ** Panics if `prob` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "Invalid probability {prob}");
        self.prob = prob;
        self
    }

    /// Updates the range of weights.
    /// ** Panics if the range holds no non-zero value **
    pub fn weights(mut self, weights: RangeInclusive<Weight>) -> Self {
        assert!(
            !weights.is_empty() && weights != (0..=0),
            "The weight range must contain a non-zero value!"
        );
        self.weights = weights;
        self
    }

    /// If *false*, no self-loops are generated
    pub fn loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    /// If *true*, the generated matrix is symmetric
    pub fn symmetric(mut self, symmetric: bool) -> Self {
        self.symmetric = symmetric;
        self
    }

    /// Draws a uniform weight from `self.weights` without `0`
    fn draw_weight<R: Rng>(&self, rng: &mut R) -> Weight {
        let (lo, hi) = (*self.weights.start(), *self.weights.end());
        if lo > 0 || hi < 0 {
            return rng.random_range(lo..=hi);
        }

        // `0` lies in the range: draw from one value less and skip over it
        let w = rng.random_range(lo..hi);
        if w >= 0 { w + 1 } else { w }
    }

    /// Creates a stream of random weighted edges in row-major order.
    /// For symmetric matrices, only edges with `u <= v` are emitted.
    pub fn stream<'a, R: Rng>(
        &'a self,
        rng: &'a mut R,
    ) -> impl Iterator<Item = WeightedEdge> + 'a {
        let n = self.n;
        (0..n)
            .flat_map(move |u| (0..n).map(move |v| Edge(u, v)))
            .filter(move |e| (self.loops || !e.is_loop()) && (!self.symmetric || e.0 <= e.1))
            .filter_map(move |e| {
                rng.random_bool(self.prob)
                    .then(|| e.with_weight(self.draw_weight(rng)))
            })
    }

    /// Generates a whole graph
    pub fn generate<R: Rng>(&self, rng: &mut R) -> GraphMatrix {
        let mut graph = GraphMatrix::zeros(self.n);
        for WeightedEdge { edge: Edge(u, v), weight } in self.stream(rng) {
            graph.set_weight(u, v, weight);
            if self.symmetric {
                graph.set_weight(v, u, weight);
            }
        }

        debug!(
            n = self.n,
            m = graph.edge_count(),
            symmetric = self.symmetric,
            "generated random matrix"
        );
        graph
    }
}

impl NumNodesGen for RandomMatrix {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}
