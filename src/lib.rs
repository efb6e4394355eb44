/*!
`matgraph` is a small library for **dense**, **weighted**, **directed** graphs stored as a square
adjacency matrix of signed integers.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
The cell `(u, v)` of the matrix holds the weight of the edge `u -> v` as an `i32`; a weight of `0`
means that there is no such edge. Hence zero-weight edges can not be expressed.

There is a single representation, [`GraphMatrix`](crate::repr::GraphMatrix), which guarantees that
the stored grid is always square. Besides the usual accessors it carries an **algebra** of
matrix-level operations (sums, differences, scalar multiplication/division, matrix products,
comparison by edge count) that produce or modify graphs, see [`repr`].

# Design

All algorithms only access a graph via the read-only traits of [`ops`] and are implemented as
traits on the graph itself, eg. `graph.is_connected()` or `graph.shortest_path(0, 3)`.
Configurable components (readers/writers, random generators, Bellman-Ford) use the
*Builder* / *Setter* pattern.

Fallible operations return [`error::Result`]; algorithms that find nothing (no path, no
cycle, not bipartite) return `None` instead of an error. The [`algo::GraphAlgorithms`] facade
turns these results into booleans and display strings.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, errors and the graph itself,
- [`algo`] includes the algorithm traits (connectivity, shortest paths, cycles, bipartiteness, negative cycles),
- [`gens`] includes random matrix generators and deterministic substructures such as paths and cycles,
- [`io`] includes handlers for reading and writing graphs in a plain matrix format and writing DOT.

[`repr::digest`] additionally enables computing a `Sha256`-hash for a given graph.

In most use-cases, `use matgraph::{prelude::*, algo::*};` suffices for your needs.

```
use matgraph::{prelude::*, algo::*};

let mut graph = GraphMatrix::from_matrix(vec![
    vec![0, 2, 0],
    vec![0, 0, 3],
    vec![0, 0, 0],
]).unwrap();
assert_eq!(graph.summary(), "Graph with 3 vertices and 2 edges.");
assert!(graph.is_connected());

graph.scale_assign(2);
assert_eq!(graph.weight(1, 2), 6);
assert_eq!(graph.shortest_path(0, 2).unwrap().unwrap().to_string(), "0->1->2");
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use node::*;
pub use repr::GraphMatrix;

/// `matgraph::prelude` includes definitions for nodes and edges, all basic graph operation traits, the error type and the graph representation.
pub mod prelude {
    pub use super::{
        edge::*,
        error::GraphError,
        node::*,
        ops::*,
        repr::{GraphMatrix, digest::GraphDigest},
    };
}
