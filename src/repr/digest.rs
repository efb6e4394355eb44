/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which computes a **hash-based digest** of a
weighted graph.

The digest encodes (all values little-endian, 4 bytes each):
- the number of nodes, and
- every edge `(u, v, weight)` with non-zero weight in row-major order,

before feeding them into a cryptographic hash function. As zero cells are skipped, the
digest only depends on the graph and not on how its matrix was built.

## Example
```
use matgraph::{prelude::*, repr::digest::GraphDigest};

let graph = GraphMatrix::from_matrix(vec![
    vec![0, 5, 0],
    vec![0, 0, 0],
    vec![-1, 0, 0],
]).unwrap();

assert_eq!(
    graph.digest_sha256(),
    "97a5cc04047201e2e8b4ec85c07c5bfc2f7249956982b6a7beb18d29754c3a1c"
);
```
*/

use std::fmt::LowerHex;

use ::digest::{Digest, Output};

use crate::{ops::*, *};

/// Trait for computing a **canonical hash digest** of a weighted graph.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: WeightedAdjacency,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();

        hasher.update(self.number_of_nodes().to_le_bytes());
        for edge in self.weighted_edges() {
            hasher.update(edge.source().to_le_bytes());
            hasher.update(edge.target().to_le_bytes());
            hasher.update(edge.weight.to_le_bytes());
        }

        format!("{:x}", hasher.finalize())
    }
}
