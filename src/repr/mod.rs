/*!
# Graph Representation

The only representation of this crate is the dense [`GraphMatrix`]: an `n x n` grid of
signed weights. Its operator algebra lives in the `algebra` submodule; [`digest`] computes
content hashes of graphs.
*/

mod algebra;
mod matrix;

pub mod digest;

pub use matrix::*;
