/*!
# Node Representation

Vertices are implicit: a graph with `n` vertices consists of exactly the nodes `0..n`.
We choose `Node = u32` as the dense matrix grows quadratically, so graphs with more than
`2^32` nodes are far beyond what the representation can hold anyway.
*/

use std::num::NonZero;
use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Weight stored in a single cell of the adjacency matrix.
/// A weight of `0` means that there is no edge.
pub type Weight = i32;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// As `Option<Node>` uses additional bytes for padding, parent arrays of type
/// `Vec<Option<Node>>` waste space. This instead uses the `NonZero`-Wrapper with
/// `INVALID_NODE` as the niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNode(NonZero<Node>);

impl OptionalNode {
    /// Returns `Some(OptionalNode)` if `n != INVALID_NODE` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ INVALID_NODE) {
            Some(inner) => Some(OptionalNode(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ INVALID_NODE
    }
}
