/*!
# Graph Algorithms

This module provides the **graph algorithms** of this crate. All of them only read the graph
through the accessor traits in [`ops`](crate::ops) and never mutate it.

All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use matgraph::algo::*;
```

Algorithms are exposed as traits implemented for every suitable graph and return typed
results (`bool`, `Option<Path>`, `Option<Bipartition>`, ...). The [`GraphAlgorithms`]
facade wraps them into plain values and strings with fixed sentinels for "no result".
*/

mod bellman_ford;
mod bipartite;
mod connectivity;
mod cycle;
mod facade;
mod shortest_path;
mod traversal;

use crate::{ops::*, *};

pub use bellman_ford::*;
pub use bipartite::*;
pub use connectivity::*;
pub use cycle::*;
pub use facade::*;
pub use shortest_path::*;
pub use traversal::*;
