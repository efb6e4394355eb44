/*!
# Graph Algebra

Arithmetic and comparison operators on [`GraphMatrix`].

Operators come in two flavours:
- *non-mutating* operators (`plus`, `try_add`, `try_sub`, `negate`, `scale`,
  `multiply_matrices`) return a freshly built graph,
- *compound* operators (`try_add_assign`, `add_scalar`, `increment`, ...) mutate the graph
  in place and return `&mut Self` to allow chaining.

All operators combining two graphs require both graphs to have the same number of nodes
and fail with [`GraphError::DimensionMismatch`] otherwise. Scalar operators can only fail
for division by zero.

Infallible scalar operators are additionally available via `std::ops`
(`-g`, `&g * k`, `g += k`, `g -= k`, `g *= k`).

Arithmetic uses plain `i32` operations; overflowing a cell panics in debug builds.

# Ordering
Graphs are ordered by their number of edges **only**: two graphs with the same number of
edges compare as equal under [`GraphMatrix::compare_by_edge_count`] even if their matrices
differ. For this reason `GraphMatrix` does not implement `PartialOrd`.
*/

use std::{
    cmp::Ordering,
    ops::{AddAssign, Mul, MulAssign, Neg, SubAssign},
};

use crate::{error::*, *};

impl GraphMatrix {
    /// Unary plus: returns an equal copy of the graph
    pub fn plus(&self) -> GraphMatrix {
        self.clone()
    }

    /// Returns the cell-wise sum of both graphs.
    ///
    /// # Errors
    /// Returns [`GraphError::DimensionMismatch`] if the sizes differ.
    pub fn try_add(&self, other: &GraphMatrix) -> Result<GraphMatrix> {
        let mut result = self.clone();
        result.try_add_assign(other)?;
        Ok(result)
    }

    /// Adds `other` cell-wise to `self`.
    ///
    /// # Errors
    /// Returns [`GraphError::DimensionMismatch`] if the sizes differ; `self` is unchanged.
    pub fn try_add_assign(&mut self, other: &GraphMatrix) -> Result<&mut Self> {
        self.check_same_size(other)?;
        self.zip_cells_mut(other).for_each(|(a, b)| *a += b);
        Ok(self)
    }

    /// Adds `scalar` to every cell (including cells without an edge)
    pub fn add_scalar(&mut self, scalar: Weight) -> &mut Self {
        self.cells_mut().for_each(|a| *a += scalar);
        self
    }

    /// Prefix increment: adds `1` to every cell
    pub fn increment(&mut self) -> &mut Self {
        self.add_scalar(1)
    }

    /// Postfix increment: adds `1` to every cell and returns the graph as it was before
    pub fn post_increment(&mut self) -> GraphMatrix {
        let old = self.clone();
        self.increment();
        old
    }

    /// Unary minus: equivalent to scaling by `-1`
    pub fn negate(&self) -> GraphMatrix {
        self.scale(-1)
    }

    /// Returns the cell-wise difference `self - other`.
    ///
    /// # Errors
    /// Returns [`GraphError::DimensionMismatch`] if the sizes differ.
    pub fn try_sub(&self, other: &GraphMatrix) -> Result<GraphMatrix> {
        let mut result = self.clone();
        result.try_sub_assign(other)?;
        Ok(result)
    }

    /// Subtracts `other` cell-wise from `self`.
    ///
    /// # Errors
    /// Returns [`GraphError::DimensionMismatch`] if the sizes differ; `self` is unchanged.
    pub fn try_sub_assign(&mut self, other: &GraphMatrix) -> Result<&mut Self> {
        self.check_same_size(other)?;
        self.zip_cells_mut(other).for_each(|(a, b)| *a -= b);
        Ok(self)
    }

    /// Subtracts `scalar` from every cell
    pub fn sub_scalar(&mut self, scalar: Weight) -> &mut Self {
        self.cells_mut().for_each(|a| *a -= scalar);
        self
    }

    /// Prefix decrement: subtracts `1` from every cell
    pub fn decrement(&mut self) -> &mut Self {
        self.sub_scalar(1)
    }

    /// Postfix decrement: subtracts `1` from every cell and returns the graph as it was before
    pub fn post_decrement(&mut self) -> GraphMatrix {
        let old = self.clone();
        self.decrement();
        old
    }

    /// Returns the matrix product `self * other` with the diagonal cleared afterwards,
    /// so the result never contains self-loops.
    ///
    /// # Errors
    /// Returns [`GraphError::DimensionMismatch`] if the sizes differ.
    ///
    /// # Examples
    /// ```
    /// use matgraph::prelude::*;
    ///
    /// let g = GraphMatrix::from_matrix(vec![vec![0, 1], vec![1, 0]]).unwrap();
    /// let h = GraphMatrix::from_matrix(vec![vec![0, 2], vec![3, 0]]).unwrap();
    ///
    /// // the diagonal entries 3 and 2 of the plain product are dropped
    /// assert!(g.multiply_matrices(&h).unwrap().is_singleton_graph());
    /// ```
    pub fn multiply_matrices(&self, other: &GraphMatrix) -> Result<GraphMatrix> {
        self.check_same_size(other)?;

        let (a, b) = (self.matrix(), other.matrix());
        Ok(GraphMatrix::from_fn(self.size(), |u, v| {
            if u == v {
                return 0;
            }
            let (u, v) = (u as usize, v as usize);
            a[u].iter().zip(b).map(|(x, row)| x * row[v]).sum()
        }))
    }

    /// Returns a new graph with every cell multiplied by `scalar`
    pub fn scale(&self, scalar: Weight) -> GraphMatrix {
        let mut result = self.clone();
        result.scale_assign(scalar);
        result
    }

    /// Multiplies every cell by `scalar`
    pub fn scale_assign(&mut self, scalar: Weight) -> &mut Self {
        self.cells_mut().for_each(|a| *a *= scalar);
        self
    }

    /// Divides every cell by `scalar` using integer division (truncating towards zero).
    /// Note that `g.scale_assign(k).try_div_assign(k)` only restores `g` exactly if no
    /// information was lost, while dividing odd cells by `2` for example truncates them.
    ///
    /// # Errors
    /// Returns [`GraphError::DivisionByZero`] if `scalar == 0`; `self` is unchanged.
    pub fn try_div_assign(&mut self, scalar: Weight) -> Result<&mut Self> {
        if scalar == 0 {
            return Err(GraphError::DivisionByZero);
        }
        self.cells_mut().for_each(|a| *a /= scalar);
        Ok(self)
    }

    /// Returns *true* if both graphs have identical matrices
    pub fn equals(&self, other: &GraphMatrix) -> bool {
        self == other
    }

    /// Compares two graphs by their number of edges only
    pub fn compare_by_edge_count(&self, other: &GraphMatrix) -> Ordering {
        self.edge_count().cmp(&other.edge_count())
    }

    /// Returns *true* if `self` has fewer edges than `other`
    pub fn less_than(&self, other: &GraphMatrix) -> bool {
        self.compare_by_edge_count(other).is_lt()
    }

    /// Returns *true* if `self` has more edges than `other`
    pub fn greater_than(&self, other: &GraphMatrix) -> bool {
        self.compare_by_edge_count(other).is_gt()
    }

    /// Returns *true* if `self` does not have more edges than `other`
    pub fn less_or_equal(&self, other: &GraphMatrix) -> bool {
        self.compare_by_edge_count(other).is_le()
    }

    /// Returns *true* if `self` does not have fewer edges than `other`
    pub fn greater_or_equal(&self, other: &GraphMatrix) -> bool {
        self.compare_by_edge_count(other).is_ge()
    }
}

impl Neg for &GraphMatrix {
    type Output = GraphMatrix;

    fn neg(self) -> GraphMatrix {
        self.negate()
    }
}

impl Neg for GraphMatrix {
    type Output = GraphMatrix;

    fn neg(mut self) -> GraphMatrix {
        self.scale_assign(-1);
        self
    }
}

impl Mul<Weight> for &GraphMatrix {
    type Output = GraphMatrix;

    fn mul(self, rhs: Weight) -> GraphMatrix {
        self.scale(rhs)
    }
}

impl Mul<Weight> for GraphMatrix {
    type Output = GraphMatrix;

    fn mul(mut self, rhs: Weight) -> GraphMatrix {
        self.scale_assign(rhs);
        self
    }
}

impl MulAssign<Weight> for GraphMatrix {
    fn mul_assign(&mut self, rhs: Weight) {
        self.scale_assign(rhs);
    }
}

impl AddAssign<Weight> for GraphMatrix {
    fn add_assign(&mut self, rhs: Weight) {
        self.add_scalar(rhs);
    }
}

impl SubAssign<Weight> for GraphMatrix {
    fn sub_assign(&mut self, rhs: Weight) {
        self.sub_scalar(rhs);
    }
}
