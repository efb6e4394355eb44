use matgraph::{io::*, prelude::*};
use proptest::prelude::*;
use std::cmp::Ordering;

fn square(max_n: usize) -> impl Strategy<Value = Vec<Vec<Weight>>> {
    (0..=max_n).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(-100..=100 as Weight, n), n)
    })
}

fn pair(max_n: usize) -> impl Strategy<Value = (Vec<Vec<Weight>>, Vec<Vec<Weight>>)> {
    (0..=max_n).prop_flat_map(|n| {
        let grid = prop::collection::vec(prop::collection::vec(-100..=100 as Weight, n), n);
        (grid.clone(), grid)
    })
}

proptest! {
    #[test]
    fn load_round_trip(grid in square(8)) {
        let mut g = GraphMatrix::new();
        g.load_graph(grid.clone()).unwrap();
        prop_assert_eq!(g.matrix(), grid.as_slice());
    }

    #[test]
    fn additive_inverse((a, b) in pair(8)) {
        let a = GraphMatrix::from_matrix(a).unwrap();
        let b = GraphMatrix::from_matrix(b).unwrap();
        prop_assert_eq!(a.try_add(&b).unwrap().try_sub(&b).unwrap(), a);
    }

    #[test]
    fn edge_count_matches_non_zero_cells(grid in square(8)) {
        let non_zero = grid.iter().flatten().filter(|&&w| w != 0).count();
        let g = GraphMatrix::from_matrix(grid).unwrap();
        prop_assert_eq!(g.edge_count() as usize, non_zero);
        prop_assert_eq!(g.edges().count(), non_zero);
    }

    #[test]
    fn text_format_round_trip(grid in square(8)) {
        let g = GraphMatrix::from_matrix(grid).unwrap();
        let mut buffer = Vec::new();
        g.try_write_to_writer(&mut buffer, FileFormat::Matrix).unwrap();
        let read = GraphMatrix::try_from_reader(buffer.as_slice(), FileFormat::Matrix).unwrap();
        prop_assert_eq!(read, g);
    }
}

#[test]
fn non_square_is_rejected() {
    for grid in [
        vec![vec![0, 1]],
        vec![vec![0], vec![1]],
        vec![vec![0, 1], vec![1]],
        vec![vec![0, 1, 2], vec![0, 1, 2], vec![0, 1]],
    ] {
        let err = GraphMatrix::from_matrix(grid.clone()).unwrap_err();
        assert!(matches!(err, GraphError::InvalidShape { .. }));

        let mut g = GraphMatrix::zeros(2);
        assert!(g.load_graph(grid).is_err());
        assert_eq!(g, GraphMatrix::zeros(2));
    }
}

#[test]
fn all_zero_matrix_has_no_edges() {
    let g = GraphMatrix::zeros(5);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.summary(), "Graph with 5 vertices and 0 edges.");
}

#[test]
fn scale_then_divide_truncates() {
    let mut g = GraphMatrix::from_matrix(vec![vec![2, -4], vec![6, 0]]).unwrap();
    let original = g.clone();
    g.scale_assign(2).try_div_assign(2).unwrap();
    assert_eq!(g, original);

    // odd cells do not survive halving and doubling
    let mut odd = GraphMatrix::from_matrix(vec![vec![3, -3], vec![1, 0]]).unwrap();
    odd.try_div_assign(2).unwrap().scale_assign(2);
    assert_eq!(odd.matrix(), &[vec![2, -2], vec![0, 0]]);

    assert_eq!(odd.try_div_assign(0).unwrap_err(), GraphError::DivisionByZero);
}

#[test]
fn dimension_mismatch() {
    let mut a = GraphMatrix::zeros(2);
    let b = GraphMatrix::zeros(3);

    let mismatch = GraphError::DimensionMismatch { left: 2, right: 3 };
    assert_eq!(a.try_add(&b).unwrap_err(), mismatch);
    assert_eq!(a.try_sub(&b).unwrap_err(), mismatch);
    assert_eq!(a.multiply_matrices(&b).unwrap_err(), mismatch);
    assert!(a.try_add_assign(&b).is_err());
    assert!(a.try_sub_assign(&b).is_err());
}

#[test]
fn comparison_by_edge_count() {
    let sparse = GraphMatrix::from_matrix(vec![vec![0, 9], vec![0, 0]]).unwrap();
    let dense = GraphMatrix::from_matrix(vec![vec![0, 1], vec![1, 0]]).unwrap();
    let other = GraphMatrix::from_matrix(vec![vec![0, 0], vec![-5, 0]]).unwrap();

    assert!(sparse.less_than(&dense));
    assert!(dense.greater_or_equal(&sparse));
    assert_eq!(sparse.compare_by_edge_count(&other), Ordering::Equal);
    assert!(sparse.less_or_equal(&other) && sparse.greater_or_equal(&other));
    assert!(!sparse.equals(&other));
}

#[test]
fn digest_ignores_construction_path() {
    let direct = GraphMatrix::from_matrix(vec![vec![0, 2], vec![0, 0]]).unwrap();

    let mut built = GraphMatrix::zeros(2);
    built.add_scalar(1);
    built.scale_assign(2);
    built.set_weight(0, 0, 0);
    built.set_weight(1, 0, 0);
    built.set_weight(1, 1, 0);

    assert_eq!(built, direct);
    assert_eq!(built.digest_sha256(), direct.digest_sha256());
}
