//! Property-based tests for matrix algebra.

use proptest::collection::vec;
use proptest::prelude::*;

use crate::Matrix;

// Strategy for generating small well-formed matrices with integer-valued
// entries (exact in f64, so equality assertions are safe).
fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    vec(vec(-100i32..100i32, cols), rows).prop_map(|rows| {
        Matrix::from_rows(
            rows.into_iter()
                .map(|r| r.into_iter().map(f64::from).collect())
                .collect(),
        )
    })
}

fn any_shape() -> impl Strategy<Value = Matrix> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(r, c)| matrix(r, c))
}

fn square(n: usize) -> impl Strategy<Value = Matrix> {
    matrix(n, n)
}

proptest! {
    #[test]
    fn transpose_is_an_involution(m in any_shape()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn addition_commutes(pair in (1usize..=4, 1usize..=4).prop_flat_map(|(r, c)| {
        (matrix(r, c), matrix(r, c))
    })) {
        let (a, b) = pair;
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    #[test]
    fn subtracting_itself_gives_zeros(m in any_shape()) {
        let diff = m.subtract(&m).unwrap();
        prop_assert_eq!(diff, Matrix::zeros(m.num_rows(), m.num_cols()));
    }

    #[test]
    fn identity_is_neutral_for_multiplication(m in (1usize..=4).prop_flat_map(square)) {
        let id = Matrix::identity(m.num_rows());
        prop_assert_eq!(m.multiply(&id).unwrap(), m.clone());
        prop_assert_eq!(id.multiply(&m).unwrap(), m);
    }

    #[test]
    fn transpose_reverses_products(pair in (1usize..=4, 1usize..=4, 1usize..=4)
        .prop_flat_map(|(r, k, c)| (matrix(r, k), matrix(k, c))))
    {
        // (A·B)ᵀ = Bᵀ·Aᵀ
        let (a, b) = pair;
        let lhs = a.multiply(&b).unwrap().transpose();
        let rhs = b.transpose().multiply(&a.transpose()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn resize_down_then_up_preserves_the_block(m in (2usize..=4).prop_flat_map(square)) {
        let n = m.num_rows();
        let round_trip = m.resize(n - 1, n - 1).resize(n, n);
        for i in 0..n {
            for j in 0..n {
                let expected = if i < n - 1 && j < n - 1 { m[(i, j)] } else { 0.0 };
                prop_assert_eq!(round_trip[(i, j)], expected);
            }
        }
    }

    #[test]
    fn determinant_is_transpose_invariant(m in (1usize..=3).prop_flat_map(square)) {
        let a = m.determinant().unwrap();
        let b = m.transpose().determinant().unwrap();
        prop_assert!((a - b).abs() <= 1e-4);
    }
}
