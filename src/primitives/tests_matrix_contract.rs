// =========================================================================
// Algebraic-law contract tests for the Matrix primitive.
//
// Each test pins one law the matrix algebra must satisfy; the proptest
// module below re-checks the laws over randomized shapes and data.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
// =========================================================================

use super::*;

/// Transpose involution: (A^T)^T = A
#[test]
fn contract_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let att = a
        .transpose()
        .expect("non-empty")
        .transpose()
        .expect("non-empty");
    assert_eq!(att, a);
}

/// Transpose swaps shape: (m x n)^T = (n x m)
#[test]
fn contract_transpose_swaps_shape() {
    let a = Matrix::with_shape(3, 5).expect("valid");
    let at = a.transpose().expect("non-empty");
    assert_eq!(at.shape(), (5, 3));
}

/// Matmul shape: (m x k) * (k x n) = (m x n)
#[test]
fn contract_matmul_shape() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1.0; 12]).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");
    assert_eq!(c.shape(), (2, 4));
}

/// Identity matmul: A * I = A
#[test]
fn contract_identity_matmul() {
    let a =
        Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).expect("valid");
    let eye = Matrix::identity(3).expect("valid");
    let result = a.matmul(&eye).expect("compatible dims");
    assert_eq!(result, a);
}

/// Additive inverse: A + (-1 * A) = 0
#[test]
fn contract_additive_inverse() {
    let a = Matrix::from_vec(2, 3, vec![1.5, -2.0, 0.25, 7.0, -0.5, 3.0]).expect("valid");
    let neg = a.mul_scalar(-1.0).expect("non-empty");
    let sum = a.add(&neg).expect("same shape");
    let zeros = Matrix::with_shape(2, 3).expect("valid");
    assert_eq!(sum, zeros);
}

/// Multiplication associativity: (A * B) * C = A * (B * C)
#[test]
fn contract_matmul_associativity() {
    let a = Matrix::from_vec(2, 3, vec![1.0, -2.0, 0.5, 3.0, 1.5, -1.0]).expect("valid");
    let b = Matrix::from_vec(3, 2, vec![2.0, 0.0, -1.0, 4.0, 0.5, 1.0]).expect("valid");
    let c = Matrix::from_vec(2, 4, vec![1.0, 2.0, -0.5, 0.0, 3.0, -1.0, 2.5, 1.0]).expect("valid");

    let left = a
        .matmul(&b)
        .expect("compatible dims")
        .matmul(&c)
        .expect("compatible dims");
    let right = a
        .matmul(&b.matmul(&c).expect("compatible dims"))
        .expect("compatible dims");
    assert_eq!(left, right);
}

/// Inverse round-trip: A * A^-1 = I
#[test]
fn contract_inverse_round_trip() {
    let a = Matrix::from_vec(
        3,
        3,
        vec![
            5.0, 1.0, -1.0, //
            0.5, 4.0, 1.0, //
            -1.0, 0.5, 6.0,
        ],
    )
    .expect("valid");
    let inv = a.inverse().expect("diagonally dominant, non-singular");
    let product = a.matmul(&inv).expect("compatible dims");
    assert_eq!(product, Matrix::identity(3).expect("valid"));
}

/// Resize preserves the overlapping submatrix and zero-fills the rest.
#[test]
fn contract_resize_overlap() {
    let mut m = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    m.set_rows(2).expect("valid row count");
    m.set_cols(4).expect("valid column count");
    let expected = Matrix::from_vec(
        2,
        4,
        vec![
            1.0, 2.0, 0.0, 0.0, //
            3.0, 4.0, 0.0, 0.0,
        ],
    )
    .expect("valid");
    assert_eq!(m, expected);
}

mod matrix_proptest_contract {
    use super::*;
    use proptest::prelude::*;

    fn seeded_data(len: usize, seed: u32) -> Vec<f64> {
        (0..len)
            .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin())
            .collect()
    }

    /// Transpose involution for random matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(rows, cols, seeded_data(rows * cols, seed)).expect("valid");
            let att = a.transpose().expect("non-empty").transpose().expect("non-empty");
            prop_assert_eq!(att.shape(), a.shape());
            prop_assert!(att.approx_eq(&a).expect("non-empty"));
        }
    }

    /// Identity matmul for random square matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_identity_matmul(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(n, n, seeded_data(n * n, seed)).expect("valid");
            let eye = Matrix::identity(n).expect("valid");
            let result = a.matmul(&eye).expect("compatible");
            prop_assert!(result.approx_eq(&a).expect("non-empty"));
        }
    }

    /// A + (-1 * A) is the zero matrix of A's shape
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_additive_inverse(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(rows, cols, seeded_data(rows * cols, seed)).expect("valid");
            let neg = a.mul_scalar(-1.0).expect("non-empty");
            let sum = a.add(&neg).expect("same shape");
            let zeros = Matrix::with_shape(rows, cols).expect("valid");
            prop_assert!(sum.approx_eq(&zeros).expect("non-empty"));
        }
    }

    /// (A * B) * C = A * (B * C) within tolerance
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_matmul_associativity(
            m in 1..=4usize,
            k in 1..=4usize,
            n in 1..=4usize,
            p in 1..=4usize,
            seed in 0..500u32,
        ) {
            let a = Matrix::from_vec(m, k, seeded_data(m * k, seed)).expect("valid");
            let b = Matrix::from_vec(k, n, seeded_data(k * n, seed + 1)).expect("valid");
            let c = Matrix::from_vec(n, p, seeded_data(n * p, seed + 2)).expect("valid");

            let left = a.matmul(&b).expect("compatible").matmul(&c).expect("compatible");
            let right = a.matmul(&b.matmul(&c).expect("compatible")).expect("compatible");
            prop_assert!(left.approx_eq(&right).expect("non-empty"));
        }
    }

    /// A * A^-1 = I for diagonally dominant random matrices
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_inverse_round_trip(
            n in 1..=5usize,
            seed in 0..500u32,
        ) {
            let mut data = seeded_data(n * n, seed);
            // Strict diagonal dominance keeps the fixture far from singular.
            for i in 0..n {
                data[i * n + i] += n as f64 + 1.0;
            }
            let a = Matrix::from_vec(n, n, data).expect("valid");
            let inv = a.inverse().expect("diagonally dominant, non-singular");
            let product = a.matmul(&inv).expect("compatible");
            prop_assert!(product.approx_eq(&Matrix::identity(n).expect("valid")).expect("non-empty"));
        }
    }

    /// Resizing preserves entries inside the overlap and zero-fills outside it
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_resize_overlap(
            rows in 1..=8usize,
            cols in 1..=8usize,
            new_rows in 1..=8usize,
            new_cols in 1..=8usize,
        ) {
            let data: Vec<f64> = (0..rows * cols).map(|i| i as f64).collect();
            let mut m = Matrix::from_vec(rows, cols, data).expect("valid");
            m.set_rows(new_rows).expect("valid row count");
            m.set_cols(new_cols).expect("valid column count");

            prop_assert_eq!(m.shape(), (new_rows, new_cols));
            for i in 0..new_rows {
                for j in 0..new_cols {
                    let expected = if i < rows && j < cols {
                        (i * cols + j) as f64
                    } else {
                        0.0
                    };
                    let actual = m.get(i, j).expect("within bounds");
                    prop_assert!(
                        (actual - expected).abs() < 1e-12,
                        "entry ({}, {}) = {}, expected {}",
                        i, j, actual, expected
                    );
                }
            }
        }
    }
}
