//! Matrix type for 2D numeric data.

use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// A dense 2D matrix of `f64` values (row-major storage).
///
/// The matrix owns a single flat buffer of exactly `rows * cols` entries.
/// A default-constructed matrix is *empty* (`0x0`, no storage); every
/// other matrix has at least one row and one column. Operations that
/// require a non-empty or square operand report a
/// [`MatrizError`](crate::error::MatrizError) instead of panicking.
///
/// Comparison with `==` and [`Matrix::approx_eq`] is entrywise within the
/// absolute tolerance [`Matrix::EPSILON`].
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Absolute per-entry tolerance for equality comparisons.
    pub const EPSILON: f64 = 1e-7;

    /// Creates the empty matrix (`0x0`, no storage).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a zero-filled matrix of the given shape.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidDimension`] if either dimension is zero.
    pub fn with_shape(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        })
    }

    /// Creates a matrix from a row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidDimension`] if either dimension is
    /// zero, or [`MatrizError::ShapeMismatch`] if the data length doesn't
    /// match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimension { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(MatrizError::ShapeMismatch {
                expected: format!("{rows}x{cols} ({} elements)", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates an identity matrix of size `n`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidDimension`] if `n` is zero.
    pub fn identity(n: usize) -> Result<Self> {
        let mut result = Self::with_shape(n, n)?;
        for i in 0..n {
            result.data[i * n + i] = 1.0;
        }
        Ok(result)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns `true` for the empty (`0x0`) matrix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Returns `true` if the matrix is square and non-empty.
    #[must_use]
    pub fn is_square(&self) -> bool {
        !self.is_empty() && self.rows == self.cols
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Gets the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] if the index falls outside
    /// the current bounds; on the empty matrix every index is out of range.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_bounds(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Gets a mutable reference to the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] if the index falls outside
    /// the current bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        self.check_bounds(row, col)?;
        Ok(&mut self.data[row * self.cols + col])
    }

    /// Sets the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::IndexOutOfRange`] if the index falls outside
    /// the current bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Changes the row count, reallocating in place.
    ///
    /// A no-op when `rows` equals the current count. Otherwise the matrix
    /// is rebuilt zero-filled at the new shape and the overlapping
    /// top-left submatrix is carried over; rows past the old count stay
    /// zero, rows past the new count are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidDimension`] if `rows` is zero, or if
    /// the matrix is empty (the column count would remain zero).
    pub fn set_rows(&mut self, rows: usize) -> Result<()> {
        if rows == self.rows {
            return Ok(());
        }
        self.resize(rows, self.cols)
    }

    /// Changes the column count, reallocating in place.
    ///
    /// Same contract as [`Matrix::set_rows`], on the other axis.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidDimension`] if `cols` is zero, or if
    /// the matrix is empty.
    pub fn set_cols(&mut self, cols: usize) -> Result<()> {
        if cols == self.cols {
            return Ok(());
        }
        self.resize(self.rows, cols)
    }

    fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::InvalidDimension { rows, cols });
        }
        let mut data = vec![0.0; rows * cols];
        for i in 0..rows.min(self.rows) {
            for j in 0..cols.min(self.cols) {
                data[i * cols + j] = self.data[i * self.cols + j];
            }
        }
        self.data = data;
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    /// Compares two matrices entrywise within [`Matrix::EPSILON`].
    ///
    /// Matrices of different shapes compare unequal; matrices of the same
    /// shape compare equal iff every pair of entries differs by at most
    /// the tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidMatrix`] if either operand is empty —
    /// equality is undefined on empty matrices, unlike a shape mismatch
    /// which simply yields `false`.
    pub fn approx_eq(&self, other: &Self) -> Result<bool> {
        self.check_non_empty("eq")?;
        other.check_non_empty("eq")?;
        if self.shape() != other.shape() {
            return Ok(false);
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= Self::EPSILON))
    }

    /// Adds another matrix element-wise, producing a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidMatrix`] if either operand is empty,
    /// or [`MatrizError::ShapeMismatch`] if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "add")?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Adds another matrix element-wise in place.
    ///
    /// # Errors
    ///
    /// Same contract as [`Matrix::add`]; the receiver is untouched on error.
    pub fn add_assign(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape(other, "add")?;
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += b;
        }
        Ok(())
    }

    /// Subtracts another matrix element-wise, producing a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidMatrix`] if either operand is empty,
    /// or [`MatrizError::ShapeMismatch`] if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "sub")?;
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise in place.
    ///
    /// # Errors
    ///
    /// Same contract as [`Matrix::sub`]; the receiver is untouched on error.
    pub fn sub_assign(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape(other, "sub")?;
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a -= b;
        }
        Ok(())
    }

    /// Multiplies each element by a scalar, producing a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidMatrix`] if the matrix is empty.
    pub fn mul_scalar(&self, scalar: f64) -> Result<Self> {
        self.check_non_empty("mul_scalar")?;
        Ok(Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies each element by a scalar in place.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidMatrix`] if the matrix is empty.
    pub fn mul_scalar_assign(&mut self, scalar: f64) -> Result<()> {
        self.check_non_empty("mul_scalar")?;
        for x in &mut self.data {
            *x *= scalar;
        }
        Ok(())
    }

    /// Matrix-matrix multiplication, producing a new matrix.
    ///
    /// Entry `(i, j)` of the result is the dot product of row `i` of
    /// `self` with column `j` of `other`; the result has shape
    /// `self.rows x other.cols`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidMatrix`] if `other` is empty, or
    /// [`MatrizError::ShapeMismatch`] if `self.cols != other.rows` (an
    /// empty receiver has zero columns and falls under this case).
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        other.check_non_empty("matmul")?;
        if self.cols != other.rows {
            return Err(MatrizError::ShapeMismatch {
                expected: format!("rhs with {} rows", self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }

        let mut data = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                data[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Matrix-matrix multiplication in place; the product replaces the
    /// receiver.
    ///
    /// # Errors
    ///
    /// Same contract as [`Matrix::matmul`]; the receiver is untouched on
    /// error.
    pub fn matmul_assign(&mut self, other: &Self) -> Result<()> {
        *self = self.matmul(other)?;
        Ok(())
    }

    /// Transposes the matrix, producing a new `cols x rows` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidMatrix`] if the matrix is empty.
    pub fn transpose(&self) -> Result<Self> {
        self.check_non_empty("transpose")?;
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Ok(Self {
            data,
            rows: self.cols,
            cols: self.rows,
        })
    }

    /// Computes the determinant by cofactor expansion along the first
    /// column.
    ///
    /// The 1x1 determinant is the single entry; 2x2 minors use the closed
    /// form `a*d - b*c`. Complexity is factorial in the matrix size, with
    /// one fresh minor allocated per recursive step — acceptable for the
    /// small matrices this type targets.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidMatrix`] if the matrix is empty, or
    /// [`MatrizError::NotSquare`] if `rows != cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![3.0, 1.0, 2.0, 4.0]).unwrap();
    /// assert!((m.determinant().unwrap() - 10.0).abs() < 1e-12);
    /// ```
    pub fn determinant(&self) -> Result<f64> {
        self.check_square("determinant")?;
        Ok(self.det_unchecked())
    }

    fn det_unchecked(&self) -> f64 {
        let n = self.rows;
        if n == 1 {
            return self.data[0];
        }
        if n == 2 {
            return self.data[0] * self.data[3] - self.data[2] * self.data[1];
        }
        let mut det = 0.0;
        for i in 0..n {
            det += self.data[i * n] * Self::sign(i, 0) * self.minor(i, 0).det_unchecked();
        }
        det
    }

    /// Computes the matrix of algebraic complements (cofactors).
    ///
    /// Entry `(i, j)` is `sign(i, j)` times the determinant of the minor
    /// obtained by deleting row `i` and column `j`, where the sign is `+1`
    /// when `i + j` is even and `-1` otherwise. The cofactor matrix of a
    /// 1x1 input is the input itself (its minor is degenerate).
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidMatrix`] if the matrix is empty, or
    /// [`MatrizError::NotSquare`] if `rows != cols`.
    pub fn cofactors(&self) -> Result<Self> {
        self.check_square("cofactors")?;
        if self.rows == 1 {
            return Ok(self.clone());
        }
        let mut data = Vec::with_capacity(self.data.len());
        for i in 0..self.rows {
            for j in 0..self.cols {
                data.push(Self::sign(i, j) * self.minor(i, j).det_unchecked());
            }
        }
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Computes the inverse via the adjugate: the transposed cofactor
    /// matrix scaled by the reciprocal determinant.
    ///
    /// The 1x1 inverse is `1 / entry` with no singularity check — a zero
    /// entry yields an infinite result rather than an error. The
    /// determinant is computed on every call; callers inverting the same
    /// matrix repeatedly should cache the result themselves.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::InvalidMatrix`] if the matrix is empty,
    /// [`MatrizError::NotSquare`] if `rows != cols`, or
    /// [`MatrizError::SingularMatrix`] if the determinant is exactly zero
    /// (sizes above 1x1 only).
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::primitives::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![0.0, 1.0, 2.0, 3.0]).unwrap();
    /// let inv = m.inverse().unwrap();
    /// let expected = Matrix::from_vec(2, 2, vec![-1.5, 0.5, 1.0, 0.0]).unwrap();
    /// assert_eq!(inv, expected);
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        self.check_square("inverse")?;
        if self.rows == 1 {
            return Ok(Self {
                data: vec![1.0 / self.data[0]],
                rows: 1,
                cols: 1,
            });
        }
        let det = self.det_unchecked();
        if det == 0.0 {
            return Err(MatrizError::SingularMatrix { det });
        }
        self.cofactors()?.transpose()?.mul_scalar(1.0 / det)
    }

    // Minor of a square matrix with row `skip_row` and column `skip_col`
    // deleted. Callers guarantee rows == cols >= 2.
    fn minor(&self, skip_row: usize, skip_col: usize) -> Self {
        let rows = self.rows - 1;
        let cols = self.cols - 1;
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..self.rows {
            if i == skip_row {
                continue;
            }
            for j in 0..self.cols {
                if j == skip_col {
                    continue;
                }
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self { data, rows, cols }
    }

    fn sign(row: usize, col: usize) -> f64 {
        if (row + col) % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrizError::index_out_of_range(
                row, col, self.rows, self.cols,
            ));
        }
        Ok(())
    }

    fn check_non_empty(&self, op: &'static str) -> Result<()> {
        if self.is_empty() {
            return Err(MatrizError::invalid_matrix(op));
        }
        Ok(())
    }

    fn check_square(&self, op: &'static str) -> Result<()> {
        self.check_non_empty(op)?;
        if self.rows != self.cols {
            return Err(MatrizError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn check_same_shape(&self, other: &Self, op: &'static str) -> Result<()> {
        self.check_non_empty(op)?;
        other.check_non_empty(op)?;
        if self.shape() != other.shape() {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }
        Ok(())
    }
}

/// Entrywise comparison within [`Matrix::EPSILON`].
///
/// Matrices of different shapes compare unequal. Unlike
/// [`Matrix::approx_eq`], this cannot signal on empty operands: two empty
/// matrices compare equal (same shape, no entries).
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= Self::EPSILON)
    }
}

impl Add<&Matrix> for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics if either operand is empty or the shapes differ.
    fn add(self, rhs: &Matrix) -> Matrix {
        match Matrix::add(self, rhs) {
            Ok(result) => result,
            Err(e) => panic!("matrix addition failed: {e}"),
        }
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics if either operand is empty or the shapes differ.
    fn sub(self, rhs: &Matrix) -> Matrix {
        match Matrix::sub(self, rhs) {
            Ok(result) => result,
            Err(e) => panic!("matrix subtraction failed: {e}"),
        }
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics if `rhs` is empty or the inner dimensions differ.
    fn mul(self, rhs: &Matrix) -> Matrix {
        match Matrix::matmul(self, rhs) {
            Ok(result) => result,
            Err(e) => panic!("matrix multiplication failed: {e}"),
        }
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    /// # Panics
    ///
    /// Panics if the matrix is empty.
    fn mul(self, rhs: f64) -> Matrix {
        match Matrix::mul_scalar(self, rhs) {
            Ok(result) => result,
            Err(e) => panic!("scalar multiplication failed: {e}"),
        }
    }
}

impl AddAssign<&Matrix> for Matrix {
    /// # Panics
    ///
    /// Panics if either operand is empty or the shapes differ; the
    /// receiver is untouched in that case.
    fn add_assign(&mut self, rhs: &Matrix) {
        if let Err(e) = Matrix::add_assign(self, rhs) {
            panic!("matrix += failed: {e}");
        }
    }
}

impl SubAssign<&Matrix> for Matrix {
    /// # Panics
    ///
    /// Panics if either operand is empty or the shapes differ; the
    /// receiver is untouched in that case.
    fn sub_assign(&mut self, rhs: &Matrix) {
        if let Err(e) = Matrix::sub_assign(self, rhs) {
            panic!("matrix -= failed: {e}");
        }
    }
}

impl MulAssign<f64> for Matrix {
    /// # Panics
    ///
    /// Panics if the matrix is empty.
    fn mul_assign(&mut self, rhs: f64) {
        if let Err(e) = Matrix::mul_scalar_assign(self, rhs) {
            panic!("matrix *= failed: {e}");
        }
    }
}

impl MulAssign<&Matrix> for Matrix {
    /// # Panics
    ///
    /// Panics if `rhs` is empty or the inner dimensions differ; the
    /// receiver is untouched in that case.
    fn mul_assign(&mut self, rhs: &Matrix) {
        if let Err(e) = Matrix::matmul_assign(self, rhs) {
            panic!("matrix *= failed: {e}");
        }
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod contract;
