//! Error types for Matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Matriz operations.
///
/// Every fallible operation on [`Matrix`](crate::primitives::Matrix)
/// reports one of these variants. Failures are detected before any
/// mutation, so the receiver of an in-place operation is untouched
/// whenever an error comes back.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::NotSquare { rows: 10, cols: 9 };
/// assert!(err.to_string().contains("not square"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Construction or resize with a zero row or column count.
    InvalidDimension {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Operation attempted on an empty matrix where a non-empty operand
    /// is required.
    InvalidMatrix {
        /// Name of the rejected operation
        op: &'static str,
    },

    /// Operand shapes are incompatible for the operation.
    ShapeMismatch {
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// Determinant, cofactors, or inverse requested on a non-square matrix.
    NotSquare {
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
    },

    /// Matrix is singular (non-invertible).
    SingularMatrix {
        /// Determinant value (exactly zero)
        det: f64,
    },

    /// Element access outside the current bounds.
    IndexOutOfRange {
        /// Requested row index
        row: usize,
        /// Requested column index
        col: usize,
        /// Current row count
        rows: usize,
        /// Current column count
        cols: usize,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidDimension { rows, cols } => {
                write!(
                    f,
                    "Invalid matrix dimension: {rows}x{cols}, both dimensions must be at least 1"
                )
            }
            MatrizError::InvalidMatrix { op } => {
                write!(f, "Invalid matrix: {op} requires a non-empty operand")
            }
            MatrizError::ShapeMismatch { expected, actual } => {
                write!(f, "Matrix shape mismatch: expected {expected}, got {actual}")
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "Matrix is not square: {rows}x{cols}")
            }
            MatrizError::SingularMatrix { det } => {
                write!(
                    f,
                    "Singular matrix detected: determinant = {det}, cannot invert"
                )
            }
            MatrizError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Index ({row}, {col}) out of range for {rows}x{cols} matrix"
                )
            }
        }
    }
}

impl std::error::Error for MatrizError {}

impl MatrizError {
    /// Create an invalid-matrix error naming the rejected operation
    #[must_use]
    pub fn invalid_matrix(op: &'static str) -> Self {
        Self::InvalidMatrix { op }
    }

    /// Create a shape mismatch error from two `(rows, cols)` pairs
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::ShapeMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create an index out of range error with the current bounds
    #[must_use]
    pub fn index_out_of_range(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self::IndexOutOfRange {
            row,
            col,
            rows,
            cols,
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_display() {
        let err = MatrizError::InvalidDimension { rows: 0, cols: 4 };
        assert!(err.to_string().contains("Invalid matrix dimension"));
        assert!(err.to_string().contains("0x4"));
    }

    #[test]
    fn test_invalid_matrix_display() {
        let err = MatrizError::invalid_matrix("transpose");
        assert!(err.to_string().contains("transpose"));
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = MatrizError::shape_mismatch((4, 4), (4, 3));
        assert!(err.to_string().contains("shape mismatch"));
        assert!(err.to_string().contains("4x4"));
        assert!(err.to_string().contains("4x3"));
    }

    #[test]
    fn test_not_square_display() {
        let err = MatrizError::NotSquare { rows: 10, cols: 9 };
        assert!(err.to_string().contains("not square"));
        assert!(err.to_string().contains("10x9"));
    }

    #[test]
    fn test_singular_matrix_display() {
        let err = MatrizError::SingularMatrix { det: 0.0 };
        let msg = err.to_string();
        assert!(msg.contains("Singular matrix"));
        assert!(msg.contains('0'));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = MatrizError::index_out_of_range(2, 3, 3, 3);
        assert!(err.to_string().contains("(2, 3)"));
        assert!(err.to_string().contains("3x3"));
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(MatrizError::SingularMatrix { det: 0.0 });
        assert!(!err.to_string().is_empty());
    }
}
