//! Matriz: dense 2D matrix algebra in pure Rust.
//!
//! Matriz provides a single small value type, [`primitives::Matrix`], with
//! the standard linear-algebra operations over it: elementwise arithmetic,
//! scalar and matrix multiplication, transpose, cofactor expansion,
//! determinant, and inverse. It is a numeric primitive for embedding in
//! larger code, not a general linear-algebra library.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_vec(2, 2, vec![
//!     4.0, 7.0,
//!     2.0, 6.0,
//! ]).unwrap();
//!
//! let inv = a.inverse().unwrap();
//! let product = a.matmul(&inv).unwrap();
//!
//! // A * A^-1 is the identity within the crate tolerance.
//! assert_eq!(product, Matrix::identity(2).unwrap());
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the core Matrix type
//! - [`error`]: error type and Result alias
//! - [`prelude`]: convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;
