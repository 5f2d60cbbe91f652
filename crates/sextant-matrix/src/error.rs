//! Matrix operation errors.

use thiserror::Error;

/// A failed matrix operation.
///
/// The display texts are the contract with callers: the UI shows them
/// verbatim. The inverse has two distinct failures so a genuinely singular
/// matrix reads differently from a shape problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Elementwise operation on differently shaped matrices.
    #[error("Dimension mismatch")]
    DimensionMismatch,

    /// Product of matrices whose inner dimensions disagree.
    #[error("Invalid dimensions for multiplication")]
    MultiplyDimensions,

    /// Determinant of a non-square matrix.
    #[error("Must be square matrix")]
    NotSquare,

    /// Inverse of a matrix whose rounded determinant is zero.
    #[error("Determinant is 0, no inverse")]
    SingularDeterminant,

    /// Any other inverse failure, including non-square input.
    #[error("Singular matrix or non-square")]
    NotInvertible,
}
