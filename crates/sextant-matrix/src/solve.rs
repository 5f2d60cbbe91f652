//! Determinant and inverse via Gaussian elimination.
//!
//! Both results are rounded to 6 decimal places immediately after
//! computation, and the inverse's singularity check runs against the
//! *rounded* determinant. The rounding is a correctness feature, not
//! cosmetic: a matrix whose true determinant is zero but computes as 1e-15
//! must classify as singular, and comparing the raw value to zero would
//! reintroduce exactly the floating-point false negatives this absorbs.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Rounds to 6 decimal places, normalizing -0.0 away.
pub(crate) fn round6(value: f64) -> f64 {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl Matrix {
    /// Computes the determinant, rounded to 6 decimal places.
    ///
    /// Gaussian elimination with partial pivoting; the determinant is the
    /// signed product of the pivots.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }
        let n = self.num_rows();
        if n == 0 {
            // Empty product.
            return Ok(1.0);
        }

        let mut m = self.clone();
        let mut det = 1.0;
        for col in 0..n {
            // Partial pivoting: largest magnitude wins, for stability.
            let mut pivot = col;
            for row in col + 1..n {
                if m[(row, col)].abs() > m[(pivot, col)].abs() {
                    pivot = row;
                }
            }
            if m[(pivot, col)] == 0.0 {
                return Ok(0.0);
            }
            if pivot != col {
                m.swap_rows(col, pivot);
                det = -det;
            }

            det *= m[(col, col)];
            for row in col + 1..n {
                let factor = m[(row, col)] / m[(col, col)];
                for k in col..n {
                    let delta = factor * m[(col, k)];
                    m[(row, k)] -= delta;
                }
            }
        }

        Ok(round6(det))
    }

    /// Computes the inverse, every entry rounded to 6 decimal places.
    ///
    /// Gauss-Jordan elimination on the augmented matrix `[A | I]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SingularDeterminant`] when the rounded
    /// determinant is zero, and [`MatrixError::NotInvertible`] for any
    /// other fault, including non-square input.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotInvertible);
        }
        let det = self.determinant().map_err(|_| MatrixError::NotInvertible)?;
        if det == 0.0 {
            return Err(MatrixError::SingularDeterminant);
        }

        let n = self.num_rows();
        let mut aug = Self::zeros(n, 2 * n);
        for i in 0..n {
            for j in 0..n {
                aug[(i, j)] = self[(i, j)];
            }
            aug[(i, n + i)] = 1.0;
        }

        for col in 0..n {
            let mut pivot = col;
            for row in col + 1..n {
                if aug[(row, col)].abs() > aug[(pivot, col)].abs() {
                    pivot = row;
                }
            }
            if aug[(pivot, col)] == 0.0 {
                // The rounded determinant passed but elimination still
                // degenerated.
                return Err(MatrixError::NotInvertible);
            }
            aug.swap_rows(col, pivot);

            let pivot_value = aug[(col, col)];
            for k in 0..2 * n {
                aug[(col, k)] /= pivot_value;
            }
            for row in 0..n {
                if row == col || aug[(row, col)] == 0.0 {
                    continue;
                }
                let factor = aug[(row, col)];
                for k in 0..2 * n {
                    let delta = factor * aug[(col, k)];
                    aug[(row, k)] -= delta;
                }
            }
        }

        let mut result = Self::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                result[(i, j)] = round6(aug[(i, n + j)]);
            }
        }
        Ok(result)
    }
}
