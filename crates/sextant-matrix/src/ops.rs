//! Algebraic operations with dimension validation.

use rayon::prelude::*;

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Minimum row count before the product switches to the rayon path.
///
/// Below this, thread handoff costs more than the multiply itself.
const PARALLEL_THRESHOLD: usize = 64;

impl Matrix {
    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless both matrices
    /// have the same shape.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.elementwise(other, |a, b| a + b)
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless both matrices
    /// have the same shape.
    pub fn subtract(&self, other: &Self) -> Result<Self, MatrixError> {
        self.elementwise(other, |a, b| a - b)
    }

    fn elementwise(
        &self,
        other: &Self,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<Self, MatrixError> {
        if self.num_rows() != other.num_rows() || self.num_cols() != other.num_cols() {
            return Err(MatrixError::DimensionMismatch);
        }
        let mut result = Self::zeros(self.num_rows(), self.num_cols());
        for i in 0..self.num_rows() {
            for j in 0..self.num_cols() {
                result[(i, j)] = op(self[(i, j)], other[(i, j)]);
            }
        }
        Ok(result)
    }

    /// Standard matrix product.
    ///
    /// Large products run on the rayon thread pool; this is invisible to
    /// callers beyond wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::MultiplyDimensions`] unless
    /// `self.num_cols() == other.num_rows()`.
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.num_cols() != other.num_rows() {
            return Err(MatrixError::MultiplyDimensions);
        }
        if self.num_rows() < PARALLEL_THRESHOLD {
            Ok(self.mm(other))
        } else {
            Ok(self.mm_parallel(other))
        }
    }

    fn mm(&self, other: &Self) -> Self {
        let mut result = Self::zeros(self.num_rows(), other.num_cols());
        for i in 0..self.num_rows() {
            for j in 0..other.num_cols() {
                let mut sum = 0.0;
                for k in 0..self.num_cols() {
                    sum += self[(i, k)] * other[(k, j)];
                }
                result[(i, j)] = sum;
            }
        }
        result
    }

    fn mm_parallel(&self, other: &Self) -> Self {
        let rows: Vec<Vec<f64>> = (0..self.num_rows())
            .into_par_iter()
            .map(|i| {
                (0..other.num_cols())
                    .map(|j| {
                        let mut sum = 0.0;
                        for k in 0..self.num_cols() {
                            sum += self[(i, k)] * other[(k, j)];
                        }
                        sum
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }
}
