//! Dense matrix storage and structural operations.
//!
//! Matrices are value types stored in row-major order. Every operation
//! produces a new matrix; nothing is mutated across calls.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense matrix of f64 entries, stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Matrix entries in row-major order.
    data: Vec<f64>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl Matrix {
    /// Creates a new matrix filled with zeros.
    ///
    /// This is the canonical initializer for fresh operand matrices.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![0.0; num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not all have the same length.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        if rows.is_empty() {
            return Self::zeros(0, 0);
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let data: Vec<f64> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns the entry at (row, col), or `None` out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.num_rows && col < self.num_cols {
            Some(self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Converts back to a 2D vector, row by row.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.num_rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(j, i)] = self[(i, j)];
            }
        }
        result
    }

    /// Returns a reshaped copy.
    ///
    /// Entries at positions present in both shapes are preserved; new
    /// cells are zero; shrinking truncates.
    #[must_use]
    pub fn resize(&self, num_rows: usize, num_cols: usize) -> Self {
        let mut result = Self::zeros(num_rows, num_cols);
        for i in 0..num_rows.min(self.num_rows) {
            for j in 0..num_cols.min(self.num_cols) {
                result[(i, j)] = self[(i, j)];
            }
        }
        result
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.num_cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.num_cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.num_rows {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (c, value) in self.row(r).iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
