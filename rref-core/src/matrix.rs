//! Dense matrix value type
//!
//! A [`Matrix`] is always rectangular with at least one row and one column.
//! The invariant is checked once at construction, so the solver and the
//! validation utilities never have to re-check it.

use alloc::vec::Vec;

use crate::traits::DenseMatrix;
use crate::validation::shape::validate_rows;
use crate::Result;

/// Row-major dense matrix of `f64` cells
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct Matrix {
    nrows: usize,
    ncols: usize,
    cells: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from a list of rows
    ///
    /// Fails with `InvalidShape` when there are no rows, a row is empty, or
    /// rows differ in length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let (nrows, ncols) = validate_rows(&rows)?;
        Ok(Self {
            nrows,
            ncols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a matrix of the given shape from a cell function
    ///
    /// Callers guarantee a non-zero shape.
    pub(crate) fn from_fn<F>(nrows: usize, ncols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        debug_assert!(nrows > 0 && ncols > 0);
        let mut cells = Vec::with_capacity(nrows * ncols);
        for r in 0..nrows {
            for c in 0..ncols {
                cells.push(f(r, c));
            }
        }
        Self {
            nrows,
            ncols,
            cells,
        }
    }

    /// Square identity matrix, `n` must be at least 1
    pub fn identity(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(crate::RrefError::InvalidShape);
        }
        Ok(Self::from_fn(n, n, |r, c| if r == c { 1.0 } else { 0.0 }))
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Get an element, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.nrows || col >= self.ncols {
            return None;
        }
        Some(self.cells[row * self.ncols + col])
    }

    /// Get a full row, `None` when out of bounds
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.nrows {
            return None;
        }
        Some(&self.cells[row * self.ncols..(row + 1) * self.ncols])
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [f64] {
        &mut self.cells
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.chunks(self.ncols)
    }

    /// Copy the matrix out as a list of rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.ncols {
            self.cells.swap(a * self.ncols + k, b * self.ncols + k);
        }
    }

    /// Element-wise comparison within an absolute tolerance
    ///
    /// Matrices of different shapes are never equal.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| magnitude(a - b) <= tolerance)
    }
}

impl DenseMatrix for Matrix {
    fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        self.get(row, col)
    }

    fn row(&self, row: usize) -> Option<&[f64]> {
        Matrix::row(self, row)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = crate::RrefError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

/// Absolute value without relying on `std` float intrinsics
#[inline(always)]
pub(crate) fn magnitude(value: f64) -> f64 {
    if value < 0.0 {
        -value
    } else {
        value
    }
}
