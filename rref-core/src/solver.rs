//! Gauss-Jordan reduction to reduced row-echelon form
//!
//! The solver scans columns left to right with a `lead` index. For each row
//! it looks for the first non-zero entry in the lead column at or below that
//! row; when the column is empty it moves to the next column and retries the
//! same row. The found row is swapped up, normalised so its pivot is 1, and
//! used to clear the lead column in every other row.
//!
//! Pivots are any non-zero value, whatever its scale. Round-off is handled at
//! the subtraction instead: when `a - f * b` cancels down to a tiny fraction
//! of its operands, the result is written back as an exact zero.

use alloc::vec::Vec;

use crate::matrix::magnitude;
use crate::validation::{check_answer, validate_finite, AnswerCheck};
use crate::{Matrix, Result};

/// Default cancellation tolerance, relative to the larger operand
pub const DEFAULT_ZERO_TOLERANCE: f64 = 1e-12;

/// A reduced matrix along with its pivot bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    /// The matrix in reduced row-echelon form
    pub matrix: Matrix,
    /// Pivot column of each pivot row, strictly increasing
    pub pivot_columns: Vec<usize>,
    /// Number of pivots
    pub rank: usize,
}

/// Gauss-Jordan reducer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RrefSolver {
    zero_tolerance: f64,
}

impl Default for RrefSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RrefSolver {
    /// Solver that cleans up cancellation residue below [`DEFAULT_ZERO_TOLERANCE`]
    pub const fn new() -> Self {
        Self {
            zero_tolerance: DEFAULT_ZERO_TOLERANCE,
        }
    }

    /// Solver that never rounds a result to zero
    pub const fn exact() -> Self {
        Self {
            zero_tolerance: 0.0,
        }
    }

    /// Set the relative cancellation tolerance
    ///
    /// A non-finite tolerance is ignored and the current one kept.
    pub fn with_zero_tolerance(mut self, tolerance: f64) -> Self {
        if tolerance.is_finite() {
            self.zero_tolerance = magnitude(tolerance);
        }
        self
    }

    pub fn zero_tolerance(&self) -> f64 {
        self.zero_tolerance
    }

    /// `a - product`, or exactly zero when the difference is round-off
    #[inline(always)]
    fn subtract(&self, a: f64, product: f64) -> f64 {
        let value = a - product;
        let scale = magnitude(a).max(magnitude(product));
        if magnitude(value) <= self.zero_tolerance * scale {
            0.0
        } else {
            value
        }
    }

    /// Reduce a copy of `matrix`; the caller's matrix is left untouched
    pub fn reduce(&self, matrix: &Matrix) -> Result<Matrix> {
        self.reduce_with_pivots(matrix).map(|r| r.matrix)
    }

    /// Reduce a copy of `matrix` and report its pivots and rank
    pub fn reduce_with_pivots(&self, matrix: &Matrix) -> Result<Reduction> {
        self.reduce_owned(matrix.clone())
    }

    /// Reduce a matrix the caller no longer needs, reusing its storage
    pub fn reduce_owned(&self, mut matrix: Matrix) -> Result<Reduction> {
        validate_finite(matrix.cells())?;

        let (nrows, ncols) = matrix.dimensions();
        let mut pivot_columns = Vec::with_capacity(nrows.min(ncols));
        let mut lead = 0;

        'rows: for r in 0..nrows {
            if lead >= ncols {
                break;
            }

            let mut i = r;
            while matrix.cells()[i * ncols + lead] == 0.0 {
                i += 1;
                if i == nrows {
                    // Column has no pivot at or below row r
                    i = r;
                    lead += 1;
                    if lead == ncols {
                        break 'rows;
                    }
                }
            }

            matrix.swap_rows(i, r);

            let cells = matrix.cells_mut();
            let pivot = cells[r * ncols + lead];
            for k in 0..ncols {
                let value = cells[r * ncols + k] / pivot;
                // -0.0 from a negative pivot
                cells[r * ncols + k] = if value == 0.0 { 0.0 } else { value };
            }

            for j in 0..nrows {
                if j == r {
                    continue;
                }
                let factor = cells[j * ncols + lead];
                if factor == 0.0 {
                    continue;
                }
                for k in 0..ncols {
                    let product = factor * cells[r * ncols + k];
                    cells[j * ncols + k] = self.subtract(cells[j * ncols + k], product);
                }
            }

            pivot_columns.push(lead);
            lead += 1;
        }

        validate_finite(matrix.cells())?;

        Ok(Reduction {
            rank: pivot_columns.len(),
            pivot_columns,
            matrix,
        })
    }

    /// Reduce `original` and compare `submitted` with the result
    pub fn verify(
        &self,
        original: &Matrix,
        submitted: &Matrix,
        tolerance: f64,
    ) -> Result<(AnswerCheck, Matrix)> {
        let expected = self.reduce(original)?;
        Ok((check_answer(&expected, submitted, tolerance), expected))
    }
}
