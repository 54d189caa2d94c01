//! Reduced row-echelon form inspection
//!
//! Values whose magnitude is at most `tolerance` count as zero, and a leading
//! entry counts as one when it is within `tolerance` of 1.

use alloc::vec::Vec;

use crate::matrix::magnitude;
use crate::traits::DenseMatrix;

/// Column of the first non-zero entry in a row
fn leading_column(row: &[f64], tolerance: f64) -> Option<usize> {
    row.iter().position(|v| magnitude(*v) > tolerance)
}

/// Leading-entry column of every non-zero row, in row order
///
/// For a matrix in RREF these are the pivot columns and the result is
/// strictly increasing.
pub fn pivot_columns<M: DenseMatrix + ?Sized>(matrix: &M, tolerance: f64) -> Vec<usize> {
    (0..matrix.nrows())
        .filter_map(|r| matrix.row(r).and_then(|row| leading_column(row, tolerance)))
        .collect()
}

/// Check whether a matrix is in reduced row-echelon form
pub fn is_rref<M: DenseMatrix + ?Sized>(matrix: &M, tolerance: f64) -> bool {
    let (nrows, _) = matrix.dimensions();
    let mut lead: Option<usize> = None;
    let mut seen_zero_row = false;

    for i in 0..nrows {
        let row = match matrix.row(i) {
            Some(row) => row,
            None => return false,
        };

        match leading_column(row, tolerance) {
            None => seen_zero_row = true,
            Some(pivot_col) => {
                // Zero rows must sit below every non-zero row
                if seen_zero_row {
                    return false;
                }
                if lead.is_some_and(|prev| pivot_col <= prev) {
                    return false;
                }
                lead = Some(pivot_col);

                if magnitude(row[pivot_col] - 1.0) > tolerance {
                    return false;
                }

                let column_clear = (0..nrows).filter(|&r| r != i).all(|r| {
                    matrix
                        .get_element(r, pivot_col)
                        .is_some_and(|v| magnitude(v) <= tolerance)
                });
                if !column_clear {
                    return false;
                }
            }
        }
    }
    true
}
