//! Shape and value validation for raw matrix data

use alloc::vec::Vec;

use crate::RrefError;

/// Validate that row data forms a non-empty rectangular matrix
///
/// Returns `(nrows, ncols)` on success.
pub fn validate_rows(rows: &[Vec<f64>]) -> Result<(usize, usize), RrefError> {
    let ncols = match rows.first() {
        Some(first) => first.len(),
        None => return Err(RrefError::InvalidShape),
    };

    if ncols == 0 {
        return Err(RrefError::InvalidShape);
    }

    if rows.iter().any(|row| row.len() != ncols) {
        return Err(RrefError::InvalidShape);
    }

    Ok((rows.len(), ncols))
}

/// Validate that every cell is a finite number
pub fn validate_finite(cells: &[f64]) -> Result<(), RrefError> {
    if cells.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(RrefError::InternalError)
    }
}
