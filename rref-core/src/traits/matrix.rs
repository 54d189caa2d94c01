//! Core dense matrix abstraction
//!
//! This module defines the read-only view every matrix representation must
//! provide to be inspected by the echelon and answer utilities.

/// Read-only access to a dense, rectangular matrix of `f64` cells
pub trait DenseMatrix {
    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get an element at the specified position
    ///
    /// Returns `None` if the position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<f64>;

    /// Get a full row as a slice
    fn row(&self, row: usize) -> Option<&[f64]>;

    fn nrows(&self) -> usize {
        self.dimensions().0
    }

    fn ncols(&self) -> usize {
        self.dimensions().1
    }
}

impl<const R: usize, const C: usize> DenseMatrix for [[f64; C]; R] {
    fn dimensions(&self) -> (usize, usize) {
        (R, C)
    }

    fn get_element(&self, row: usize, col: usize) -> Option<f64> {
        self.get(row).and_then(|r| r.get(col)).copied()
    }

    fn row(&self, row: usize) -> Option<&[f64]> {
        self.get(row).map(|r| r.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_view() {
        let m = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert_eq!(m.dimensions(), (2, 3));
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m.get_element(1, 2), Some(6.0));
        assert_eq!(m.get_element(2, 0), None);
        assert_eq!(m.get_element(0, 3), None);
        assert_eq!(m.row(0), Some(&[1.0, 2.0, 3.0][..]));
    }
}
