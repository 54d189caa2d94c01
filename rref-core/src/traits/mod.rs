//! Abstract interfaces for dense matrix access
//!
//! Validation utilities are written against these traits so they work on
//! both the owned [`crate::Matrix`] and plain fixed-size arrays.

pub mod matrix;

pub use matrix::DenseMatrix;
