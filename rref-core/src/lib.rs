#![no_std]

//! RREF Core - matrix generation and row-reduction definitions
//!
//! This crate provides the pure pieces of the row-reduction practice service:
//! the dense matrix type, difficulty policy, random matrix generation and
//! Gauss-Jordan reduction. Nothing here performs I/O.

extern crate alloc;

pub mod difficulty;
pub mod error;
pub mod generator;
pub mod matrix;
pub mod solver;
pub mod traits;
pub mod validation;

pub use difficulty::*;
pub use error::*;
pub use generator::MatrixGenerator;
pub use matrix::Matrix;
pub use solver::{Reduction, RrefSolver};
pub use traits::DenseMatrix;
pub use validation::{check_answer, is_rref, pivot_columns, AnswerCheck};
