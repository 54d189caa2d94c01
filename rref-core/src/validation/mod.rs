//! Validation utilities for matrices
//!
//! This module contains pure validation functions with no I/O dependencies:
//! shape checks on raw row data, echelon-form inspection, and comparison of a
//! submitted answer with an expected reduced matrix.

pub mod answer;
pub mod echelon;
pub mod shape;

pub use answer::{check_answer, AnswerCheck};
pub use echelon::{is_rref, pivot_columns};
pub use shape::{validate_finite, validate_rows};
