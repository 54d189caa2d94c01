//! Comparison of a submitted answer with the expected reduced matrix

use crate::matrix::magnitude;
use crate::traits::DenseMatrix;

/// Outcome of checking a submitted matrix against the expected one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "outcome", rename_all = "snake_case")
)]
pub enum AnswerCheck {
    /// Every cell matches within tolerance
    Correct,
    /// Same shape, but some cells differ
    Incorrect { mismatches: usize },
    /// The submitted matrix has a different shape
    ShapeMismatch {
        expected: (usize, usize),
        submitted: (usize, usize),
    },
}

impl AnswerCheck {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerCheck::Correct)
    }

    /// Number of wrong cells; every expected cell counts when shapes differ
    pub fn mismatches(&self) -> usize {
        match self {
            AnswerCheck::Correct => 0,
            AnswerCheck::Incorrect { mismatches } => *mismatches,
            AnswerCheck::ShapeMismatch { expected, .. } => expected.0 * expected.1,
        }
    }
}

/// Compare `submitted` with `expected` cell by cell
pub fn check_answer<A, B>(expected: &A, submitted: &B, tolerance: f64) -> AnswerCheck
where
    A: DenseMatrix + ?Sized,
    B: DenseMatrix + ?Sized,
{
    let expected_dims = expected.dimensions();
    let submitted_dims = submitted.dimensions();
    if expected_dims != submitted_dims {
        return AnswerCheck::ShapeMismatch {
            expected: expected_dims,
            submitted: submitted_dims,
        };
    }

    let (nrows, ncols) = expected_dims;
    let mut mismatches = 0;
    for r in 0..nrows {
        for c in 0..ncols {
            let matches = match (expected.get_element(r, c), submitted.get_element(r, c)) {
                (Some(a), Some(b)) => magnitude(a - b) <= tolerance,
                _ => false,
            };
            if !matches {
                mismatches += 1;
            }
        }
    }

    if mismatches == 0 {
        AnswerCheck::Correct
    } else {
        AnswerCheck::Incorrect { mismatches }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_answer() {
        let expected = [[1.0, 0.0], [0.0, 1.0]];

        assert_eq!(
            check_answer(&expected, &[[1.0, 0.0], [0.0, 1.0]], 1e-9),
            AnswerCheck::Correct
        );
        assert_eq!(
            check_answer(&expected, &[[1.0, 1e-12], [0.0, 1.0]], 1e-9),
            AnswerCheck::Correct
        );
        assert_eq!(
            check_answer(&expected, &[[1.0, 2.0], [0.0, 3.0]], 1e-9),
            AnswerCheck::Incorrect { mismatches: 2 }
        );
        assert_eq!(
            check_answer(&expected, &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], 1e-9),
            AnswerCheck::ShapeMismatch {
                expected: (2, 2),
                submitted: (2, 3)
            }
        );
    }

    #[test]
    fn test_answer_check_accessors() {
        assert!(AnswerCheck::Correct.is_correct());
        assert_eq!(AnswerCheck::Correct.mismatches(), 0);
        assert!(!AnswerCheck::Incorrect { mismatches: 3 }.is_correct());
        assert_eq!(AnswerCheck::Incorrect { mismatches: 3 }.mismatches(), 3);
        let shape = AnswerCheck::ShapeMismatch {
            expected: (3, 4),
            submitted: (4, 3),
        };
        assert_eq!(shape.mismatches(), 12);
    }

    #[test]
    fn test_nan_never_matches() {
        assert_eq!(
            check_answer(&[[1.0]], &[[f64::NAN]], 1e-9),
            AnswerCheck::Incorrect { mismatches: 1 }
        );
    }
}
