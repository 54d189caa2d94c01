//! JSON request decoding and response bodies
//!
//! Request bodies are decoded through `serde_json::Value` rather than typed
//! structs so that a missing or non-array matrix (`InvalidInput`) can be told
//! apart from an empty or ragged one (`InvalidShape`).

use rref_core::{AnswerCheck, Matrix, RrefError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response body of `GET /api/get_matrix`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixResponse {
    pub matrix: Matrix,
}

/// Response body of `POST /api/check_rref`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RrefResponse {
    pub rref: Matrix,
}

/// Response body of `POST /api/verify_rref`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub correct: bool,
    pub mismatches: usize,
    pub rref: Matrix,
}

impl VerifyResponse {
    pub fn new(check: AnswerCheck, rref: Matrix) -> Self {
        Self {
            correct: check.is_correct(),
            mismatches: check.mismatches(),
            rref,
        }
    }
}

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Decode a matrix from a JSON value
///
/// Anything that is not an array of arrays of numbers is `InvalidInput`;
/// an empty or ragged array of arrays is `InvalidShape`.
pub fn matrix_from_value(value: Option<&Value>) -> Result<Matrix, RrefError> {
    let rows = match value {
        Some(Value::Array(rows)) => rows,
        _ => return Err(RrefError::InvalidInput),
    };

    let rows = rows
        .iter()
        .map(|row| match row {
            Value::Array(cells) => cells
                .iter()
                .map(|cell| cell.as_f64().ok_or(RrefError::InvalidInput))
                .collect::<Result<Vec<f64>, _>>(),
            _ => Err(RrefError::InvalidInput),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Matrix::from_rows(rows)
}

fn parse_body(body: &[u8]) -> Result<Value, RrefError> {
    serde_json::from_slice(body).map_err(|_| RrefError::InvalidInput)
}

/// Decode a `{"matrix": [[...]]}` request body
pub fn decode_check_request(body: &[u8]) -> Result<Matrix, RrefError> {
    let value = parse_body(body)?;
    matrix_from_value(value.get("matrix"))
}

/// Decode a `{"matrix": [[...]], "answer": [[...]]}` request body
pub fn decode_verify_request(body: &[u8]) -> Result<(Matrix, Matrix), RrefError> {
    let value = parse_body(body)?;
    let matrix = matrix_from_value(value.get("matrix"))?;
    let answer = matrix_from_value(value.get("answer"))?;
    Ok((matrix, answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn test_decode_check_request() {
        let m = decode_check_request(br#"{"matrix": [[2, 4], [1, 3]]}"#).unwrap();
        assert_eq!(m.to_rows(), vec![vec![2.0, 4.0], vec![1.0, 3.0]]);

        let m = decode_check_request(br#"{"matrix": [[0.5, -1.25, 1e3]]}"#).unwrap();
        assert_eq!(m.to_rows(), vec![vec![0.5, -1.25, 1000.0]]);
    }

    #[test_case(b"" ; "empty body")]
    #[test_case(b"not json" ; "garbage")]
    #[test_case(br#"[[1, 2]]"# ; "bare array")]
    #[test_case(br#"{}"# ; "missing matrix")]
    #[test_case(br#"{"matrix": null}"# ; "null matrix")]
    #[test_case(br#"{"matrix": "[[1]]"}"# ; "string matrix")]
    #[test_case(br#"{"matrix": 42}"# ; "number matrix")]
    #[test_case(br#"{"matrix": [1, 2, 3]}"# ; "flat array")]
    #[test_case(br#"{"matrix": [[1, "2"]]}"# ; "string cell")]
    #[test_case(br#"{"matrix": [[1, null]]}"# ; "null cell")]
    fn test_invalid_input(body: &[u8]) {
        assert_eq!(decode_check_request(body), Err(RrefError::InvalidInput));
    }

    #[test_case(br#"{"matrix": []}"# ; "no rows")]
    #[test_case(br#"{"matrix": [[]]}"# ; "empty row")]
    #[test_case(br#"{"matrix": [[1, 2], [3]]}"# ; "ragged")]
    fn test_invalid_shape(body: &[u8]) {
        assert_eq!(decode_check_request(body), Err(RrefError::InvalidShape));
    }

    #[test]
    fn test_decode_verify_request() {
        let (matrix, answer) =
            decode_verify_request(br#"{"matrix": [[2, 4], [1, 3]], "answer": [[1, 0], [0, 1]]}"#)
                .unwrap();
        assert_eq!(matrix.dimensions(), (2, 2));
        assert_eq!(answer, Matrix::identity(2).unwrap());

        assert_eq!(
            decode_verify_request(br#"{"matrix": [[2, 4], [1, 3]]}"#),
            Err(RrefError::InvalidInput)
        );
        assert_eq!(
            decode_verify_request(br#"{"matrix": [[2, 4], [1, 3]], "answer": []}"#),
            Err(RrefError::InvalidShape)
        );
    }

    #[test]
    fn test_response_shapes() {
        let m = Matrix::identity(2).unwrap();
        assert_eq!(
            serde_json::to_value(RrefResponse { rref: m.clone() }).unwrap(),
            json!({"rref": [[1.0, 0.0], [0.0, 1.0]]})
        );
        assert_eq!(
            serde_json::to_value(VerifyResponse::new(AnswerCheck::Correct, m)).unwrap(),
            json!({"correct": true, "mismatches": 0, "rref": [[1.0, 0.0], [0.0, 1.0]]})
        );
    }
}
