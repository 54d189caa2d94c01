//! HTTP client for a remote RREF server
//!
//! This is the collaborator side of the endpoints in [`crate::routes`]: it
//! fetches practice matrices and asks the server for reductions. Only
//! available when the "client" feature is enabled.

use reqwest::{Client, Response};
use rref_core::{Difficulty, Matrix};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

use crate::payload::{ErrorResponse, MatrixResponse, RrefResponse, VerifyResponse};

/// Errors from talking to a remote server
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport or decoding failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with an error status
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
}

/// Client for the practice endpoints of a running server
#[derive(Debug, Clone)]
pub struct PracticeClient {
    client: Client,
    base_url: String,
}

impl PracticeClient {
    /// Create a client for a server at `base_url`, e.g. `http://127.0.0.1:5000`
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    /// Turn a response into `T`, or into the server's error message
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
        };
        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }

    /// Fetch a practice matrix
    pub async fn get_matrix(&self, difficulty: Difficulty) -> Result<Matrix, ClientError> {
        let response = self
            .client
            .get(self.endpoint("get_matrix"))
            .query(&[("difficulty", difficulty.as_str())])
            .send()
            .await?;
        Ok(Self::decode::<MatrixResponse>(response).await?.matrix)
    }

    /// Ask the server to reduce `matrix`
    pub async fn check_rref(&self, matrix: &Matrix) -> Result<Matrix, ClientError> {
        let response = self
            .client
            .post(self.endpoint("check_rref"))
            .json(&json!({ "matrix": matrix }))
            .send()
            .await?;
        Ok(Self::decode::<RrefResponse>(response).await?.rref)
    }

    /// Ask the server to check `answer` against the reduction of `matrix`
    pub async fn verify_rref(
        &self,
        matrix: &Matrix,
        answer: &Matrix,
    ) -> Result<VerifyResponse, ClientError> {
        let response = self
            .client
            .post(self.endpoint("verify_rref"))
            .json(&json!({ "matrix": matrix, "answer": answer }))
            .send()
            .await?;
        Self::decode(response).await
    }
}
