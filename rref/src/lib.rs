//! RREF - row-reduction practice service
//!
//! This library serves randomly generated practice matrices and checks
//! reduced row-echelon forms over HTTP.
//!
//! ## Architecture
//!
//! RREF follows a clean core/service separation:
//!
//! - **rref-core**: matrix type, difficulty policy, generation and reduction (no I/O)
//! - **rref**: JSON payloads, the actix-web server, an HTTP client and tracing setup
//!
//! ## Quick Start
//!
//! ```rust
//! use rref::{Difficulty, MatrixGenerator, RrefSolver};
//!
//! let matrix = MatrixGenerator::generate(Difficulty::Medium, &mut rand::thread_rng());
//! let reduced = RrefSolver::new().reduce(&matrix).expect("generated matrices are finite");
//! assert_eq!(reduced.dimensions(), matrix.dimensions());
//! ```
//!
//! ## Endpoints
//!
//! - `GET /api/get_matrix?difficulty=easy|medium|hard`
//! - `POST /api/check_rref` with `{"matrix": [[...]]}`
//! - `POST /api/verify_rref` with `{"matrix": [[...]], "answer": [[...]]}`

// Re-export core abstractions
pub use rref_core::{
    // Core types
    AnswerCheck, DenseMatrix, Difficulty, Matrix, MatrixGenerator, Reduction, RrefSolver,
    // Error handling
    ErrorCategory, Result, RrefError,
    // Validation utilities
    check_answer, is_rref, pivot_columns,
};

pub mod config;
pub mod error;
pub mod payload;
pub mod routes;
pub mod server;
pub mod telemetry;

#[cfg(feature = "client")]
pub mod client;

pub use config::ServerConfig;
pub use error::ApiError;
pub use payload::{ErrorResponse, MatrixResponse, RrefResponse, VerifyResponse};
pub use server::AppState;

#[cfg(feature = "client")]
pub use client::{ClientError, PracticeClient};
