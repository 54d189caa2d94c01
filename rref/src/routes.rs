//! HTTP handlers for matrix generation and reduction

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use rref_core::{Difficulty, ErrorCategory, MatrixGenerator, RrefError};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::payload::{
    decode_check_request, decode_verify_request, MatrixResponse, RrefResponse, VerifyResponse,
};
use crate::server::AppState;

#[derive(Debug, Default, Deserialize)]
struct GenerateQuery {
    difficulty: Option<String>,
}

/// Register every endpoint on an app or scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/get_matrix")
            .route(web::get().to(get_matrix))
            .default_service(web::route().to(method_not_allowed)),
    )
    .service(
        web::resource("/api/check_rref")
            .route(web::post().to(check_rref))
            .default_service(web::route().to(method_not_allowed)),
    )
    .service(
        web::resource("/api/verify_rref")
            .route(web::post().to(verify_rref))
            .default_service(web::route().to(method_not_allowed)),
    );
}

fn log_rejection(err: RrefError) -> ApiError {
    match err.category() {
        ErrorCategory::Client => debug!(error = ?err, "rejected payload"),
        ErrorCategory::Server => warn!(error = ?err, "reduction failed"),
    }
    ApiError::from(err)
}

/// Body extraction fails on an oversized or broken payload
fn read_body(body: Result<web::Bytes, actix_web::Error>) -> Result<web::Bytes, ApiError> {
    body.map_err(|err| {
        if err.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE {
            debug!(error = %err, "rejected oversized payload");
            ApiError::PayloadTooLarge
        } else {
            debug!(error = %err, "unreadable payload");
            log_rejection(RrefError::InvalidInput)
        }
    })
}

/// `GET /api/get_matrix?difficulty=...`
///
/// A malformed query string is treated like a missing difficulty.
pub async fn get_matrix(req: HttpRequest) -> HttpResponse {
    let query = web::Query::<GenerateQuery>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_default();
    let difficulty = Difficulty::parse_or_default(query.difficulty.as_deref());

    let matrix = MatrixGenerator::generate(difficulty, &mut rand::thread_rng());
    debug!(%difficulty, rows = matrix.nrows(), cols = matrix.ncols(), "generated matrix");

    HttpResponse::Ok().json(MatrixResponse { matrix })
}

/// `POST /api/check_rref` with `{"matrix": [[...]]}`
pub async fn check_rref(
    body: Result<web::Bytes, actix_web::Error>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let body = read_body(body)?;
    let matrix = decode_check_request(&body).map_err(log_rejection)?;
    let rref = state.solver.reduce(&matrix).map_err(log_rejection)?;
    debug!(rows = rref.nrows(), cols = rref.ncols(), "reduced matrix");

    Ok(HttpResponse::Ok().json(RrefResponse { rref }))
}

/// `POST /api/verify_rref` with `{"matrix": [[...]], "answer": [[...]]}`
pub async fn verify_rref(
    body: Result<web::Bytes, actix_web::Error>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let body = read_body(body)?;
    let (matrix, answer) = decode_verify_request(&body).map_err(log_rejection)?;
    let (check, rref) = state
        .solver
        .verify(&matrix, &answer, state.answer_tolerance)
        .map_err(log_rejection)?;
    debug!(?check, "verified answer");

    Ok(HttpResponse::Ok().json(VerifyResponse::new(check, rref)))
}

async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}
