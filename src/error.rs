use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use latency_core::ValidationError;
use thiserror::Error;

use crate::models::ErrorBody;

/// Errors surfaced to HTTP callers as `{ "error": <message> }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Details stay in the logs.
    #[error("Optimization failed")]
    OptimizationFailed,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::OptimizationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
