use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Employee not found for ID: {0}")]
    EmployeeNotFound(String),

    #[error("Validation failed: {}", .details.join("; "))]
    Validation { details: Vec<String> },

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Upstream returned {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct ValidationResponse<'a> {
    message: &'static str,
    details: &'a [String],
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::EmployeeNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::UpstreamStatus { .. } => StatusCode::BAD_GATEWAY,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::EmployeeNotFound(_) => HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body(self.to_string()),
            AppError::Validation { details } => HttpResponse::BadRequest().json(ValidationResponse {
                message: "Validation failed",
                details,
            }),
            _ => HttpResponse::build(self.status_code()).json(ErrorResponse { error: self.to_string() }),
        }
    }
}
