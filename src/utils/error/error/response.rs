//! HTTP response conversion for GatewayError
//!
//! Rerank clients expect plain-text failure bodies, so every error renders as
//! `text/plain` with a human-readable message and no machine-readable code.

use super::types::GatewayError;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};

/// Body prefix for failures raised while reranking
pub const RERANK_FAILURE_PREFIX: &str = "Error during reranking";

/// Body prefix for undecodable request bodies
pub const BAD_REQUEST_PREFIX: &str = "Invalid request body";

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            GatewayError::BadRequest(detail) => format!("{}: {}", BAD_REQUEST_PREFIX, detail),
            GatewayError::MethodNotAllowed(_) => "Method not allowed".to_string(),
            err if err.is_rerank_failure() => format!("{}: {}", RERANK_FAILURE_PREFIX, err),
            other => format!("Internal server error: {}", other),
        };

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(body)
    }
}
