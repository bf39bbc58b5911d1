use crate::models::ErrorResponse;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    ValidationError(String),
    BadRequest(String),
    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::ValidationError(_) => HttpResponse::BadRequest().json(ErrorResponse {
                error: "VALIDATION_ERROR".to_string(),
                message: self.to_string(),
            }),
            ApiError::BadRequest(_) => HttpResponse::BadRequest().json(ErrorResponse {
                error: "BAD_REQUEST".to_string(),
                message: self.to_string(),
            }),
            ApiError::InternalError(_) => {
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "INTERNAL_ERROR".to_string(),
                    message: self.to_string(),
                })
            }
        }
    }
}

impl From<fraud_engine::Error> for ApiError {
    fn from(err: fraud_engine::Error) -> Self {
        ApiError::ValidationError(err.to_string())
    }
}
