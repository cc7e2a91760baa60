mod repository;

pub use repository::{RepositoryError, Result};

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use thiserror::Error;

use crate::constants::{
    CODE_INTERNAL_ERROR, CODE_INVALID_FIELD_NAME, CODE_INVALID_FIELD_VALUE,
    CODE_STORAGE_UNAVAILABLE,
    ERR_STORAGE_UNAVAILABLE, ERR_VALIDATION_FAILED,
};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad Request [{code}]: {message}")]
    BadRequest { code: String, message: String },
    #[error("Not Found [{code}]: {message}")]
    NotFound { code: String, message: String },
    #[error("Service Unavailable [{code}]: {message}")]
    ServiceUnavailable { code: String, message: String },
    #[error("Internal Server Error [{code}]: {message}")]
    InternalServerError { code: String, message: String },
    #[error("Validation Error [{code}]: {errors:?}")]
    ValidationError { code: String, errors: Vec<String> },
}

impl ApiError {
    pub fn bad_request(code: &str, message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(code: &str, message: impl Into<String>) -> Self {
        ApiError::NotFound {
            code: code.to_string(),
            message: message.into(),
        }
    }

    fn body(&self) -> ErrorResponse {
        let (code, message, errors) = match self {
            ApiError::BadRequest { code, message }
            | ApiError::NotFound { code, message }
            | ApiError::ServiceUnavailable { code, message }
            | ApiError::InternalServerError { code, message } => {
                (code.clone(), message.clone(), None)
            }
            ApiError::ValidationError { code, errors } => (
                code.clone(),
                ERR_VALIDATION_FAILED.to_string(),
                Some(errors.clone()),
            ),
        };

        ErrorResponse {
            success: false,
            code,
            message,
            errors,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::ValidationError { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        if err.is_unavailable() {
            error!("Storage unavailable: {}", err);
            return ApiError::ServiceUnavailable {
                code: CODE_STORAGE_UNAVAILABLE.to_string(),
                message: ERR_STORAGE_UNAVAILABLE.to_string(),
            };
        }

        match err {
            RepositoryError::InvalidFieldName { .. } => {
                ApiError::bad_request(CODE_INVALID_FIELD_NAME, err.to_string())
            }
            RepositoryError::InvalidFieldValue { .. } => {
                ApiError::bad_request(CODE_INVALID_FIELD_VALUE, err.to_string())
            }
            other => {
                error!("Repository failure: {}", other);
                ApiError::InternalServerError {
                    code: CODE_INTERNAL_ERROR.to_string(),
                    message: other.to_string(),
                }
            }
        }
    }
}
