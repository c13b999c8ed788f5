use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::submission::ValidationError;
use crate::usecase::CreateFormEntryError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    UnsupportedMediaType(String),
    Validation(ValidationError),
    Database(sqlx::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not Found: {msg}"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::UnsupportedMediaType(msg) => write!(f, "Unsupported Media Type: {msg}"),
            AppError::Validation(err) => write!(f, "{err}"),
            AppError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::UnsupportedMediaType(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg),
            AppError::Validation(err) => {
                tracing::debug!("Rejected submission: {err}");
                let body = json!({
                    "error": "Validation failed",
                    "issues": err.issues,
                });
                return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<CreateFormEntryError> for AppError {
    fn from(err: CreateFormEntryError) -> Self {
        match err {
            CreateFormEntryError::CompanyNotFound(_) => {
                AppError::NotFound("Company not found".to_string())
            }
            CreateFormEntryError::FormNotFound(_) => {
                AppError::NotFound("Form not found".to_string())
            }
            CreateFormEntryError::UserNotFound(_) => {
                AppError::NotFound("User not found".to_string())
            }
            e @ (CreateFormEntryError::FormNotInCompany { .. }
            | CreateFormEntryError::UserNotInCompany { .. }) => AppError::BadRequest(e.to_string()),
            CreateFormEntryError::Repository(e) => AppError::Database(e),
        }
    }
}
