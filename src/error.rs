//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ErrorBody;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Storage { .. } | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::Validation(rejection.body_text())
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Attaches the failing operation's name to a database error.
pub trait StorageContext<T> {
    fn context(self, context: &'static str) -> Result<T, AppError>;
}

impl<T> StorageContext<T> for Result<T, sqlx::Error> {
    fn context(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|source| AppError::Storage { context, source })
    }
}

impl<T> StorageContext<T> for Result<T, AppError> {
    fn context(self, context: &'static str) -> Result<T, AppError> {
        self.map_err(|e| match e {
            AppError::Db(source) => AppError::Storage { context, source },
            other => other,
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_maps_to_bad_request() {
        let err = AppError::Conflict("Pet already adopted".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Pet already adopted");
    }

    #[test]
    fn storage_context_prefixes_message() {
        let res: Result<(), sqlx::Error> = Err(sqlx::Error::RowNotFound);
        let err = res.context("Reset failed").unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("Reset failed: "));
    }

    #[test]
    fn storage_context_keeps_client_errors() {
        let res: Result<(), AppError> = Err(AppError::NotFound("Pet not found".into()));
        let err = res.context("Adoption failed").unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Pet not found");
    }
}
