//! Response bodies shared across handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Confirmation for append-only writes.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn message(text: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: text.into(),
        }),
    )
}

pub fn ok_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}
