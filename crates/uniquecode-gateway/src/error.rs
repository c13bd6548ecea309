use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use uniquecode_core::UniqueCodeError;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Issue(#[from] UniqueCodeError),
    /// The body could not be read as a create request.
    #[error("malformed request: {}", .0.body_text())]
    Rejected(#[from] JsonRejection),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Issue(UniqueCodeError::InvalidLength(_))
            | AppError::Issue(UniqueCodeError::InvalidCode(_)) => StatusCode::BAD_REQUEST,
            AppError::Issue(UniqueCodeError::Encoding(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Issue(UniqueCodeError::Storage(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Rejected(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
