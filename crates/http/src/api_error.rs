//! Typed API error for HTTP handlers.
//!
//! Every failure renders as `{"success": false, "message": "..."}`.
//! `Internal` logs the real error server-side and returns a fixed
//! per-endpoint message to the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use civic_report_core::ValidationError;

use crate::upload::UploadError;

#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — missing or blank field, malformed value.
    BadRequest(String),
    /// 413 Payload Too Large — attachment over the size limit.
    PayloadTooLarge(String),
    /// 415 Unsupported Media Type — attachment outside the allow-list.
    UnsupportedMediaType(String),
    /// Body extractor rejection, keeping axum's status code.
    Rejected { status: StatusCode, message: String },
    /// 500 Internal Server Error — details logged, not exposed.
    Internal { message: &'static str, source: anyhow::Error },
}

impl ApiError {
    pub fn internal(message: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Internal { message, source: source.into() }
    }

    /// Wraps any axum extractor rejection.
    pub fn rejected(rejection: impl RejectionText) -> Self {
        Self::Rejected { status: rejection.status(), message: rejection.body_text() }
    }
}

/// Status and text shared by axum's extractor rejections.
pub trait RejectionText {
    fn status(&self) -> StatusCode;
    fn body_text(&self) -> String;
}

macro_rules! rejection_text {
    ($($ty:ty),* $(,)?) => {$(
        impl RejectionText for $ty {
            fn status(&self) -> StatusCode {
                <$ty>::status(self)
            }
            fn body_text(&self) -> String {
                <$ty>::body_text(self)
            }
        }
    )*};
}

rejection_text!(
    axum::extract::rejection::JsonRejection,
    axum::extract::rejection::FormRejection,
    axum::extract::multipart::MultipartRejection,
    axum::extract::multipart::MultipartError,
);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            Self::UnsupportedMediaType(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg),
            Self::Rejected { status, message } => (status, message),
            Self::Internal { message, source } => {
                tracing::error!(error = ?source, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_owned())
            },
        };
        let body = serde_json::json!({"success": false, "message": message});
        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::TooLarge { .. } => Self::PayloadTooLarge(err.to_string()),
            UploadError::UnsupportedType { .. } => Self::UnsupportedMediaType(err.to_string()),
            UploadError::UnexpectedField(_) | UploadError::MultipleFiles => {
                Self::BadRequest(err.to_string())
            },
            UploadError::Multipart(e) => Self::rejected(e),
        }
    }
}
