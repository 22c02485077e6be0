//! HTTP API server for civic-report.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod extract;
mod handlers;
mod response_types;
pub mod upload;
mod viewer;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use civic_report_core::constants::MAX_UPLOAD_BYTES;
use civic_report_service::ReportService;

pub use response_types::{ReminderResponse, SubmitResponse};
pub use upload::UploadDir;

/// Room for multipart boundaries and the text fields next to a maximum-size file.
const MAX_REQUEST_BYTES: usize = MAX_UPLOAD_BYTES + 1024 * 1024;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Submission workflow (store + notifier)
    pub service: Arc<ReportService>,
    /// Where accepted attachments are written
    pub uploads: UploadDir,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(viewer::serve_viewer))
        .route("/health", get(health))
        .route("/api/report", post(handlers::report::report_issue))
        .route("/api/feedback", post(handlers::feedback::submit_feedback))
        .route("/api/reminder", get(handlers::reminder::get_reminder))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
