//! Landing page - embedded HTML with the report and feedback forms.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

/// Embedded HTML for the landing page
pub const INDEX_HTML: &str = include_str!("index.html");

/// Serve the landing page
pub async fn serve_viewer() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(INDEX_HTML))
        .into_response()
}
