use axum::{extract::State, Json};
use std::sync::Arc;

use civic_report_core::NewIssue;

use crate::api_error::ApiError;
use crate::extract::ReportSubmission;
use crate::response_types::SubmitResponse;
use crate::AppState;

const REPORT_OK: &str = "Issue reported successfully!";
const REPORT_FAILED: &str = "Error reporting issue.";

/// `POST /api/report`: validate, store the attachment, insert, notify.
pub async fn report_issue(
    State(state): State<Arc<AppState>>,
    submission: ReportSubmission,
) -> Result<Json<SubmitResponse>, ApiError> {
    let ReportSubmission { fields, upload } = submission;
    let issue = NewIssue::new(fields.location, fields.description, None)?;

    let image = match upload {
        Some(upload) => {
            let file =
                state.uploads.store(upload).await.map_err(|e| ApiError::internal(REPORT_FAILED, e))?;
            tracing::info!(
                filename = %file.filename,
                content_type = %file.content_type,
                size = file.size,
                "Attachment accepted"
            );
            Some(file.filename)
        },
        None => None,
    };

    match state.service.submit_issue(issue.with_image(image.clone())).await {
        Ok(id) => Ok(Json(SubmitResponse::created(REPORT_OK, id))),
        Err(e) => {
            if let Some(filename) = image {
                state.uploads.discard(&filename).await;
            }
            Err(ApiError::internal(REPORT_FAILED, e))
        },
    }
}
