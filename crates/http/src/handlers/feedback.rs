use axum::{extract::State, Json};
use std::sync::Arc;

use civic_report_core::NewFeedback;

use crate::api_error::ApiError;
use crate::extract::{FeedbackFields, FormOrJson};
use crate::response_types::SubmitResponse;
use crate::AppState;

const FEEDBACK_OK: &str = "Feedback submitted successfully!";
const FEEDBACK_FAILED: &str = "Error submitting feedback.";

/// `POST /api/feedback`
pub async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    FormOrJson(fields): FormOrJson<FeedbackFields>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let rating = match fields.rating {
        Some(value) => value.parse()?,
        None => None,
    };
    let feedback = NewFeedback::new(rating, fields.comments)?;

    let id = state
        .service
        .submit_feedback(feedback)
        .await
        .map_err(|e| ApiError::internal(FEEDBACK_FAILED, e))?;
    Ok(Json(SubmitResponse::created(FEEDBACK_OK, id)))
}
