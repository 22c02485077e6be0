use axum::Json;

use civic_report_core::constants::REMINDER_MESSAGE;

use crate::response_types::ReminderResponse;

pub async fn get_reminder() -> Json<ReminderResponse> {
    Json(ReminderResponse { message: REMINDER_MESSAGE.to_owned() })
}
