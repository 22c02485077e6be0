//! Response types (Serialize)

use serde::{Deserialize, Serialize};

/// Body of a successful submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub id: i64,
}

impl SubmitResponse {
    #[must_use]
    pub fn created(message: &str, id: i64) -> Self {
        Self { success: true, message: message.to_owned(), id }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReminderResponse {
    pub message: String,
}
