//! Submission types accepted by the reporting API.

use crate::ValidationError;

/// A validated issue report, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct NewIssue {
    /// Free-form place description
    pub location: String,
    /// What is wrong at that place
    pub description: String,
    /// Stored filename of the attachment, if one was uploaded
    pub image: Option<String>,
}

impl NewIssue {
    /// Builds an issue from raw request fields.
    ///
    /// `location` and `description` are trimmed; a missing or blank value is rejected.
    pub fn new(
        location: Option<String>,
        description: Option<String>,
        image: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            location: required_text("location", location)?,
            description: required_text("description", description)?,
            image: image.filter(|name| !name.is_empty()),
        })
    }

    /// Attaches the stored filename of an upload accepted after validation.
    #[must_use]
    pub fn with_image(self, image: Option<String>) -> Self {
        Self { image: image.filter(|name| !name.is_empty()), ..self }
    }
}

/// A validated feedback submission.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct NewFeedback {
    pub rating: i64,
    pub comments: Option<String>,
}

impl NewFeedback {
    /// Builds feedback from raw request fields. Blank comments become `None`.
    pub fn new(rating: Option<i64>, comments: Option<String>) -> Result<Self, ValidationError> {
        let rating = rating.ok_or(ValidationError::MissingField("rating"))?;
        let comments = comments.map(|c| c.trim().to_owned()).filter(|c| !c.is_empty());
        Ok(Self { rating, comments })
    }
}

/// An attachment accepted by the upload policy and written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Generated name under the uploads directory
    pub filename: String,
    /// Declared MIME type of the upload
    pub content_type: String,
    /// Size in bytes
    pub size: usize,
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_owned())
}
