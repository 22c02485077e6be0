//! Body extractors accepting multipart, urlencoded and JSON submissions.
//!
//! The body format is chosen from the `Content-Type` header so one route can
//! serve both the HTML form and JSON clients.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use civic_report_core::constants::UPLOAD_FIELD;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::api_error::ApiError;
use crate::upload::{PendingUpload, UploadError};

fn content_type(req: &Request) -> String {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// A JSON or urlencoded form body.
#[derive(Debug)]
pub struct FormOrJson<T>(pub T);

impl<T, S> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if content_type(&req).starts_with("application/x-www-form-urlencoded") {
            let Form(body) = Form::<T>::from_request(req, state).await.map_err(ApiError::rejected)?;
            Ok(Self(body))
        } else {
            let Json(body) = Json::<T>::from_request(req, state).await.map_err(ApiError::rejected)?;
            Ok(Self(body))
        }
    }
}

/// Text fields of a report. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ReportFields {
    pub location: Option<String>,
    pub description: Option<String>,
}

/// A report body plus its optional, already policy-checked attachment.
#[derive(Debug)]
pub struct ReportSubmission {
    pub fields: ReportFields,
    pub upload: Option<PendingUpload>,
}

impl<S> FromRequest<S> for ReportSubmission
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !content_type(&req).starts_with("multipart/form-data") {
            let FormOrJson(fields) = FormOrJson::<ReportFields>::from_request(req, state).await?;
            return Ok(Self { fields, upload: None });
        }

        let mut multipart = Multipart::from_request(req, state).await.map_err(ApiError::rejected)?;
        let mut fields = ReportFields::default();
        let mut upload = None;

        while let Some(field) = multipart.next_field().await.map_err(ApiError::rejected)? {
            let name = field.name().unwrap_or_default().to_owned();
            if field.file_name().is_some() {
                if name != UPLOAD_FIELD {
                    return Err(UploadError::UnexpectedField(name).into());
                }
                if upload.is_some() {
                    return Err(UploadError::MultipleFiles.into());
                }
                upload = PendingUpload::read(field).await?;
                continue;
            }
            match name.as_str() {
                "location" => {
                    fields.location = Some(field.text().await.map_err(ApiError::rejected)?);
                },
                "description" => {
                    fields.description = Some(field.text().await.map_err(ApiError::rejected)?);
                },
                _ => {},
            }
        }

        Ok(Self { fields, upload })
    }
}

/// Rating as sent by JSON clients (number) or forms (numeric string).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RatingValue {
    Number(i64),
    Text(String),
}

impl RatingValue {
    /// `Ok(None)` for a blank string; an error for non-numeric text.
    pub fn parse(self) -> Result<Option<i64>, ApiError> {
        match self {
            Self::Number(n) => Ok(Some(n)),
            Self::Text(s) if s.trim().is_empty() => Ok(None),
            Self::Text(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| ApiError::BadRequest(format!("rating must be an integer, got '{s}'"))),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FeedbackFields {
    pub rating: Option<RatingValue>,
    pub comments: Option<String>,
}
