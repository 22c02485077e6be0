//! Attachment policy and on-disk storage for report uploads.
//!
//! A file is accepted only when its extension and its declared MIME type
//! both match the same allow-list entry. Accepted files get a generated name
//! (`<unix-millis>-<uuid>.<ext>`), so concurrent uploads never collide.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use axum::extract::multipart::{Field, MultipartError};
use civic_report_core::constants::MAX_UPLOAD_BYTES;
use civic_report_core::StoredFile;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

/// Extension → the only MIME type accepted with it.
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("pdf", "application/pdf"),
    ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    ("xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("file type not allowed: {filename} ({content_type})")]
    UnsupportedType { filename: String, content_type: String },
    #[error("file exceeds the {limit} byte upload limit")]
    TooLarge { limit: usize },
    #[error("unexpected file field: {0}")]
    UnexpectedField(String),
    #[error("only one attachment is allowed per report")]
    MultipleFiles,
    #[error(transparent)]
    Multipart(#[from] MultipartError),
}

/// Checks a filename and declared content type against the allow-list.
///
/// Returns the normalized (lowercase) extension on success.
pub fn check_type(filename: &str, content_type: Option<&str>) -> Result<&'static str, UploadError> {
    let declared = content_type.unwrap_or_default();
    let mime = declared.split(';').next().unwrap_or_default().trim();
    let extension = Path::new(filename)
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    ALLOWED_TYPES
        .iter()
        .find(|(ext, allowed)| *ext == extension && allowed.eq_ignore_ascii_case(mime))
        .map(|(ext, _)| *ext)
        .ok_or_else(|| UploadError::UnsupportedType {
            filename: filename.to_owned(),
            content_type: declared.to_owned(),
        })
}

/// Generates a unique stored name for an accepted file.
pub fn generate_filename(extension: &str) -> String {
    format!(
        "{}-{}.{extension}",
        chrono::Utc::now().timestamp_millis(),
        uuid::Uuid::new_v4().simple()
    )
}

/// An accepted attachment held in memory until the report is validated.
#[derive(Debug)]
pub struct PendingUpload {
    extension: &'static str,
    content_type: String,
    data: Vec<u8>,
}

impl PendingUpload {
    /// Reads one multipart file field, enforcing type and size limits.
    ///
    /// An empty part (no file chosen in a browser form) yields `None`.
    pub async fn read(mut field: Field<'_>) -> Result<Option<Self>, UploadError> {
        let filename = field.file_name().unwrap_or_default().to_owned();
        if filename.is_empty() {
            while field.chunk().await?.is_some() {}
            return Ok(None);
        }
        let content_type = field.content_type().map(ToOwned::to_owned);
        let extension = check_type(&filename, content_type.as_deref())?;

        // Oversized parts are drained (bounded by the request body limit) so the
        // client receives the 413 instead of a reset connection.
        let mut data = Vec::new();
        let mut too_large = false;
        while let Some(chunk) = field.chunk().await? {
            if too_large || data.len() + chunk.len() > MAX_UPLOAD_BYTES {
                too_large = true;
                continue;
            }
            data.extend_from_slice(&chunk);
        }
        if too_large {
            return Err(UploadError::TooLarge { limit: MAX_UPLOAD_BYTES });
        }
        if data.is_empty() {
            return Ok(None);
        }

        Ok(Some(Self { extension, content_type: content_type.unwrap_or_default(), data }))
    }
}

/// Directory holding accepted attachments.
#[derive(Debug, Clone)]
pub struct UploadDir {
    root: PathBuf,
}

impl UploadDir {
    /// Creates the directory if needed.
    pub async fn prepare(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes the upload under a freshly generated name. Never overwrites.
    pub async fn store(&self, upload: PendingUpload) -> std::io::Result<StoredFile> {
        let filename = generate_filename(upload.extension);
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.root.join(&filename))
            .await?;
        file.write_all(&upload.data).await?;
        file.flush().await?;
        Ok(StoredFile { filename, content_type: upload.content_type, size: upload.data.len() })
    }

    /// Removes a stored file whose report could not be saved.
    pub async fn discard(&self, filename: &str) {
        if let Err(e) = tokio::fs::remove_file(self.root.join(filename)).await {
            tracing::warn!(error = %e, filename, "Failed to remove orphaned upload");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_with_png_mime_is_accepted() {
        assert_eq!(check_type("pothole.PNG", Some("image/png")).unwrap(), "png");
    }

    #[test]
    fn jpeg_and_jpg_share_mime() {
        assert_eq!(check_type("a.jpeg", Some("image/jpeg")).unwrap(), "jpeg");
        assert_eq!(check_type("a.jpg", Some("image/jpeg; charset=binary")).unwrap(), "jpg");
    }

    #[test]
    fn office_documents_are_accepted() {
        assert!(check_type(
            "report.docx",
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        )
        .is_ok());
        assert!(check_type(
            "sheet.xlsx",
            Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
        )
        .is_ok());
    }

    #[test]
    fn exe_is_rejected() {
        let err = check_type("setup.exe", Some("application/octet-stream")).unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedType { .. }));
    }

    #[test]
    fn extension_and_mime_must_agree() {
        assert!(check_type("photo.png", Some("application/pdf")).is_err());
        assert!(check_type("photo.png", None).is_err());
        assert!(check_type("no_extension", Some("image/png")).is_err());
    }

    #[test]
    fn forged_mime_with_allowed_extension_passes() {
        // No content sniffing: the declared type is trusted.
        assert!(check_type("actually-a-binary.gif", Some("image/gif")).is_ok());
    }

    #[test]
    fn generated_names_are_unique_and_keep_extension() {
        let a = generate_filename("png");
        let b = generate_filename("png");
        assert_ne!(a, b);
        assert!(a.ends_with(".png"));
    }

    #[tokio::test]
    async fn store_writes_file_under_root() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let uploads = UploadDir::prepare(temp_dir.path().join("uploads")).await.unwrap();
        let pending =
            PendingUpload { extension: "pdf", content_type: "application/pdf".to_owned(), data: vec![1, 2, 3] };

        let stored = uploads.store(pending).await.unwrap();
        assert!(stored.filename.ends_with(".pdf"));
        assert_eq!(stored.size, 3);
        let written = tokio::fs::read(uploads.root().join(&stored.filename)).await.unwrap();
        assert_eq!(written, vec![1, 2, 3]);

        uploads.discard(&stored.filename).await;
        assert!(!uploads.root().join(&stored.filename).exists());
    }
}
