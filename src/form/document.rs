// src/form/document.rs
use anyhow::{Context, Result};
use std::path::Path;

pub const PDF_MIME: &str = "application/pdf";

/// A user-selected file, with the type it declares for itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDocument {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl CandidateDocument {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a file from disk. The declared type is guessed from the
    /// extension, the same way a browser file picker reports it.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();

        let content_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();

        Ok(Self::new(file_name, content_type, bytes))
    }

    pub fn is_pdf(&self) -> bool {
        self.content_type == PDF_MIME
    }
}
