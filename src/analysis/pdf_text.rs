// src/analysis/pdf_text.rs
use tracing::debug;

#[derive(Debug, thiserror::Error)]
#[error("Error extracting text from PDF: {0}")]
pub struct ExtractionError(pub String);

/// Extract the text layer of a PDF held in memory.
///
/// Parsing runs on the blocking pool; a panic inside the parser is reported
/// as an extraction error instead of taking the worker down.
pub async fn extract_text(bytes: Vec<u8>) -> Result<String, ExtractionError> {
    let size = bytes.len();

    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| ExtractionError(format!("parser aborted: {}", e)))?
        .map_err(|e| ExtractionError(e.to_string()))?;

    debug!("Extracted {} chars from {} byte PDF", text.len(), size);
    Ok(text)
}
