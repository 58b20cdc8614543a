// src/web/handlers/analyze_handlers.rs
//! CV upload and analysis handler

use rocket::form::error::ErrorKind;
use rocket::form::Form;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, warn, Instrument};

use crate::analysis::extract_text;
use crate::types::AnalysisResult;
use crate::web::types::{bad_request, internal_error, AnalyzeForm, ApiError, ServerState};

pub async fn analyze_cv_handler(
    upload: Form<AnalyzeForm<'_>>,
    state: &State<ServerState>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let span = tracing::info_span!("cv_analysis", request_id = %uuid::Uuid::new_v4());

    async move {
        let AnalyzeForm {
            cv_file,
            job_description,
        } = upload.into_inner();

        let cv_file = match cv_file {
            Ok(file) => file,
            Err(errors) => {
                if errors.iter().any(|e| matches!(e.kind, ErrorKind::Missing)) {
                    return Err(bad_request("No CV file uploaded"));
                }
                if errors
                    .iter()
                    .any(|e| matches!(e.kind, ErrorKind::InvalidLength { .. }))
                {
                    warn!("Rejected oversized CV upload: {}", errors);
                    return Err(bad_request(format!(
                        "File size exceeds {}MB limit",
                        state.max_upload_bytes / (1024 * 1024)
                    )));
                }
                warn!("Rejected CV upload: {}", errors);
                return Err(bad_request(format!("Invalid CV upload: {}", errors)));
            }
        };

        // A plain text part carries no filename and is not an upload.
        let file_name = match cv_file.raw_name() {
            Some(name) => name.dangerous_unsafe_unsanitized_raw().as_str().to_string(),
            None => return Err(bad_request("No CV file uploaded")),
        };

        if file_name.is_empty() {
            return Err(bad_request("No file selected"));
        }

        let job_description = job_description.unwrap_or_default();
        if job_description.trim().is_empty() {
            return Err(bad_request("Job description is required"));
        }

        info!(
            "Analyzing {} ({} bytes) against {} chars of job description",
            file_name,
            cv_file.len(),
            job_description.len()
        );

        let bytes = read_upload(&cv_file).await.map_err(|e| {
            error!("Failed to read uploaded file: {:#}", e);
            internal_error(format!("Analysis failed: {}", e))
        })?;

        let cv_text = extract_text(bytes).await.map_err(|e| {
            warn!("{}", e);
            bad_request(e.to_string())
        })?;

        let analysis = state.analyzer.analyze(&cv_text, &job_description).await;

        info!(
            "Analysis complete: {}% (fallback: {})",
            analysis.match_percentage, analysis.is_fallback
        );

        Ok(Json(analysis))
    }
    .instrument(span)
    .await
}

async fn read_upload(cv_file: &rocket::fs::TempFile<'_>) -> anyhow::Result<Vec<u8>> {
    use anyhow::Context;
    use tokio::io::AsyncReadExt;

    let mut bytes = Vec::with_capacity(cv_file.len() as usize);
    let reader = cv_file
        .open()
        .await
        .context("Failed to open uploaded file")?;
    tokio::pin!(reader);

    reader
        .read_to_end(&mut bytes)
        .await
        .context("Failed to read uploaded file")?;

    Ok(bytes)
}
