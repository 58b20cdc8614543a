// src/core/service_client.rs
//! HTTP client for the CV analysis API

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::form::CandidateDocument;
use crate::types::response::PartialErrorBody;
use crate::types::{AnalysisResult, HealthResponse};

pub const ANALYZE_ENDPOINT: &str = "/api/analyze";
pub const HEALTH_ENDPOINT: &str = "/api/health";

pub const CV_FILE_FIELD: &str = "cv_file";
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

pub const GENERIC_FAILURE_MESSAGE: &str = "Analysis failed";
pub const CONNECTIVITY_MESSAGE: &str = "Failed to connect to the server. Please try again.";

/// Why a submission did not produce a result. `Display` is the text shown
/// to the user.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("{}", CONNECTIVITY_MESSAGE)]
    Connectivity(#[source] reqwest::Error),
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    InvalidRequest(#[source] reqwest::Error),
    #[error("{}", GENERIC_FAILURE_MESSAGE)]
    InvalidResponse(#[source] serde_json::Error),
}

/// Anything that can carry one analysis request to the service.
#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    async fn submit(
        &self,
        document: &CandidateDocument,
        job_description: &str,
    ) -> Result<AnalysisResult, SubmitError>;
}

pub struct ServiceClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ServiceClient {
    /// No request timeout: a submission runs until it completes or fails.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn build_form(document: &CandidateDocument, job_description: &str) -> Result<Form, SubmitError> {
        let part = Part::bytes(document.bytes.clone())
            .file_name(document.file_name.clone())
            .mime_str(&document.content_type)
            .map_err(SubmitError::InvalidRequest)?;

        Ok(Form::new()
            .part(CV_FILE_FIELD, part)
            .text(JOB_DESCRIPTION_FIELD, job_description.to_string()))
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let url = self.config.endpoint(HEALTH_ENDPOINT);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<HealthResponse>()
                .await
                .context("Failed to parse health response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }
}

#[async_trait]
impl AnalysisTransport for ServiceClient {
    async fn submit(
        &self,
        document: &CandidateDocument,
        job_description: &str,
    ) -> Result<AnalysisResult, SubmitError> {
        let url = self.config.endpoint(ANALYZE_ENDPOINT);
        let form = Self::build_form(document, job_description)?;

        info!(
            "Submitting {} ({} bytes) for analysis: {}",
            document.file_name,
            document.bytes.len(),
            url
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!("Analysis request failed: {}", e);
                SubmitError::Connectivity(e)
            })?;

        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.text().await.map_err(SubmitError::Connectivity)?;

        if status.is_success() {
            serde_json::from_str::<AnalysisResult>(&body).map_err(|e| {
                warn!("Unparseable analysis response: {}", e);
                SubmitError::InvalidResponse(e)
            })
        } else {
            let message = error_message_from_body(&body);
            warn!("Analysis service returned {}: {}", status, message);
            Err(SubmitError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// The `error` field of a JSON error body, or the generic failure text.
pub fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<PartialErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}
