// src/form/mod.rs
//! Form state for a single CV analysis: document, job description, result
//! and request status, plus the transitions between them.

pub mod document;

pub use document::{CandidateDocument, PDF_MIME};

use tracing::{info, warn};

use crate::core::AnalysisTransport;
use crate::types::AnalysisResult;

pub const INVALID_FILE_MESSAGE: &str = "Please upload a PDF file";
pub const MISSING_INPUT_MESSAGE: &str = "Please upload a CV and provide a job description";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    InFlight,
    Error(String),
}

/// What happened when `submit` was called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Preconditions unmet; no request was sent.
    Rejected,
    Completed,
    Failed,
}

#[derive(Debug, Default)]
pub struct AnalysisForm {
    document: Option<CandidateDocument>,
    job_description: String,
    result: Option<AnalysisResult>,
    status: RequestStatus,
}

impl AnalysisForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> Option<&CandidateDocument> {
        self.document.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.status == RequestStatus::InFlight
    }

    /// Handle a file selection. `None` means the picker returned nothing.
    pub fn select_document(&mut self, selection: Option<CandidateDocument>) {
        match selection {
            Some(document) if document.is_pdf() => {
                info!("Selected document: {}", document.file_name);
                self.document = Some(document);
                if self.error().is_some() {
                    self.status = RequestStatus::Idle;
                }
            }
            other => {
                if let Some(rejected) = other {
                    warn!(
                        "Rejected {} with declared type {}",
                        rejected.file_name, rejected.content_type
                    );
                }
                self.document = None;
                self.status = RequestStatus::Error(INVALID_FILE_MESSAGE.to_string());
            }
        }
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    /// Document present and description non-blank.
    pub fn has_required_input(&self) -> bool {
        self.document.is_some() && !self.job_description.trim().is_empty()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_in_flight() && self.has_required_input()
    }

    /// Submit the way the submit control does: a selection error still on
    /// screen is kept instead of being replaced by the missing-input message.
    pub async fn submit_if_ready<T>(&mut self, transport: &T) -> SubmitOutcome
    where
        T: AnalysisTransport + ?Sized,
    {
        if !self.can_submit() && self.error().is_some() {
            return SubmitOutcome::Rejected;
        }
        self.submit(transport).await
    }

    /// Run one submission to completion. The form is borrowed mutably for
    /// the whole call, so at most one request is ever outstanding.
    pub async fn submit<T>(&mut self, transport: &T) -> SubmitOutcome
    where
        T: AnalysisTransport + ?Sized,
    {
        let document = match (&self.document, self.job_description.trim().is_empty()) {
            (Some(document), false) => document,
            _ => {
                self.status = RequestStatus::Error(MISSING_INPUT_MESSAGE.to_string());
                return SubmitOutcome::Rejected;
            }
        };

        self.status = RequestStatus::InFlight;

        match transport.submit(document, &self.job_description).await {
            Ok(result) => {
                info!(
                    "Analysis received: {}% (fallback: {})",
                    result.match_percentage, result.is_fallback
                );
                self.result = Some(result);
                self.status = RequestStatus::Idle;
                SubmitOutcome::Completed
            }
            Err(e) => {
                warn!("Analysis failed: {}", e);
                self.status = RequestStatus::Error(e.to_string());
                SubmitOutcome::Failed
            }
        }
    }
}
