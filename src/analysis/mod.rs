// src/analysis/mod.rs
//! Server-side CV analysis: model first, keyword heuristics when the model
//! is unreachable or answers with something unusable.

pub mod fallback;
pub mod llm_client;
pub mod pdf_text;
pub mod prompt;
pub mod response_parser;

pub use llm_client::{CompletionError, CompletionProvider, LlmClient};
pub use pdf_text::{extract_text, ExtractionError};

use std::sync::Arc;
use tracing::{info, warn};

use crate::types::AnalysisResult;

pub const UNSTRUCTURED_REASON: &str = "LLM response was not structured properly";

pub struct Analyzer {
    provider: Arc<dyn CompletionProvider>,
}

impl Analyzer {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Always returns a result; `is_fallback` tells whether the model was used.
    pub async fn analyze(&self, cv_text: &str, job_description: &str) -> AnalysisResult {
        let prompt = prompt::create_analysis_prompt(cv_text, job_description);

        match self.provider.complete(&prompt).await {
            Ok(generated) if response_parser::looks_structured(&generated) => {
                info!("Model analysis received ({} chars)", generated.len());
                let parsed = response_parser::parse_model_output(&generated);

                let match_percentage = parsed.match_percentage.unwrap_or_else(|| {
                    fallback::keyword_score(cv_text, job_description).to_string()
                });

                AnalysisResult {
                    match_percentage,
                    strengths: parsed.strengths,
                    weaknesses: parsed.weaknesses,
                    suggestions: parsed.suggestions,
                    is_fallback: false,
                    fallback_reason: None,
                }
            }
            Ok(_) => {
                warn!("Model output had no analysis keywords, using keyword analysis");
                fallback::keyword_analysis(cv_text, job_description)
                    .mark_fallback(UNSTRUCTURED_REASON)
            }
            Err(e) => {
                warn!("LLM analysis error: {}", e);
                fallback::keyword_analysis(cv_text, job_description)
                    .mark_fallback(format!("Connection error: {}", e))
            }
        }
    }
}
