// src/render/mod.rs
//! Presentation: a pure mapping from form state to a view model.

pub mod terminal;

use crate::form::AnalysisForm;
use crate::types::{AnalysisResult, ScoreTier};

pub const FALLBACK_TITLE: &str = "AI Analysis Unavailable";
pub const FALLBACK_NOTICE: &str =
    "The AI analysis service is currently unavailable. This is a basic keyword-based analysis.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub upload: UploadView,
    pub job_description: String,
    pub error_banner: Option<String>,
    pub submit: SubmitButtonView,
    pub results: Option<ResultsView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadView {
    pub title: String,
    pub subtitle: &'static str,
    pub has_file: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonView {
    pub label: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub score: ScoreBadge,
    pub fallback: Option<FallbackBanner>,
    pub sections: Vec<ListSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBadge {
    pub text: String,
    pub tier: ScoreTier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackBanner {
    pub title: &'static str,
    pub notice: &'static str,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Strengths,
    Weaknesses,
    Suggestions,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Strengths => "Strengths",
            SectionKind::Weaknesses => "Areas for Improvement",
            SectionKind::Suggestions => "Suggestions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSection {
    pub kind: SectionKind,
    pub items: Vec<String>,
}

pub fn render(form: &AnalysisForm) -> FormView {
    let upload = match form.document() {
        Some(document) => UploadView {
            title: document.file_name.clone(),
            subtitle: "File selected",
            has_file: true,
        },
        None => UploadView {
            title: "Click to upload PDF".to_string(),
            subtitle: "Drag and drop or click to browse",
            has_file: false,
        },
    };

    let submit = SubmitButtonView {
        label: if form.is_in_flight() {
            "Analyzing..."
        } else {
            "Analyze CV"
        },
        enabled: form.can_submit(),
    };

    FormView {
        upload,
        job_description: form.job_description().to_string(),
        error_banner: form.error().map(str::to_string),
        submit,
        results: form.result().map(render_result),
    }
}

pub fn render_result(result: &AnalysisResult) -> ResultsView {
    let fallback = result.is_fallback.then(|| FallbackBanner {
        title: FALLBACK_TITLE,
        notice: FALLBACK_NOTICE,
        reason: result.fallback_reason.clone().filter(|r| !r.is_empty()),
    });

    ResultsView {
        score: ScoreBadge {
            text: format!("{}%", result.match_percentage),
            tier: result.tier(),
        },
        fallback,
        sections: vec![
            ListSection {
                kind: SectionKind::Strengths,
                items: result.strengths.clone(),
            },
            ListSection {
                kind: SectionKind::Weaknesses,
                items: result.weaknesses.clone(),
            },
            ListSection {
                kind: SectionKind::Suggestions,
                items: result.suggestions.clone(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{CandidateDocument, PDF_MIME};

    fn analysis(pct: &str) -> AnalysisResult {
        AnalysisResult {
            match_percentage: pct.to_string(),
            strengths: vec!["Technical background".to_string()],
            weaknesses: vec!["Could use more specific examples".to_string()],
            suggestions: vec!["Add project examples".to_string()],
            is_fallback: false,
            fallback_reason: None,
        }
    }

    #[test]
    fn test_empty_form_view() {
        let view = render(&AnalysisForm::new());
        assert!(!view.upload.has_file);
        assert_eq!(view.upload.title, "Click to upload PDF");
        assert_eq!(view.submit.label, "Analyze CV");
        assert!(!view.submit.enabled);
        assert!(view.error_banner.is_none());
        assert!(view.results.is_none());
    }

    #[test]
    fn test_selected_file_shows_name_and_enables_submit() {
        let mut form = AnalysisForm::new();
        form.select_document(Some(CandidateDocument::new("jane_doe.pdf", PDF_MIME, vec![1])));
        form.set_job_description("Platform engineer");

        let view = render(&form);
        assert_eq!(view.upload.title, "jane_doe.pdf");
        assert_eq!(view.upload.subtitle, "File selected");
        assert!(view.submit.enabled);
    }

    #[test]
    fn test_error_banner_present() {
        let mut form = AnalysisForm::new();
        form.select_document(None);
        let view = render(&form);
        assert_eq!(view.error_banner.as_deref(), Some("Please upload a PDF file"));
    }

    #[test]
    fn test_score_badge_tiers() {
        assert_eq!(render_result(&analysis("85")).score.tier, ScoreTier::High);
        assert_eq!(render_result(&analysis("70")).score.tier, ScoreTier::Medium);
        assert_eq!(render_result(&analysis("40")).score.tier, ScoreTier::Low);
        assert_eq!(render_result(&analysis("85")).score.text, "85%");
    }

    #[test]
    fn test_sections_in_order() {
        let view = render_result(&analysis("55"));
        let titles: Vec<&str> = view.sections.iter().map(|s| s.kind.title()).collect();
        assert_eq!(titles, vec!["Strengths", "Areas for Improvement", "Suggestions"]);
        assert_eq!(view.sections[2].items, vec!["Add project examples".to_string()]);
    }

    #[test]
    fn test_fallback_banner_quotes_reason_verbatim() {
        let mut result = analysis("62");
        result.is_fallback = true;
        result.fallback_reason = Some("Connection error: 503 Service Unavailable".to_string());

        let banner = render_result(&result).fallback.unwrap();
        assert_eq!(banner.title, FALLBACK_TITLE);
        assert_eq!(
            banner.reason.as_deref(),
            Some("Connection error: 503 Service Unavailable")
        );
    }

    #[test]
    fn test_no_banner_without_fallback_flag() {
        let mut result = analysis("62");
        result.fallback_reason = Some("ignored".to_string());
        assert!(render_result(&result).fallback.is_none());
    }
}
