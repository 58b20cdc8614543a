// src/types/analysis.rs
use serde::{Deserialize, Serialize};

/// Result of matching a CV against a job description.
///
/// Shared by the analysis server (which produces it) and the client form
/// (which stores and renders it). A new submission replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_percentage: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub is_fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

impl AnalysisResult {
    /// Numeric score, read the way a lenient integer parse would:
    /// optional leading whitespace and sign, then leading digits.
    pub fn score(&self) -> Option<i64> {
        parse_leading_int(&self.match_percentage)
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score())
    }

    pub fn mark_fallback(mut self, reason: impl Into<String>) -> Self {
        self.is_fallback = true;
        self.fallback_reason = Some(reason.into());
        self
    }
}

/// Colour band of the match badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub const HIGH_THRESHOLD: i64 = 80;
    pub const MEDIUM_THRESHOLD: i64 = 60;

    pub fn from_score(score: Option<i64>) -> Self {
        match score {
            Some(n) if n >= Self::HIGH_THRESHOLD => ScoreTier::High,
            Some(n) if n >= Self::MEDIUM_THRESHOLD => ScoreTier::Medium,
            _ => ScoreTier::Low,
        }
    }
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let value = digits.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(percentage: &str) -> AnalysisResult {
        AnalysisResult {
            match_percentage: percentage.to_string(),
            strengths: vec![],
            weaknesses: vec![],
            suggestions: vec![],
            is_fallback: false,
            fallback_reason: None,
        }
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(result_with("85").tier(), ScoreTier::High);
        assert_eq!(result_with("80").tier(), ScoreTier::High);
        assert_eq!(result_with("70").tier(), ScoreTier::Medium);
        assert_eq!(result_with("60").tier(), ScoreTier::Medium);
        assert_eq!(result_with("59").tier(), ScoreTier::Low);
        assert_eq!(result_with("40").tier(), ScoreTier::Low);
    }

    #[test]
    fn test_lenient_score_parse() {
        assert_eq!(result_with(" 75%").score(), Some(75));
        assert_eq!(result_with("82.5").score(), Some(82));
        assert_eq!(result_with("n/a").score(), None);
        assert_eq!(result_with("").tier(), ScoreTier::Low);
    }

    #[test]
    fn test_deserialize_without_fallback_fields() {
        let json = r#"{"match_percentage":"72","strengths":["Rust"],"weaknesses":[],"suggestions":["Add metrics"]}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(!result.is_fallback);
        assert_eq!(result.fallback_reason, None);
        assert_eq!(result.strengths, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_mark_fallback() {
        let result = result_with("50").mark_fallback("LLM offline");
        assert!(result.is_fallback);
        assert_eq!(result.fallback_reason.as_deref(), Some("LLM offline"));
    }
}
