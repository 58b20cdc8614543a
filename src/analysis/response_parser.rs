// src/analysis/response_parser.rs
//! Pull a match score and the three lists out of free-form model output.

use regex::Regex;
use std::sync::OnceLock;

use crate::utils::{capitalize, split_list_items};

pub const MAX_ITEMS: usize = 3;

/// Fields recovered from model text. The percentage stays `None` when the
/// text carries no recognizable score.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAnalysis {
    pub match_percentage: Option<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

struct Patterns {
    percentage: Vec<Regex>,
    strengths: Regex,
    weaknesses: Regex,
    suggestions: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let compile = |p: &str| Regex::new(p).expect("static regex");
        Patterns {
            percentage: [
                r"(?is)match\s*[:\-]?\s*(\d{1,3})%?",
                r"(?is)(\d{1,3})%\s*match",
                r"(?is)matches?\s*(\d{1,3})%",
                r"(?is)profile\s*match[:\-]?\s*(\d{1,3})%?",
            ]
            .into_iter()
            .map(compile)
            .collect(),
            strengths: compile(r"(?is)strengths?\s*[:\-]?\s*(.*?)(?:weakness|suggestion|$)"),
            weaknesses: compile(r"(?is)weaknesses?\s*[:\-]?\s*(.*?)(?:suggestion|$)"),
            suggestions: compile(r"(?is)suggestions?\s*[:\-]?\s*(.*)"),
        }
    })
}

fn capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

fn list_from(pattern: &Regex, text: &str, preserve_case: bool) -> Vec<String> {
    capture(pattern, text)
        .map(split_list_items)
        .unwrap_or_default()
        .into_iter()
        .map(|item| if preserve_case { item } else { capitalize(&item) })
        .take(MAX_ITEMS)
        .collect()
}

pub fn parse_model_output(text: &str) -> ParsedAnalysis {
    let patterns = patterns();

    let match_percentage = patterns
        .percentage
        .iter()
        .find_map(|pattern| capture(pattern, text))
        .map(str::to_string);

    ParsedAnalysis {
        match_percentage,
        strengths: list_from(&patterns.strengths, text, false),
        weaknesses: list_from(&patterns.weaknesses, text, false),
        suggestions: list_from(&patterns.suggestions, text, true),
    }
}

/// Whether model output looks like an analysis at all.
pub fn looks_structured(text: &str) -> bool {
    let lower = text.to_lowercase();
    ["match", "strength", "weakness"]
        .iter()
        .any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_structured_prose() {
        let text = "
    The candidate has relevant experience and skills. Match: 85%.
    Strengths: Technical background, relevant experience, good communication skills.
    Weaknesses: Could use more specific examples, limited project management experience.
    Suggestions: Add project examples, include certifications, highlight leadership roles.
    ";
        let parsed = parse_model_output(text);
        assert_eq!(parsed.match_percentage.as_deref(), Some("85"));
        assert!(parsed.strengths.contains(&"Technical background".to_string()));
        assert!(parsed.strengths.contains(&"Relevant experience".to_string()));
        assert!(parsed
            .weaknesses
            .contains(&"Could use more specific examples".to_string()));
        assert!(parsed.suggestions.contains(&"Add project examples".to_string()));
    }

    #[test]
    fn test_line_per_field() {
        let text = "
    Match: 70%
    Strengths: Python programming, machine learning, data analysis
    Weaknesses: No cloud experience, limited team leadership
    Suggestions: Learn AWS, take leadership courses, add more projects
    ";
        let parsed = parse_model_output(text);
        assert_eq!(parsed.match_percentage.as_deref(), Some("70"));
        assert!(parsed.strengths.contains(&"Python programming".to_string()));
        assert!(parsed.weaknesses.contains(&"No cloud experience".to_string()));
        assert!(parsed.suggestions.contains(&"Learn AWS".to_string()));
    }

    #[test]
    fn test_semicolons_and_matches_phrase() {
        let text = "
    The candidate matches 60%.
    Strengths: Technical skills; problem solving; analytical thinking
    Weaknesses: Limited experience; communication skills need improvement
    Suggestions: Gain more experience; improve communication; add certifications
    ";
        let parsed = parse_model_output(text);
        assert_eq!(parsed.match_percentage.as_deref(), Some("60"));
        assert!(parsed.strengths.contains(&"Technical skills".to_string()));
        assert!(parsed.weaknesses.contains(&"Limited experience".to_string()));
        assert!(parsed.suggestions.contains(&"Gain more experience".to_string()));
    }

    #[test]
    fn test_minimal_text_yields_nothing() {
        let parsed = parse_model_output("The candidate is a good fit.");
        assert_eq!(parsed, ParsedAnalysis::default());
    }

    #[test]
    fn test_lists_without_percentage() {
        let text = "
    Strengths: Good technical background
    Weaknesses: Limited experience
    Suggestions: Add more projects
    ";
        let parsed = parse_model_output(text);
        assert_eq!(parsed.match_percentage, None);
        assert_eq!(parsed.strengths, vec!["Good technical background".to_string()]);
        assert_eq!(parsed.weaknesses, vec!["Limited experience".to_string()]);
        assert_eq!(parsed.suggestions, vec!["Add more projects".to_string()]);
    }

    #[test]
    fn test_lists_capped_at_three() {
        let parsed = parse_model_output("Strengths: a, b, c, d, e");
        assert_eq!(parsed.strengths.len(), MAX_ITEMS);
    }

    #[test]
    fn test_looks_structured() {
        assert!(looks_structured("Overall MATCH is decent"));
        assert!(looks_structured("Key strength: Rust"));
        assert!(!looks_structured("I cannot help with that."));
    }
}
