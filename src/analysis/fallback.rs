// src/analysis/fallback.rs
//! Keyword analysis used when the language model is unavailable.

use crate::types::AnalysisResult;

const TECH_SKILLS: [&str; 10] = [
    "python",
    "javascript",
    "java",
    "react",
    "node.js",
    "aws",
    "docker",
    "kubernetes",
    "sql",
    "mongodb",
];

const SOFT_SKILLS: [&str; 5] = [
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "project management",
];

const MIN_SCORE: usize = 40;
const MAX_SCORE: usize = 95;
const BASE_SCORE: usize = 30;

/// Score in 40..=95 from skills mentioned in both texts.
pub fn keyword_score(cv_text: &str, job_description: &str) -> u8 {
    let cv = cv_text.to_lowercase();
    let job = job_description.to_lowercase();

    let shared = TECH_SKILLS
        .iter()
        .chain(SOFT_SKILLS.iter())
        .filter(|skill| cv.contains(*skill) && job.contains(*skill))
        .count();

    let total = TECH_SKILLS.len() + SOFT_SKILLS.len();
    let raw = shared * 100 / total + BASE_SCORE;
    raw.clamp(MIN_SCORE, MAX_SCORE) as u8
}

/// Build a complete result from keyword heuristics alone.
/// The caller decides whether and why it is flagged as a fallback.
pub fn keyword_analysis(cv_text: &str, job_description: &str) -> AnalysisResult {
    let cv = cv_text.to_lowercase();

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut suggestions = Vec::new();

    if cv.contains("experience") {
        strengths.push("Has relevant work experience");
    } else {
        weaknesses.push("Limited work experience");
        suggestions.push("Add relevant work experience or internships");
    }

    if TECH_SKILLS.iter().any(|skill| cv.contains(skill)) {
        strengths.push("Technical skills present");
    } else {
        weaknesses.push("Missing technical skills");
        suggestions.push("Add relevant technical skills");
    }

    if cv.contains("education") || cv.contains("degree") {
        strengths.push("Educational background present");
    } else {
        weaknesses.push("Education information missing");
        suggestions.push("Include educational background");
    }

    if cv.contains("project") {
        strengths.push("Project experience mentioned");
    } else {
        suggestions.push("Add specific project examples");
    }

    if strengths.is_empty() {
        strengths.push("Good foundation for the role");
    }
    if weaknesses.is_empty() {
        weaknesses.push("Could use more specific examples");
    }
    if suggestions.is_empty() {
        suggestions.extend(["Add quantifiable achievements", "Include relevant certifications"]);
    }

    let top3 = |items: Vec<&str>| items.into_iter().take(3).map(str::to_string).collect();

    AnalysisResult {
        match_percentage: keyword_score(cv_text, job_description).to_string(),
        strengths: top3(strengths),
        weaknesses: top3(weaknesses),
        suggestions: top3(suggestions),
        is_fallback: false,
        fallback_reason: None,
    }
}
