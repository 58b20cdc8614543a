use crate::utils::truncate_chars;

/// Characters of CV and job text that make it into the prompt.
pub const PROMPT_INPUT_CHARS: usize = 1000;

pub fn create_analysis_prompt(cv_text: &str, job_description: &str) -> String {
    format!(
        r#"Here are the CV of a candidate and a job description:

CV: {}

Job: {}

Perform an analysis of the following:
    Does the candidate have relevant experience and skills?
    How much does the profile match?
    What are the strengths?
    What are the weaknesses?
    What are the suggestions?

Return the analysis in a structured format like:
{{
    "general_analysis": "The candidate has relevant experience and skills. Match: 75%. Strengths: Technical background, relevant experience. Weaknesses: Could use more specific examples. Suggestions: Add project examples, include certifications.",
    "match_percentage": "75",
    "strengths": ["Technical background", "relevant experience"],
    "weaknesses": ["Could use more specific examples"],
    "suggestions": ["Add project examples", "include certifications"]
}}"#,
        truncate_chars(cv_text, PROMPT_INPUT_CHARS),
        truncate_chars(job_description, PROMPT_INPUT_CHARS)
    )
}
