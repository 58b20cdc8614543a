//! Terminal output for a rendered form view

use colored::*;

use super::{FormView, ResultsView, SectionKind};
use crate::types::ScoreTier;

const RULE_WIDTH: usize = 60;

fn tier_color(text: &str, tier: ScoreTier) -> ColoredString {
    match tier {
        ScoreTier::High => text.bright_green().bold(),
        ScoreTier::Medium => text.bright_yellow().bold(),
        ScoreTier::Low => text.bright_red().bold(),
    }
}

fn section_color(text: &str, kind: SectionKind) -> ColoredString {
    match kind {
        SectionKind::Strengths => text.green(),
        SectionKind::Weaknesses => text.red(),
        SectionKind::Suggestions => text.blue(),
    }
}

/// Render the whole form view as printable text.
pub fn format_view(view: &FormView) -> String {
    let mut out = String::new();
    let rule = "─".repeat(RULE_WIDTH);

    out.push_str(&format!("{}\n", "CV Matchy-Matchy".bright_blue().bold()));
    out.push_str(&format!(
        "{}\n",
        "Analyze your CV against job descriptions and get personalized insights".dimmed()
    ));
    out.push_str(&format!("{}\n", rule.dimmed()));

    out.push_str(&format!("{} {}\n", "CV (PDF):".bold(), view.upload.title));
    out.push_str(&format!("          {}\n", view.upload.subtitle.dimmed()));

    let description = view.job_description.trim();
    let preview: String = description.chars().take(200).collect();
    let ellipsis = if description.chars().count() > 200 { "…" } else { "" };
    out.push_str(&format!(
        "{} {}{}\n",
        "Job description:".bold(),
        preview.replace('\n', " "),
        ellipsis
    ));

    if let Some(error) = &view.error_banner {
        out.push_str(&format!("\n{} {}\n", "✗".bright_red(), error.red()));
    }

    let button = if view.submit.enabled {
        format!("[ {} ]", view.submit.label).bright_blue()
    } else {
        format!("[ {} ]", view.submit.label).dimmed()
    };
    out.push_str(&format!("\n{}\n", button));

    if let Some(results) = &view.results {
        out.push_str(&format!("{}\n", rule.dimmed()));
        out.push_str(&format_results(results));
    }

    out
}

pub fn format_results(results: &ResultsView) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", "Analysis Results".bold()));

    if let Some(banner) = &results.fallback {
        out.push_str(&format!("{} {}\n", "⚠".yellow(), banner.title.yellow().bold()));
        out.push_str(&format!("  {}\n", banner.notice.yellow()));
        if let Some(reason) = &banner.reason {
            out.push_str(&format!("  {}\n", format!("Reason: {}", reason).yellow()));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "{} {}\n",
        tier_color(&results.score.text, results.score.tier),
        "Match".dimmed()
    ));

    for section in &results.sections {
        out.push_str(&format!(
            "\n{}\n",
            section_color(section.kind.title(), section.kind).bold()
        ));
        for item in &section.items {
            out.push_str(&format!("  {} {}\n", section_color("•", section.kind), item));
        }
    }

    out
}

pub fn print_view(view: &FormView) {
    println!("{}", format_view(view));
}
