//! Plain-text rendering of a result view for the terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use advice::{CitationView, ResultView};

const RULE_WIDTH: usize = 60;

fn rule(title: &str) -> String {
    format!("{:─^RULE_WIDTH$}", format!(" {title} "))
}

fn bullet(text: &str) -> String {
    format!("- {text}")
}

fn citation_line(citation: &CitationView) -> String {
    match &citation.href {
        Some(href) => format!("- {} <{href}>", citation.label),
        None => bullet(&citation.label),
    }
}

/// Render answer, confidence, reasons, citations, and follow-ups as sections.
///
/// Follow-ups are omitted when empty; the other sections always print.
pub fn render_answer(view: &ResultView, followups: &[String]) -> String {
    let mut lines = vec![rule("Answer"), view.answer.clone(), rule("Confidence"), view.confidence.clone()];
    lines.push(rule("Reasons"));
    lines.extend(view.reasons.iter().map(|r| bullet(r)));
    lines.push(rule("Citations"));
    lines.extend(view.citations.iter().map(citation_line));
    if !followups.is_empty() {
        lines.push(rule("Follow-ups"));
        lines.extend(followups.iter().map(|f| bullet(f)));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
