use std::fmt::Write;

use crate::domain::AnalysisResult;

/// Download name for the exported report: basename minus its final
/// extension, suffixed with `_report.md`.
pub fn report_file_name(source_file: &str) -> String {
    let base = match source_file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => source_file,
    };
    format!("{}_report.md", base)
}

/// Render a completed analysis as a Markdown document. Section order is part
/// of the export contract: Executive Summary, Sentiment Analysis, Action
/// Items, Full Transcription.
pub fn render_markdown(result: &AnalysisResult, source_file: &str) -> String {
    let mut doc = String::new();

    let _ = writeln!(doc, "# Audio Analysis Report: {}", source_file);
    doc.push('\n');

    doc.push_str("## Executive Summary\n\n");
    let _ = writeln!(doc, "{}", result.executive_summary);
    doc.push('\n');

    doc.push_str("## Sentiment Analysis\n\n");
    let _ = writeln!(doc, "**Overall Tone:** {}", result.sentiment);
    doc.push('\n');
    let _ = writeln!(doc, "{}", result.sentiment_reasoning);
    doc.push('\n');

    doc.push_str("## Action Items\n\n");
    if result.action_items.is_empty() {
        doc.push_str("_No action items identified._\n");
    } else {
        for item in &result.action_items {
            let _ = writeln!(doc, "- [ ] {} (Assignee: {})", item.task, item.assignee);
        }
    }
    doc.push('\n');

    doc.push_str("## Full Transcription\n\n");
    let _ = writeln!(doc, "{}", result.transcription);

    doc
}
