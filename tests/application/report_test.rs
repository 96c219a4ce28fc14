use debrief::application::services::{render_markdown, report_file_name};
use debrief::domain::{ActionItem, AnalysisResult, Sentiment};

fn result_with_items(items: Vec<ActionItem>) -> AnalysisResult {
    AnalysisResult {
        transcription: "Full transcript text.".to_string(),
        executive_summary: "Short summary.".to_string(),
        action_items: items,
        sentiment: Sentiment::Negative,
        sentiment_reasoning: "Several blockers were raised.".to_string(),
    }
}

#[test]
fn given_mp3_file_name_when_naming_report_then_basename_with_report_suffix() {
    assert_eq!(report_file_name("meeting.mp3"), "meeting_report.md");
}

#[test]
fn given_file_name_without_extension_when_naming_report_then_whole_name_used() {
    assert_eq!(report_file_name("standup"), "standup_report.md");
}

#[test]
fn given_dotfile_when_naming_report_then_name_is_not_emptied() {
    assert_eq!(report_file_name(".hidden"), ".hidden_report.md");
}

#[test]
fn given_multi_dot_file_name_when_naming_report_then_only_last_extension_dropped() {
    assert_eq!(report_file_name("q3.review.wav"), "q3.review_report.md");
}

#[test]
fn given_completed_result_when_rendering_then_sections_appear_in_contract_order() {
    let markdown = render_markdown(&result_with_items(vec![]), "meeting.mp3");

    let summary = markdown.find("## Executive Summary").unwrap();
    let sentiment = markdown.find("## Sentiment Analysis").unwrap();
    let actions = markdown.find("## Action Items").unwrap();
    let transcript = markdown.find("## Full Transcription").unwrap();

    assert!(summary < sentiment);
    assert!(sentiment < actions);
    assert!(actions < transcript);
    assert!(markdown.starts_with("# Audio Analysis Report: meeting.mp3"));
}

#[test]
fn given_result_when_rendering_then_tone_reasoning_and_transcript_present() {
    let markdown = render_markdown(&result_with_items(vec![]), "meeting.mp3");

    assert!(markdown.contains("**Overall Tone:** Negative"));
    assert!(markdown.contains("Several blockers were raised."));
    assert!(markdown.contains("Full transcript text."));
}

#[test]
fn given_no_action_items_when_rendering_then_placeholder_shown() {
    let markdown = render_markdown(&result_with_items(vec![]), "meeting.mp3");

    assert!(markdown.contains("_No action items identified._"));
}

#[test]
fn given_action_items_when_rendering_then_checklist_with_assignee_annotation() {
    let items = vec![
        ActionItem {
            task: "Send the notes".to_string(),
            assignee: "Ola".to_string(),
        },
        ActionItem {
            task: "Book a follow-up".to_string(),
            assignee: "Unassigned".to_string(),
        },
    ];

    let markdown = render_markdown(&result_with_items(items), "meeting.mp3");

    assert!(markdown.contains("- [ ] Send the notes (Assignee: Ola)"));
    assert!(markdown.contains("- [ ] Book a follow-up (Assignee: Unassigned)"));
    assert!(!markdown.contains("_No action items identified._"));
}
