/// Static text assets offered for offline use. Served verbatim; nothing in
/// this service executes or interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleAsset {
    Script,
    Requirements,
    Readme,
}

impl BundleAsset {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "script" => Some(Self::Script),
            "requirements" => Some(Self::Requirements),
            "readme" => Some(Self::Readme),
            _ => None,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Script => "local_analyzer.py",
            Self::Requirements => "requirements.txt",
            Self::Readme => "README.md",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Script => "text/x-python",
            Self::Requirements | Self::Readme => "text/plain",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            Self::Script => LOCAL_ANALYZER_SCRIPT,
            Self::Requirements => REQUIREMENTS,
            Self::Readme => README,
        }
    }
}

const LOCAL_ANALYZER_SCRIPT: &str = r###"#!/usr/bin/env python3
"""Offline audio analyzer.

Transcribes an audio file locally with faster-whisper and writes a Markdown
report with a naive summary, keyword-matched action items, and a lexicon
based sentiment estimate. Intended for machines without network access; the
output mirrors the hosted dashboard's report layout.
"""

import argparse
import re
import sys
from pathlib import Path

POSITIVE_WORDS = {"great", "good", "excellent", "agree", "happy", "success", "win"}
NEGATIVE_WORDS = {"bad", "problem", "blocked", "delay", "concern", "fail", "risk"}
ACTION_PATTERN = re.compile(
    r"\b(?:will|should|must|needs? to|let's)\s+(.{5,80}?)(?:[.;]|$)", re.IGNORECASE
)


def transcribe(audio_path: Path, model_size: str) -> str:
    from faster_whisper import WhisperModel

    model = WhisperModel(model_size, compute_type="int8")
    segments, _info = model.transcribe(str(audio_path))
    return " ".join(segment.text.strip() for segment in segments)


def summarize(text: str, max_sentences: int = 3) -> str:
    sentences = re.split(r"(?<=[.!?])\s+", text.strip())
    return " ".join(sentences[:max_sentences])


def extract_action_items(text: str) -> list[str]:
    return [match.group(1).strip() for match in ACTION_PATTERN.finditer(text)]


def estimate_sentiment(text: str) -> tuple[str, str]:
    words = set(re.findall(r"[a-z']+", text.lower()))
    positive = len(words & POSITIVE_WORDS)
    negative = len(words & NEGATIVE_WORDS)
    if positive > negative:
        return "Positive", f"{positive} positive vs {negative} negative cue words."
    if negative > positive:
        return "Negative", f"{negative} negative vs {positive} positive cue words."
    return "Neutral", "Positive and negative cue words are balanced."


def render_report(source: Path, transcript: str) -> str:
    tone, reasoning = estimate_sentiment(transcript)
    items = extract_action_items(transcript)
    lines = [
        f"# Audio Analysis Report: {source.name}",
        "",
        "## Executive Summary",
        "",
        summarize(transcript) or "_Transcript was empty._",
        "",
        "## Sentiment Analysis",
        "",
        f"**Overall Tone:** {tone}",
        "",
        reasoning,
        "",
        "## Action Items",
        "",
    ]
    if items:
        lines.extend(f"- [ ] {item} (Assignee: Unassigned)" for item in items)
    else:
        lines.append("_No action items identified._")
    lines.extend(["", "## Full Transcription", "", transcript, ""])
    return "\n".join(lines)


def main() -> int:
    parser = argparse.ArgumentParser(description=__doc__)
    parser.add_argument("audio", type=Path, help="Audio file to analyze")
    parser.add_argument("--model", default="base", help="faster-whisper model size")
    parser.add_argument("--output", type=Path, default=None, help="Report path")
    args = parser.parse_args()

    if not args.audio.exists():
        print(f"error: {args.audio} does not exist", file=sys.stderr)
        return 1

    transcript = transcribe(args.audio, args.model)
    report = render_report(args.audio, transcript)
    output = args.output or args.audio.with_name(f"{args.audio.stem}_report.md")
    output.write_text(report, encoding="utf-8")
    print(f"wrote {output}")
    return 0


if __name__ == "__main__":
    raise SystemExit(main())
"###;

const REQUIREMENTS: &str = "faster-whisper==1.0.3\n";

const README: &str = r#"# Offline Audio Analyzer

A standalone companion to the hosted audio debrief service for machines
without network access. Transcription runs locally via faster-whisper; the
summary, action items, and sentiment are heuristic approximations of what the
hosted model produces.

## Setup

    python3 -m venv .venv
    . .venv/bin/activate
    pip install -r requirements.txt

## Usage

    python3 local_analyzer.py meeting.mp3

Writes `meeting_report.md` next to the input file. Pass `--model small` or
`--model medium` for better transcription at the cost of speed, and
`--output path.md` to choose the report location.
"#;
