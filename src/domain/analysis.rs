use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Structured output of one inference call. Parsed once from the model's
/// schema-constrained JSON text and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub transcription: String,
    pub executive_summary: String,
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    pub sentiment: Sentiment,
    pub sentiment_reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    pub task: String,
    /// The model is instructed to write "Unassigned" when no owner is stated;
    /// the serde default covers responses that drop the field entirely.
    #[serde(default = "unassigned")]
    pub assignee: String,
}

fn unassigned() -> String {
    "Unassigned".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(Sentiment::Positive),
            "Neutral" => Ok(Sentiment::Neutral),
            "Negative" => Ok(Sentiment::Negative),
            _ => Err(format!("Invalid sentiment label: {}", s)),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
