//! Content Classifier — coarse intent of a request from keyword membership.
//! Communication keywords are checked before technical ones; the first set that hits wins.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Personal / outbound communication signals.
const COMMUNICATION_KEYWORDS: &[&str] = &[
    "email", "text", "message", "letter", "post", "write", "communicate", "outreach",
    "cover letter", "social media", "linkedin", "twitter", "facebook", "instagram",
    "greeting", "response", "reply", "dm", "direct message", "chat", "conversation",
    "correspondence", "memo", "newsletter", "announcement", "invitation",
];

/// Technical or instructional signals.
const TECHNICAL_KEYWORDS: &[&str] = &[
    "code", "program", "develop", "build", "create", "implement", "design", "architecture",
    "algorithm", "function", "class", "method", "api", "database", "query", "system",
    "technical", "instruction", "guide", "tutorial", "how to", "steps", "procedure",
    "process", "methodology", "framework", "structure", "analyze", "evaluate", "assess",
];

/// Words that ask for tones even outside communication requests.
const TONE_REQUEST_WORDS: &[&str] = &["tone", "style", "voice"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Technical,
    Communication,
    #[default]
    Creative,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Technical => "technical",
            ContentType::Communication => "communication",
            ContentType::Creative => "creative",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content type: {0}")]
pub struct ParseContentTypeError(pub String);

impl FromStr for ContentType {
    type Err = ParseContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "technical" => Ok(ContentType::Technical),
            "communication" => Ok(ContentType::Communication),
            "creative" => Ok(ContentType::Creative),
            _ => Err(ParseContentTypeError(s.to_string())),
        }
    }
}

/// Classifies `text` by plain substring membership ("process" also matches "processor").
pub fn classify(text: &str) -> ContentType {
    let lower = text.to_lowercase();
    if let Some(hit) = first_hit(&lower, COMMUNICATION_KEYWORDS) {
        tracing::debug!(keyword = hit, "classified as communication");
        return ContentType::Communication;
    }
    if let Some(hit) = first_hit(&lower, TECHNICAL_KEYWORDS) {
        tracing::debug!(keyword = hit, "classified as technical");
        return ContentType::Technical;
    }
    ContentType::Creative
}

/// Tones are echoed for communication requests, or when the text itself asks about tone, style or voice.
pub fn should_apply_tones(text: &str, content_type: ContentType) -> bool {
    if content_type == ContentType::Communication {
        return true;
    }
    let lower = text.to_lowercase();
    TONE_REQUEST_WORDS.iter().any(|w| lower.contains(w))
}

fn first_hit(lower: &str, keywords: &[&'static str]) -> Option<&'static str> {
    keywords.iter().copied().find(|k| lower.contains(k))
}
