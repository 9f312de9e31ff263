//! Task / Context extraction — heuristic sub-fields pulled from the raw request.

use once_cell::sync::Lazy;
use regex::Regex;

/// Filler openers stripped from the start of a request. Alternation order is match order.
static FILLER_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(can you|could you|please|i need|i want|help me|write|create|generate|make)")
        .expect("filler prefix pattern is valid")
});

/// Scanned in this order; the first indicator present anywhere wins, not the earliest in the text.
const CONTEXT_INDICATORS: &[&str] = &["for", "because", "since", "as", "given that", "considering"];

/// The request with one leading filler phrase removed and its first letter capitalized.
///
/// When stripping leaves less than half of the original characters, the original text is
/// returned untouched.
pub fn extract_task(text: &str) -> String {
    let stripped = FILLER_PREFIX.replace(text, "");
    let stripped = stripped.trim();

    if stripped.chars().count() < text.chars().count() / 2 {
        return text.to_string();
    }

    capitalize_first(stripped)
}

/// Everything after the first context indicator (by list order) that appears as a
/// space-delimited word, in the original casing. Empty when no indicator is present.
pub fn extract_context(text: &str) -> String {
    // ASCII lowering keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();

    for indicator in CONTEXT_INDICATORS {
        let needle = format!(" {} ", indicator);
        if let Some(idx) = lower.find(&needle) {
            if idx > 0 {
                let start = idx + indicator.len() + 1;
                return text[start..].trim().to_string();
            }
        }
    }

    String::new()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_lowercase() => c.to_uppercase().chain(chars).collect(),
        _ => s.to_string(),
    }
}
