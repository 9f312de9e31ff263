//! Prompt pipeline: classify → decide tones → extract → render.

use serde::{Deserialize, Serialize};

use crate::classifier::{classify, should_apply_tones, ContentType};
use crate::extract::{extract_context, extract_task};
use crate::template::render;

/// One generation request as seen by the core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptInput {
    pub text: String,
    /// Order is kept all the way into the rendered Tone section.
    pub selected_tones: Vec<String>,
    /// Carried through for callers; classification and templating ignore it.
    pub is_voice_input: bool,
}

impl PromptInput {
    pub fn new(text: impl Into<String>, selected_tones: Vec<String>) -> Self {
        Self {
            text: text.into(),
            selected_tones,
            is_voice_input: false,
        }
    }
}

/// Result of the pipeline. Timing is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptOutput {
    pub generated_prompt: String,
    pub tones_applied: bool,
    /// Empty unless `tones_applied`.
    pub applied_tones: Vec<String>,
    pub content_type: ContentType,
}

/// Runs the full pipeline. Deterministic: identical input gives a byte-identical prompt.
pub fn generate(input: &PromptInput) -> PromptOutput {
    let text = input.text.trim();

    let content_type = classify(text);
    let tones_applied = should_apply_tones(text, content_type);

    let task = extract_task(text);
    let context = extract_context(text);
    let generated_prompt = render(
        &task,
        &context,
        input.selected_tones.as_slice(),
        tones_applied,
        content_type,
    );

    tracing::debug!(
        %content_type,
        tones_applied,
        tone_count = input.selected_tones.len(),
        has_context = !context.is_empty(),
        "prompt generated"
    );

    PromptOutput {
        generated_prompt,
        tones_applied,
        applied_tones: if tones_applied {
            input.selected_tones.clone()
        } else {
            Vec::new()
        },
        content_type,
    }
}
