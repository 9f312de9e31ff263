//! PromptCrafter — Core library.
//! Turns free-text requests plus selected tones into structured prompts for a downstream model.
//! Everything here is pure: no I/O, no shared mutable state beyond the static tone catalog.

pub mod classifier;
pub mod engine;
pub mod extract;
pub mod template;
pub mod tones;

pub use classifier::{classify, should_apply_tones, ContentType, ParseContentTypeError};
pub use engine::{generate, PromptInput, PromptOutput};
pub use extract::{extract_context, extract_task};
pub use template::render;
pub use tones::{all_tones, categories, category_for, ToneCategories, ToneCategory, UNCATEGORIZED};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
