//! Prompt Templater — fixed-section Markdown document.
//!
//! Section order never changes: header, Task, Context (optional), Tone (optional), Format,
//! Output Expectations. Sections are separated by one blank line and the document has no
//! trailing newline.

use crate::classifier::ContentType;

const EXPECTATIONS: &str =
    "The response should be comprehensive, accurate, and directly address the request. ";
const EXPECTATIONS_WITH_TONE: &str = "Maintain the specified tone(s) throughout.";
const EXPECTATIONS_WITHOUT_TONE: &str = "Focus on clarity and precision.";

fn header(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Technical => "# Technical Instruction",
        ContentType::Communication => "# Communication Request",
        ContentType::Creative => "# Creative Request",
    }
}

fn format_guidance(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Technical => {
            "Provide clear, precise, and structured information. Use appropriate formatting for code, steps, or technical details."
        }
        ContentType::Communication => {
            "Structure the content appropriately for the intended communication medium. Include all necessary components."
        }
        ContentType::Creative => {
            "Present the content in a clear, engaging manner. Use appropriate structure and formatting."
        }
    }
}

/// Assembles the prompt document. The Tone section (and the tone clause of the expectations)
/// appears only when `apply_tones` is set and `tones` is non-empty.
pub fn render<S: AsRef<str>>(
    task: &str,
    context: &str,
    tones: &[S],
    apply_tones: bool,
    content_type: ContentType,
) -> String {
    let with_tone = apply_tones && !tones.is_empty();

    let mut sections: Vec<String> = Vec::with_capacity(6);
    sections.push(header(content_type).to_string());
    sections.push(format!("## Task\n{}", task));

    if !context.is_empty() {
        sections.push(format!("## Context\n{}", context));
    }

    if with_tone {
        let joined = tones
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join(", ");
        sections.push(format!("## Tone\nUse the following tone(s): {}", joined));
    }

    sections.push(format!("## Format\n{}", format_guidance(content_type)));
    sections.push(format!(
        "## Output Expectations\n{}{}",
        EXPECTATIONS,
        if with_tone {
            EXPECTATIONS_WITH_TONE
        } else {
            EXPECTATIONS_WITHOUT_TONE
        }
    ));

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_TONES: &[&str] = &[];

    #[test]
    fn full_document_layout() {
        let out = render(
            "An email to my boss asking for a raise",
            "a raise",
            &["Professional", "Respectful"],
            true,
            ContentType::Communication,
        );
        let expected = "# Communication Request\n\n\
## Task\nAn email to my boss asking for a raise\n\n\
## Context\na raise\n\n\
## Tone\nUse the following tone(s): Professional, Respectful\n\n\
## Format\nStructure the content appropriately for the intended communication medium. Include all necessary components.\n\n\
## Output Expectations\nThe response should be comprehensive, accurate, and directly address the request. Maintain the specified tone(s) throughout.";
        assert_eq!(out, expected);
    }

    #[test]
    fn optional_sections_are_omitted() {
        let out = render("Sort a list", "", &["Precise"], false, ContentType::Technical);
        assert!(out.starts_with("# Technical Instruction\n\n## Task\nSort a list\n\n## Format\n"));
        assert!(!out.contains("## Context"));
        assert!(!out.contains("## Tone"));
        assert!(out.ends_with("Focus on clarity and precision."));
    }

    #[test]
    fn empty_tones_drop_tone_section_even_when_applied() {
        let out = render("A haiku", "", NO_TONES, true, ContentType::Creative);
        assert!(out.starts_with("# Creative Request"));
        assert!(!out.contains("## Tone"));
        assert!(out.ends_with("Focus on clarity and precision."));
    }

    #[test]
    fn tones_keep_caller_order() {
        let tones = vec!["Witty".to_string(), "Blunt".to_string(), "Warm".to_string()];
        let out = render("A toast", "", &tones, true, ContentType::Creative);
        assert!(out.contains("Use the following tone(s): Witty, Blunt, Warm\n\n## Format"));
    }
}
