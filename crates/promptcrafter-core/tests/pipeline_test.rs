//! Pipeline Test: end-to-end scenarios through `generate` and the tone catalog.
//!
//! Run with: `cargo test -p promptcrafter_core --test pipeline_test`

use promptcrafter_core::{all_tones, categories, generate, ContentType, PromptInput};

fn input(text: &str, tones: &[&str]) -> PromptInput {
    PromptInput::new(text, tones.iter().map(|t| t.to_string()).collect())
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn technical_request_ignores_tones() {
    let out = generate(&input(
        "Create a Java function to calculate Fibonacci numbers",
        &["Professional", "Precise"],
    ));

    assert_eq!(out.content_type, ContentType::Technical);
    assert!(!out.tones_applied);
    assert!(out.applied_tones.is_empty());
    assert!(out.generated_prompt.contains("# Technical Instruction"));
    assert!(!out.generated_prompt.contains("## Tone"));
    assert!(out
        .generated_prompt
        .contains("## Task\nA Java function to calculate Fibonacci numbers\n\n"));
}

#[test]
fn communication_request_echoes_tones() {
    let out = generate(&input(
        "Write an email to my boss asking for a raise",
        &["Professional", "Respectful"],
    ));

    assert_eq!(out.content_type, ContentType::Communication);
    assert!(out.tones_applied);
    assert_eq!(out.applied_tones, vec!["Professional", "Respectful"]);
    assert!(out.generated_prompt.contains("# Communication Request"));
    assert!(out.generated_prompt.contains("Professional, Respectful"));
    assert!(out.generated_prompt.contains("## Context\na raise\n\n"));
    assert!(out
        .generated_prompt
        .ends_with("Maintain the specified tone(s) throughout."));
}

#[test]
fn communication_request_without_tones() {
    let out = generate(&input("Write an email to my boss asking for a raise", &[]));

    assert_eq!(out.content_type, ContentType::Communication);
    assert!(out.tones_applied);
    assert!(out.applied_tones.is_empty());
    assert!(!out.generated_prompt.contains("Tone"));
    assert!(out.generated_prompt.ends_with("Focus on clarity and precision."));
}

#[test]
fn catalog_flat_list_starts_with_professional() {
    let tones = all_tones();
    assert_eq!(tones.len(), 100);
    assert_eq!(
        &tones[..10],
        &[
            "Formal", "Authoritative", "Confident", "Analytical", "Objective",
            "Diplomatic", "Precise", "Respectful", "Informative", "Instructional",
        ]
    );
}

#[test]
fn catalog_serializes_in_category_order() {
    let json = serde_json::to_string(categories()).unwrap();
    assert!(json.starts_with(r#"{"Professional":["Formal","#));
    let urgent = json.find(r#""Urgent":["Time-sensitive""#).unwrap();
    let professional = json.find(r#""Professional""#).unwrap();
    assert!(professional < urgent);
}

#[test]
fn section_counts_hold_across_inputs() {
    let cases: &[(&str, &[&str])] = &[
        ("", &[]),
        ("Write a memo for the team because of the outage", &["Clear", "Brief"]),
        ("Make a tutorial for beginners since they struggle", &["Friendly"]),
        ("Paint me a sunset in words considering the mood", &["Vivid"]),
        ("Tone down this paragraph", &["Calm"]),
        ("日本語のテキスト for 友達", &["Warm"]),
    ];

    for (text, tones) in cases {
        let out = generate(&input(text, tones));
        let prompt = &out.generated_prompt;
        assert_eq!(count(prompt, "## Task"), 1, "{text}");
        assert!(count(prompt, "## Context") <= 1, "{text}");
        assert!(count(prompt, "## Tone") <= 1, "{text}");
        assert_eq!(count(prompt, "## Format"), 1, "{text}");
        assert_eq!(count(prompt, "## Output Expectations"), 1, "{text}");
        if !out.applied_tones.is_empty() {
            assert!(out.tones_applied);
        }
    }
}

#[test]
fn generation_is_idempotent() {
    let req = input(
        "Could you draft a LinkedIn post announcing our launch as we hit 1.0",
        &["Enthusiastic", "Concise"],
    );
    let first = generate(&req);
    let second = generate(&req);
    assert_eq!(first.generated_prompt, second.generated_prompt);
    assert_eq!(first, second);
}
