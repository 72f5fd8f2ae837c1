//! Final sanitization pass over compiled text.
//!
//! Removes phrases that would ask the generator for a different identity,
//! then normalizes whitespace. Both steps are idempotent.

use std::sync::LazyLock;

use regex::Regex;

/// Phrases removed from compiled output, matched case-insensitively as whole
/// phrases with any run of whitespace between words.
pub const CONFLICTING_IDENTITY_PHRASES: &[&str] = &[
    "new person",
    "random model",
    "different person",
    "different model",
    "another person",
    "random person",
    "new model",
    "new face",
    "different face",
    "stock model",
    "generic model",
    "change the face",
    "alter the face",
];

static CONFLICTING: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = CONFLICTING_IDENTITY_PHRASES
        .iter()
        .map(|phrase| {
            phrase
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|")))
        .expect("conflicting phrase pattern is valid")
});

static HORIZONTAL_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ([.,;:!?])").expect("valid regex"));

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Remove every conflicting-identity phrase, repeating until nothing
/// matches, then collapse whitespace.
pub fn scrub(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = CONFLICTING.replace_all(&current, "");
        if next == current {
            break;
        }
        current = next.into_owned();
    }
    collapse_whitespace(&current)
}

/// Collapse runs of spaces and tabs, trim every line, drop stray spaces
/// before punctuation, and allow at most one blank line between blocks.
pub fn collapse_whitespace(text: &str) -> String {
    let spaced = HORIZONTAL_SPACE.replace_all(text, " ");
    let tightened = SPACE_BEFORE_PUNCTUATION.replace_all(&spaced, "$1");
    let lines: Vec<&str> = tightened.lines().map(str::trim).collect();
    let joined = lines.join("\n");
    EXCESS_NEWLINES
        .replace_all(joined.trim(), "\n\n")
        .into_owned()
}

/// Whether `text` still contains a conflicting phrase.
pub fn contains_conflicting_phrase(text: &str) -> bool {
    CONFLICTING.is_match(text)
}
