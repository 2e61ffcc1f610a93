//! Frontmatter handling: `{{key}}` variable substitution and raw splitting.
//!
//! No YAML parsing happens here. The variable substitutor reads simple
//! `key: value` lines out of the leading `---` block and performs literal
//! substring replacement in the body; the raw splitter hands the untouched
//! frontmatter block to the transform commands, which must never send it
//! to the API.

use std::sync::LazyLock;

use regex::Regex;

/// A line consisting solely of `---`, trailing whitespace tolerated.
#[allow(clippy::expect_used)]
static DELIMITER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^---[ \t\r]*$").expect("valid delimiter pattern")
});

/// A `key: value` frontmatter line (key restricted to word characters).
#[allow(clippy::expect_used)]
static VARIABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+):\s*(.+)$").expect("valid variable pattern")
});

/// The whole leading frontmatter block including both delimiter lines,
/// anchored to the start of the document.
#[allow(clippy::expect_used)]
static RAW_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n.*?\r?\n---\r?\n").expect("valid block pattern")
});

/// Replace `{{key}}` placeholders in the body with values from the leading
/// frontmatter block. Returns the document unchanged when there is no
/// frontmatter at the very start, or when the block is unterminated.
///
/// Substitution is literal and single-pass per key, in frontmatter line
/// order (first occurrence of a key fixes its position, later duplicates
/// only overwrite the value). Values are inserted verbatim; a value that
/// itself contains `{{...}}`-shaped text is not re-expanded.
pub fn substitute(document: &str) -> String {
    let parts: Vec<&str> = DELIMITER_RE.splitn(document, 3).collect();
    if parts.len() < 3 {
        return document.to_string();
    }
    // The first delimiter must begin at byte offset 0.
    if !parts[0].is_empty() {
        return document.to_string();
    }

    let interior = parts[1];
    let mut body = parts[2].to_string();

    for (key, value) in parse_variables(interior) {
        let placeholder = format!("{{{{{key}}}}}");
        body = body.replace(&placeholder, &value);
    }

    format!("---\n{}\n---\n{}", interior.trim(), body)
}

/// Parse `key: value` lines. Non-matching lines are ignored; a duplicate
/// key overwrites the earlier value but keeps its original position.
fn parse_variables(interior: &str) -> Vec<(String, String)> {
    let mut variables: Vec<(String, String)> = Vec::new();
    for line in interior.lines() {
        let Some(caps) = VARIABLE_RE.captures(line.trim()) else {
            continue;
        };
        let key = caps.get(1).map_or("", |m| m.as_str());
        let value = strip_quotes(caps.get(2).map_or("", |m| m.as_str()).trim());
        match variables.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => variables.push((key.to_string(), value.to_string())),
        }
    }
    variables
}

/// Strip one pair of enclosing double quotes, if present at both ends.
fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Split a document into its raw leading frontmatter block (delimiters
/// included, byte-for-byte) and the remaining body. Documents without a
/// leading block yield an empty prefix and the whole text as body.
pub fn split_raw(document: &str) -> (&str, &str) {
    match RAW_BLOCK_RE.find(document) {
        Some(m) => document.split_at(m.end()),
        None => ("", document),
    }
}
