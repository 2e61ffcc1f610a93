//! Recursive `{{include: path}}` expansion with cycle detection.
//!
//! Include targets are resolved relative to the directory of the file that
//! contains the directive, not the entry file. Every inclusion is wrapped in
//! `<!-- BEGIN include: ... -->` / `<!-- END include: ... -->` comment pairs
//! carrying the relative path as the author wrote it.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MdstitchError, Result};

/// Matches `{{ include : path }}` (keyword case-insensitive, whitespace
/// tolerated). The path capture stops at the first `}`, so adjacent
/// directives never merge and an unclosed directive is left as literal text.
#[allow(clippy::expect_used)]
static INCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\{\{\s*include\s*:\s*([^}]+)\}\}").expect("valid include pattern")
});

/// Chain of files currently being expanded, used both for cycle detection
/// and for the diagnostic chain in [`MdstitchError::CircularInclude`].
///
/// A path is pushed before its includes are expanded and popped afterwards,
/// so sibling branches may legally include the same file again (diamond
/// inclusion); only re-entering a file still on the chain is an error.
#[derive(Debug, Default)]
pub struct IncludeChain {
    frames: Vec<PathBuf>,
}

impl IncludeChain {
    fn contains(&self, path: &Path) -> bool {
        self.frames.iter().any(|f| f == path)
    }

    fn enter(&mut self, path: PathBuf) {
        self.frames.push(path);
    }

    fn leave(&mut self) {
        self.frames.pop();
    }

    /// Paths in the order they were entered, joined for display.
    fn display(&self) -> String {
        self.frames
            .iter()
            .map(|f| f.display().to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Expand all include directives reachable from `entry` into one document.
///
/// Each call owns its own chain, so concurrent builds are independent.
pub fn expand_document(entry: &Path) -> Result<String> {
    let mut chain = IncludeChain::default();
    expand_file(entry, &mut chain)
}

fn expand_file(path: &Path, chain: &mut IncludeChain) -> Result<String> {
    let real = dunce::canonicalize(path).map_err(|_| MdstitchError::FileNotFound {
        path: path.display().to_string(),
    })?;

    if chain.contains(&real) {
        return Err(MdstitchError::CircularInclude {
            path: real.display().to_string(),
            chain: chain.display(),
        });
    }
    chain.enter(real.clone());

    let content = fs::read_to_string(&real).map_err(|e| MdstitchError::FileReadFailed {
        path: real.display().to_string(),
        reason: e.to_string(),
    })?;

    // Canonical file paths always have a parent directory.
    let dir = real.parent().unwrap_or_else(|| Path::new("."));

    let mut out = String::with_capacity(content.len());
    let mut cursor = 0;
    for caps in INCLUDE_RE.captures_iter(&content) {
        let Some(whole) = caps.get(0) else { continue };
        let rel = caps.get(1).map_or("", |m| m.as_str()).trim();

        out.push_str(&content[cursor..whole.start()]);

        let expanded = expand_file(&dir.join(rel), chain)?;
        out.push_str("\n<!-- BEGIN include: ");
        out.push_str(rel);
        out.push_str(" -->\n");
        out.push_str(&expanded);
        out.push_str("\n<!-- END include: ");
        out.push_str(rel);
        out.push_str(" -->\n");

        cursor = whole.end();
    }
    out.push_str(&content[cursor..]);

    chain.leave();
    Ok(out)
}
