use std::fmt;

use crate::encode::{encode_html, normalize_uri};

/// A footnote label folded for comparison. Two labels name the same footnote iff their
/// normalized forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedLabel(String);

impl NormalizedLabel {
    pub fn new(raw: &str) -> Self {
        // Collapse runs of markdown whitespace (not Unicode whitespace) to a single space, then
        // drop the one leading/trailing space that may remain.
        let mut folded = String::with_capacity(raw.len());
        let mut in_ws = false;
        for ch in raw.chars() {
            if matches!(ch, '\t' | '\n' | '\r' | ' ') {
                if !in_ws {
                    folded.push(' ');
                }
                in_ws = true;
                continue;
            }
            in_ws = false;
            folded.push(ch);
        }
        let trimmed = folded.strip_prefix(' ').unwrap_or(&folded);
        let trimmed = trimmed.strip_suffix(' ').unwrap_or(trimmed);
        // Lower then upper, so `ẞ`, `ß` and `ss` all fold to `SS`.
        Self(trimmed.to_lowercase().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The id fragment used in `href`/`id` attributes for a footnote, already safe to embed in a
/// double-quoted attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeId(String);

impl SafeId {
    pub fn for_label(label: &NormalizedLabel) -> Self {
        let uri = normalize_uri(&label.as_str().to_lowercase());
        Self(encode_html(&uri).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
