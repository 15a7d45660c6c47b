// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Character-based text helpers
//!
//! All size limits in the pipeline count Unicode scalar values, not bytes,
//! so every cut here lands on a char boundary.

/// Marker appended wherever content is cut for length
pub const TRUNCATION_MARKER: &str = "...[content truncated due to length]";

/// Number of characters in a string
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Collapse whitespace runs to single spaces and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Truncate to `max_chars`, appending the truncation marker when cut
pub fn truncate_with_marker(text: &str, max_chars: usize) -> String {
    if char_len(text) <= max_chars {
        return text.to_string();
    }
    let mut capped = truncate_chars(text, max_chars).to_string();
    capped.push_str(TRUNCATION_MARKER);
    capped
}

/// Split into consecutive chunks of at most `chunk_chars` characters
///
/// The last chunk may be shorter. Empty input yields no chunks.
pub fn chunk_by_chars(text: &str, chunk_chars: usize) -> Vec<String> {
    if chunk_chars == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for ch in text.chars() {
        current.push(ch);
        count += 1;
        if count == chunk_chars {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
