// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Content selection and size budgeting for summarization prompts

use super::SectionJudgment;
use crate::utils::text::{truncate_chars, truncate_with_marker};

/// Hard cap for prioritized (scored) content, in characters
pub const PRIORITIZED_CONTENT_CAP: usize = 12_000;

/// Cap for unscored whole-page content, in characters
pub const SIMPLE_CONTENT_CAP: usize = 30_000;

/// Pick the sections marked for inclusion, keeping input order
///
/// Judgments index into `sections`; a shorter judgment list leaves the tail
/// unselected. When nothing was selected but sections exist, all of them are
/// used — a page with content is never summarized from nothing.
pub fn select_sections<'a>(
    sections: &'a [String],
    judgments: &[SectionJudgment],
) -> Vec<&'a str> {
    let selected: Vec<&str> = judgments
        .iter()
        .enumerate()
        .filter(|(i, judgment)| judgment.include_in_summary && *i < sections.len())
        .map(|(i, _)| sections[i].as_str())
        .collect();

    if selected.is_empty() && !sections.is_empty() {
        return sections.iter().map(|s| s.as_str()).collect();
    }
    selected
}

/// Join selected sections and cut silently at the prioritized budget
pub fn prioritized_content(selected: &[&str]) -> String {
    let joined = selected.join("\n\n");
    truncate_chars(&joined, PRIORITIZED_CONTENT_CAP).to_string()
}

/// Cap whole-page text for the unscored path, marking any cut
pub fn simple_content(text: &str) -> String {
    truncate_with_marker(text, SIMPLE_CONTENT_CAP)
}
