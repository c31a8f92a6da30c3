//! Splitting a criteria block into individual statements.
//!
//! Registry criteria are written as bulleted (` - `) or numbered (` 1. `)
//! lists. The block is split on either marker in a single pass: nested
//! bullets are split like top-level ones, and any other nesting stays inside
//! the fragment it appears in.

use std::sync::LazyLock;

use regex::Regex;

static ITEM_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" - | \d\. ").expect("valid delimiter pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n\t ]+").expect("valid whitespace pattern"));

/// Fragment left behind when a header such as `Inclusion Criteria:` is cut
/// off right before its colon.
const DANGLING_HEADER: &str = ":";

/// Splits `text` into trimmed, whitespace-collapsed criteria in document order.
///
/// Empty fragments and a bare `:` are dropped. Nothing is deduplicated.
pub fn segment_criteria(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    ITEM_DELIMITER
        .split(text)
        .filter_map(normalize_fragment)
        .collect()
}

fn normalize_fragment(fragment: &str) -> Option<String> {
    let collapsed = WHITESPACE_RUN.replace_all(fragment, " ");
    let trimmed = collapsed.trim();
    if trimmed.is_empty() || trimmed == DANGLING_HEADER {
        None
    } else {
        Some(trimmed.to_string())
    }
}
