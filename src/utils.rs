// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Ideographic (full-width) space, common in CJK input methods.
const FULL_WIDTH_SPACE: char = '\u{3000}';

/// Fold raw input into the canonical query string.
///
/// 1. Full-width spaces become ordinary spaces
/// 2. Any whitespace run collapses to a single space
/// 3. Leading/trailing whitespace is trimmed
/// 4. Lowercase (Unicode-aware; scripts without case pass through)
///
/// Total on every input. `""` and whitespace-only input normalize to `""`.
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(value: &str) -> String {
    value
        .replace(FULL_WIDTH_SPACE, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Join tags the way the booster compares them: space-separated, lowercased.
pub fn joined_tags(tags: &[String]) -> String {
    tags.join(" ").to_lowercase()
}

/// Count space-separated tokens. Empty text still counts as one token so the
/// field-length norm never divides by zero.
pub fn token_count(value: &str) -> usize {
    value.split(' ').filter(|t| !t.is_empty()).count().max(1)
}
