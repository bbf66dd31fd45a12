// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring matching with an early-exit optimization.
//!
//! Plain Levenshtein compares two whole strings. Search needs something
//! looser: how many edits does it take to find the *pattern* somewhere inside
//! the *text*? That's Sellers' variant: the first DP row is all zeros, so a
//! match may start at any text position for free.
//!
//! The key insight for the early exit: if the pattern is longer than the text
//! by more than `max`, at least that many insertions are unavoidable. Skip the
//! O(nm) DP entirely.

/// Where (and how well) a pattern was found inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstringMatch {
    /// Edits needed to turn some substring of the text into the pattern.
    pub distance: usize,
    /// Character offset in the text where that substring starts.
    pub start: usize,
}

/// Find `pattern` inside `text` with at most `max` edits.
///
/// Character-based, so CJK and accented text count one edit per glyph. Exact
/// occurrences short-circuit to distance 0 at their first position. On ties
/// the match ending earliest in the text wins.
///
/// An empty pattern never matches.
pub fn substring_within(pattern: &str, text: &str, max: usize) -> Option<SubstringMatch> {
    if pattern.is_empty() {
        return None;
    }

    if let Some(byte_pos) = text.find(pattern) {
        return Some(SubstringMatch {
            distance: 0,
            start: text[..byte_pos].chars().count(),
        });
    }
    if max == 0 {
        return None;
    }

    let p: Vec<char> = pattern.chars().collect();
    let m = p.len();
    let n = text.chars().count();

    // Early-exit: the unmatched remainder of the pattern must be inserted
    if m > n + max {
        return None;
    }

    // col[i]: edits aligning p[..i] to a substring ending at the current column.
    // start[i]: where that substring begins.
    let mut col: Vec<usize> = (0..=m).collect();
    let mut start: Vec<usize> = vec![0; m + 1];
    let mut next = vec![0usize; m + 1];
    let mut next_start = vec![0usize; m + 1];

    let mut best: Option<SubstringMatch> = None;

    for (j, tc) in text.chars().enumerate() {
        next[0] = 0;
        next_start[0] = j + 1;

        for i in 1..=m {
            let cost = usize::from(p[i - 1] != tc);
            let mut value = col[i - 1] + cost;
            let mut from = start[i - 1];

            if col[i] + 1 < value {
                value = col[i] + 1;
                from = start[i];
            }
            if next[i - 1] + 1 < value {
                value = next[i - 1] + 1;
                from = next_start[i - 1];
            }

            next[i] = value;
            next_start[i] = from;
        }

        std::mem::swap(&mut col, &mut next);
        std::mem::swap(&mut start, &mut next_start);

        if col[m] <= max && best.map_or(true, |b| col[m] < b.distance) {
            best = Some(SubstringMatch {
                distance: col[m],
                start: start[m],
            });
        }
    }

    best
}
