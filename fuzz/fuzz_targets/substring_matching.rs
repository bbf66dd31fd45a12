// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for approximate substring matching.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use shelfsearch::fuzzy::substring_within;

#[derive(Arbitrary, Debug)]
struct Input {
    pattern: String,
    text: String,
    max: u8,
}

fuzz_target!(|input: Input| {
    let pattern: String = input.pattern.chars().take(32).collect();
    let text: String = input.text.chars().take(256).collect();
    let max = usize::from(input.max % 8);

    if let Some(hit) = substring_within(&pattern, &text, max) {
        assert!(hit.distance <= max);
        assert!(hit.start <= text.chars().count());
        if hit.distance == 0 {
            assert!(text.contains(&pattern));
        }
    }
});
