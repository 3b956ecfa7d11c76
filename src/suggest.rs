// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! "Did you mean" suggestions for user-typed names.

/// Minimum similarity (0..1) for a candidate to be offered.
const MIN_RATIO: f64 = 0.6;

/// Returns the candidate most similar to `needle`, if any is similar enough.
pub fn closest_match<'a>(
    needle: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let mut best: Option<(f64, &'a str)> = None;
    for candidate in candidates {
        let ratio = rapidfuzz::fuzz::ratio(needle.chars(), candidate.to_lowercase().chars());
        if ratio < MIN_RATIO {
            continue;
        }
        if best.map_or(true, |(best_ratio, _)| ratio > best_ratio) {
            best = Some((ratio, candidate));
        }
    }
    best.map(|(_, candidate)| candidate)
}
