// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// A 24-bit RGB color, displayed as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(u32);

impl HexColor {
    pub const BASE_GRAY: Self = Self(0x66_66_66);
    pub const EDGE_GRAY: Self = Self(0xCC_CC_CC);
    pub const WHITE: Self = Self(0xFF_FF_FF);

    pub const fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Deterministic string → color hash.
///
/// Walks UTF-16 code units with `hash = unit + ((hash << 5) - hash)` in wrapping 32-bit signed
/// arithmetic and keeps the low 24 bits, which reproduces colors from earlier renders exactly.
pub fn hash_color(value: &str) -> HexColor {
    let hash = value.encode_utf16().fold(0_i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });
    HexColor::from_rgb(hash as u32)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{hash_color, HexColor};

    #[rstest]
    #[case("", "#000000")]
    #[case("A", "#000041")]
    #[case("B", "#000042")]
    #[case("ab", "#000C21")]
    #[case("hello", "#E918D2")]
    #[case("Node A", "#6525C3")]
    fn known_colors(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(hash_color(input).to_string(), expected);
    }

    #[test]
    fn is_deterministic_and_always_six_hex_digits() {
        for input in ["", "x", "Node A", "naïve", "日本語", "a much longer category name 123"] {
            let first = hash_color(input).to_string();
            assert_eq!(first, hash_color(input).to_string());
            assert_eq!(first.len(), 7);
            assert!(first.starts_with('#'));
            assert!(first[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn wraps_instead_of_overflowing() {
        let long = "z".repeat(10_000);
        assert_eq!(hash_color(&long), hash_color(&long));
    }

    #[test]
    fn base_gray_renders_as_six_digits() {
        assert_eq!(HexColor::BASE_GRAY.to_string(), "#666666");
    }
}
