// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Keys that carry element identity or geometry and are never offered for visual mapping.
pub const RESERVED_ATTRIBUTE_KEYS: [&str; 4] = ["id", "label", "x", "y"];

pub fn is_reserved_attribute_key(key: &str) -> bool {
    RESERVED_ATTRIBUTE_KEYS.contains(&key)
}

/// Schema-less attribute map attached to nodes and edges.
pub type Attributes = BTreeMap<String, AttrValue>;

/// A single attribute value as declared by the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl AttrValue {
    /// Numeric view used by size mapping.
    ///
    /// Strings are trimmed and must parse as a finite decimal; booleans count as `1`/`0`.
    /// Blank and hex strings are non-numeric, unlike JS `Number()` (`""` → 0, `"0x1A"` → 26).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => value.is_finite().then_some(*value),
            Self::Bool(value) => Some(if *value { 1.0 } else { 0.0 }),
            Self::String(raw) => parse_finite_number(raw),
        }
    }

    /// Text view used by label and color mapping.
    pub fn as_display_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write_number(f, *value),
            Self::String(value) => f.write_str(value),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

pub(crate) fn parse_finite_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    // Integral values print without a fractional part ("10", not "10.0").
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        write!(f, "{}", value as i64)
    } else {
        write!(f, "{value}")
    }
}

/// Typed lookups over an attribute map.
pub trait AttributeAccess {
    fn get_numeric(&self, key: &str) -> Option<f64>;
    fn get_string(&self, key: &str) -> Option<String>;
}

impl AttributeAccess for Attributes {
    fn get_numeric(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AttrValue::as_number)
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).map(AttrValue::as_display_text)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{is_reserved_attribute_key, AttrValue, AttributeAccess, Attributes};

    #[rstest]
    #[case(AttrValue::Number(10.0), Some(10.0))]
    #[case(AttrValue::String(" 2.5 ".to_owned()), Some(2.5))]
    #[case(AttrValue::String("abc".to_owned()), None)]
    #[case(AttrValue::String("".to_owned()), None)]
    #[case(AttrValue::String("   ".to_owned()), None)]
    #[case(AttrValue::String("0x1A".to_owned()), None)]
    #[case(AttrValue::String("inf".to_owned()), None)]
    #[case(AttrValue::Bool(true), Some(1.0))]
    #[case(AttrValue::Number(f64::NAN), None)]
    fn numeric_coercion(#[case] value: AttrValue, #[case] expected: Option<f64>) {
        assert_eq!(value.as_number(), expected);
    }

    #[rstest]
    #[case(AttrValue::Number(10.0), "10")]
    #[case(AttrValue::Number(-0.5), "-0.5")]
    #[case(AttrValue::Bool(false), "false")]
    #[case(AttrValue::String("Node A".to_owned()), "Node A")]
    fn display_coercion(#[case] value: AttrValue, #[case] expected: &str) {
        assert_eq!(value.as_display_text(), expected);
    }

    #[test]
    fn accessors_read_through_the_map() {
        let mut attrs = Attributes::new();
        attrs.insert("score".to_owned(), AttrValue::from(42_i64));
        attrs.insert("category".to_owned(), AttrValue::from("A"));

        assert_eq!(attrs.get_numeric("score"), Some(42.0));
        assert_eq!(attrs.get_numeric("category"), None);
        assert_eq!(attrs.get_string("category").as_deref(), Some("A"));
        assert_eq!(attrs.get_string("missing"), None);
    }

    #[test]
    fn reserved_keys_cover_identity_and_geometry() {
        for key in ["id", "label", "x", "y"] {
            assert!(is_reserved_attribute_key(key));
        }
        assert!(!is_reserved_attribute_key("size"));
    }

    #[test]
    fn json_values_keep_their_type() {
        let parsed: Attributes =
            serde_json::from_str(r#"{"a": true, "b": 3, "c": "3"}"#).expect("attributes");
        assert_eq!(parsed["a"], AttrValue::Bool(true));
        assert_eq!(parsed["b"], AttrValue::Number(3.0));
        assert_eq!(parsed["c"], AttrValue::String("3".to_owned()));
    }
}
