// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use roxmltree::{Document, Node, ParsingOptions};

use super::ParseError;
use crate::model::attrs::parse_finite_number;
use crate::model::{AttrValue, Attributes};

/// Node as read from the source document, before ids and positions are resolved.
#[derive(Debug, Clone)]
pub(super) struct RawNode {
    pub id: String,
    pub line_no: u32,
    pub attributes: Attributes,
}

#[derive(Debug, Clone)]
pub(super) struct RawEdge {
    pub id: Option<String>,
    pub line_no: u32,
    pub source: String,
    pub target: String,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Default)]
pub(super) struct RawGraph {
    pub nodes: Vec<RawNode>,
    pub edges: Vec<RawEdge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum AttrType {
    Boolean,
    Number,
    Text,
}

impl AttrType {
    pub fn parse_value(self, raw: &str) -> AttrValue {
        match self {
            Self::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => AttrValue::Bool(true),
                "false" | "0" => AttrValue::Bool(false),
                _ => AttrValue::String(raw.to_owned()),
            },
            Self::Number => parse_finite_number(raw)
                .map(AttrValue::Number)
                .unwrap_or_else(|| AttrValue::String(raw.to_owned())),
            Self::Text => AttrValue::String(raw.to_owned()),
        }
    }
}

/// A declared attribute (GraphML `<key>`, GEXF `<attribute>`).
#[derive(Debug, Clone)]
pub(super) struct AttrDecl {
    pub name: String,
    pub ty: AttrType,
    pub default: Option<AttrValue>,
}

impl AttrDecl {
    pub fn undeclared(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ty: AttrType::Text,
            default: None,
        }
    }
}

pub(super) fn parse_document(text: &str) -> Result<Document<'_>, ParseError> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    Document::parse_with_options(text, options).map_err(|source| ParseError::Xml { source })
}

pub(super) fn line_no(node: Node<'_, '_>) -> u32 {
    node.document().text_pos_at(node.range().start).row
}

pub(super) fn is_element(node: &Node<'_, '_>, local_name: &str) -> bool {
    node.is_element() && node.tag_name().name() == local_name
}

pub(super) fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    local_name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |child| is_element(child, local_name))
}

pub(super) fn first_child<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    local_name: &str,
) -> Option<Node<'a, 'input>> {
    node.children().find(|child| is_element(child, local_name))
}

pub(super) fn required_attribute<'a>(
    node: Node<'a, '_>,
    element: &'static str,
    attribute: &'static str,
) -> Result<&'a str, ParseError> {
    node.attribute(attribute)
        .ok_or_else(|| ParseError::MissingAttribute {
            line_no: line_no(node),
            element,
            attribute,
        })
}

pub(super) fn expect_root<'a, 'input>(
    doc: &'a Document<'input>,
    expected: &'static str,
) -> Result<Node<'a, 'input>, ParseError> {
    let root = doc.root_element();
    if root.tag_name().name() != expected {
        return Err(ParseError::UnexpectedRoot {
            expected,
            found: root.tag_name().name().to_owned(),
        });
    }
    Ok(root)
}

/// Fills in declared defaults for attributes the element did not set.
pub(super) fn apply_defaults<'a>(
    attributes: &mut Attributes,
    decls: impl IntoIterator<Item = &'a AttrDecl>,
) {
    for decl in decls {
        if let Some(default) = &decl.default {
            attributes
                .entry(decl.name.clone())
                .or_insert_with(|| default.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_document, AttrType};
    use crate::model::AttrValue;

    #[test]
    fn typed_values_fall_back_to_text() {
        assert_eq!(AttrType::Number.parse_value("4.5"), AttrValue::Number(4.5));
        assert_eq!(AttrType::Number.parse_value("NaN"), AttrValue::from("NaN"));
        assert_eq!(AttrType::Boolean.parse_value("TRUE"), AttrValue::Bool(true));
        assert_eq!(AttrType::Boolean.parse_value("maybe"), AttrValue::from("maybe"));
        assert_eq!(AttrType::Text.parse_value(" 3 "), AttrValue::from(" 3 "));
    }

    #[test]
    fn doctype_is_accepted() {
        let text = "<?xml version=\"1.0\"?><!DOCTYPE graphml><graphml/>";
        assert!(parse_document(text).is_ok());
    }
}
