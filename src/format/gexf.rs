// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! GEXF reader (1.1 through 1.3).
//!
//! Visualization elements from the `viz` namespace are flattened into plain attributes:
//! `position` → `x`/`y`/`z`, `size` → `size`, `color` → `color`, `shape` → `shape`,
//! `thickness` → `thickness`.

use std::collections::HashMap;

use roxmltree::Node;

use super::xml::{
    apply_defaults, children, expect_root, first_child, is_element, line_no, parse_document,
    required_attribute, AttrDecl, AttrType, RawEdge, RawGraph, RawNode,
};
use super::{GraphFormat, ParseError};
use crate::model::{AttrValue, Attributes};

#[derive(Debug, Default)]
struct AttributeClass {
    by_id: HashMap<String, AttrDecl>,
    order: Vec<String>,
}

impl AttributeClass {
    fn decls(&self) -> impl Iterator<Item = &AttrDecl> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }
}

fn attr_type(raw: Option<&str>) -> AttrType {
    match raw.map(str::trim) {
        Some("boolean") => AttrType::Boolean,
        Some("integer" | "long" | "float" | "double" | "short" | "byte" | "bigdecimal"
        | "biginteger") => AttrType::Number,
        _ => AttrType::Text,
    }
}

fn read_attribute_classes(
    graph: Node<'_, '_>,
) -> Result<(AttributeClass, AttributeClass), ParseError> {
    let mut node_class = AttributeClass::default();
    let mut edge_class = AttributeClass::default();

    for block in children(graph, "attributes") {
        let class = match block.attribute("class") {
            Some("node") => &mut node_class,
            Some("edge") => &mut edge_class,
            _ => continue,
        };
        for attribute in children(block, "attribute") {
            let id = required_attribute(attribute, "attribute", "id")?;
            let ty = attr_type(attribute.attribute("type"));
            let name = attribute.attribute("title").unwrap_or(id).to_owned();
            let default = first_child(attribute, "default")
                .map(|node| ty.parse_value(node.text().unwrap_or_default()));
            if class
                .by_id
                .insert(id.to_owned(), AttrDecl { name, ty, default })
                .is_none()
            {
                class.order.push(id.to_owned());
            }
        }
    }

    Ok((node_class, edge_class))
}

fn read_attvalues(
    element: Node<'_, '_>,
    class: &AttributeClass,
    attributes: &mut Attributes,
) -> Result<(), ParseError> {
    for block in children(element, "attvalues") {
        for attvalue in children(block, "attvalue") {
            // GEXF 1.1 used `id`, later versions use `for`.
            let Some(key) = attvalue.attribute("for").or_else(|| attvalue.attribute("id")) else {
                return Err(ParseError::MissingAttribute {
                    line_no: line_no(attvalue),
                    element: "attvalue",
                    attribute: "for",
                });
            };
            let raw = required_attribute(attvalue, "attvalue", "value")?;
            let decl = class
                .by_id
                .get(key)
                .cloned()
                .unwrap_or_else(|| AttrDecl::undeclared(key));
            attributes.insert(decl.name, decl.ty.parse_value(raw));
        }
    }
    Ok(())
}

fn number_attr(element: Node<'_, '_>, name: &str) -> Option<AttrValue> {
    element
        .attribute(name)
        .map(|raw| AttrType::Number.parse_value(raw))
}

fn color_value(color: Node<'_, '_>) -> Option<AttrValue> {
    if let Some(hex) = color.attribute("hex") {
        return Some(AttrValue::from(hex));
    }
    let channel = |name: &str| color.attribute(name).map(str::trim);
    let (r, g, b) = (channel("r")?, channel("g")?, channel("b")?);
    let text = match channel("a") {
        Some(a) => format!("rgba({r},{g},{b},{a})"),
        None => format!("rgb({r},{g},{b})"),
    };
    Some(AttrValue::String(text))
}

fn read_viz(element: Node<'_, '_>, attributes: &mut Attributes) {
    for child in element.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "position" => {
                for axis in ["x", "y", "z"] {
                    if let Some(value) = number_attr(child, axis) {
                        attributes.insert(axis.to_owned(), value);
                    }
                }
            }
            "size" => {
                if let Some(value) = number_attr(child, "value") {
                    attributes.insert("size".to_owned(), value);
                }
            }
            "thickness" => {
                if let Some(value) = number_attr(child, "value") {
                    attributes.insert("thickness".to_owned(), value);
                }
            }
            "color" => {
                if let Some(value) = color_value(child) {
                    attributes.insert("color".to_owned(), value);
                }
            }
            "shape" => {
                if let Some(value) = child.attribute("value") {
                    attributes.insert("shape".to_owned(), AttrValue::from(value));
                }
            }
            _ => {}
        }
    }
}

fn elements<'a, 'input: 'a>(
    graph: Node<'a, 'input>,
    container: &'a str,
    element: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    children(graph, container).flat_map(move |block| {
        block
            .children()
            .filter(move |child| is_element(child, element))
    })
}

pub(super) fn read_gexf(text: &str) -> Result<RawGraph, ParseError> {
    let doc = parse_document(text)?;
    let root = expect_root(&doc, "gexf")?;
    let graph = first_child(root, "graph").ok_or(ParseError::MissingGraph {
        format: GraphFormat::Gexf,
    })?;
    let (node_class, edge_class) = read_attribute_classes(graph)?;

    let mut raw = RawGraph::default();

    for node in elements(graph, "nodes", "node") {
        let id = required_attribute(node, "node", "id")?.to_owned();
        let mut attributes = Attributes::new();
        if let Some(label) = node.attribute("label") {
            attributes.insert("label".to_owned(), AttrValue::from(label));
        }
        read_attvalues(node, &node_class, &mut attributes)?;
        apply_defaults(&mut attributes, node_class.decls());
        read_viz(node, &mut attributes);
        raw.nodes.push(RawNode {
            id,
            line_no: line_no(node),
            attributes,
        });
    }

    for edge in elements(graph, "edges", "edge") {
        let source = required_attribute(edge, "edge", "source")?.to_owned();
        let target = required_attribute(edge, "edge", "target")?.to_owned();
        let mut attributes = Attributes::new();
        if let Some(label) = edge.attribute("label") {
            attributes.insert("label".to_owned(), AttrValue::from(label));
        }
        if let Some(weight) = number_attr(edge, "weight") {
            attributes.insert("weight".to_owned(), weight);
        }
        if let Some(kind) = edge.attribute("kind") {
            attributes.insert("kind".to_owned(), AttrValue::from(kind));
        }
        read_attvalues(edge, &edge_class, &mut attributes)?;
        apply_defaults(&mut attributes, edge_class.decls());
        read_viz(edge, &mut attributes);
        raw.edges.push(RawEdge {
            id: edge.attribute("id").map(str::to_owned),
            line_no: line_no(edge),
            source,
            target,
            attributes,
        });
    }

    Ok(raw)
}
