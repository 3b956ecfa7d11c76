// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! GraphML reader.
//!
//! Supports `<key>` declarations (name, type, default) and the nodes/edges that are direct
//! children of the first `<graph>`. Nested graphs and graph-level data are ignored.

use std::collections::HashMap;

use roxmltree::Node;

use super::xml::{
    apply_defaults, children, expect_root, first_child, line_no, parse_document,
    required_attribute, AttrDecl, AttrType, RawEdge, RawGraph, RawNode,
};
use super::{GraphFormat, ParseError};
use crate::model::Attributes;

#[derive(Debug, Default)]
struct KeyTable {
    node: HashMap<String, AttrDecl>,
    edge: HashMap<String, AttrDecl>,
    // Declaration order, so defaults are applied deterministically.
    node_order: Vec<String>,
    edge_order: Vec<String>,
}

impl KeyTable {
    fn insert(&mut self, domain: &str, key_id: &str, decl: AttrDecl) {
        let (for_node, for_edge) = match domain {
            "node" => (true, false),
            "edge" => (false, true),
            "all" => (true, true),
            _ => (false, false),
        };
        if for_node && self.node.insert(key_id.to_owned(), decl.clone()).is_none() {
            self.node_order.push(key_id.to_owned());
        }
        if for_edge && self.edge.insert(key_id.to_owned(), decl).is_none() {
            self.edge_order.push(key_id.to_owned());
        }
    }

    fn node_decls(&self) -> impl Iterator<Item = &AttrDecl> {
        self.node_order.iter().filter_map(|key| self.node.get(key))
    }

    fn edge_decls(&self) -> impl Iterator<Item = &AttrDecl> {
        self.edge_order.iter().filter_map(|key| self.edge.get(key))
    }
}

fn attr_type(raw: Option<&str>) -> AttrType {
    match raw.map(str::trim) {
        Some("boolean") => AttrType::Boolean,
        Some("int" | "long" | "float" | "double") => AttrType::Number,
        _ => AttrType::Text,
    }
}

fn read_keys(root: Node<'_, '_>) -> Result<KeyTable, ParseError> {
    let mut table = KeyTable::default();
    for key in children(root, "key") {
        let key_id = required_attribute(key, "key", "id")?;
        let ty = attr_type(key.attribute("attr.type"));
        let name = key.attribute("attr.name").unwrap_or(key_id).to_owned();
        let default = first_child(key, "default")
            .map(|node| ty.parse_value(node.text().unwrap_or_default()));
        let domain = key.attribute("for").unwrap_or("all");
        table.insert(domain, key_id, AttrDecl { name, ty, default });
    }
    Ok(table)
}

fn read_data(
    element: Node<'_, '_>,
    keys: &HashMap<String, AttrDecl>,
) -> Result<Attributes, ParseError> {
    let mut attributes = Attributes::new();
    for data in children(element, "data") {
        let key_id = required_attribute(data, "data", "key")?;
        let raw = data.text().unwrap_or_default();
        let (name, value) = match keys.get(key_id) {
            Some(decl) => (decl.name.clone(), decl.ty.parse_value(raw)),
            None => (key_id.to_owned(), AttrType::Text.parse_value(raw)),
        };
        attributes.insert(name, value);
    }
    Ok(attributes)
}

pub(super) fn read_graphml(text: &str) -> Result<RawGraph, ParseError> {
    let doc = parse_document(text)?;
    let root = expect_root(&doc, "graphml")?;
    let keys = read_keys(root)?;
    let graph = first_child(root, "graph").ok_or(ParseError::MissingGraph {
        format: GraphFormat::GraphMl,
    })?;

    let mut raw = RawGraph::default();

    for node in children(graph, "node") {
        let id = required_attribute(node, "node", "id")?.to_owned();
        let mut attributes = read_data(node, &keys.node)?;
        apply_defaults(&mut attributes, keys.node_decls());
        raw.nodes.push(RawNode {
            id,
            line_no: line_no(node),
            attributes,
        });
    }

    for edge in children(graph, "edge") {
        let source = required_attribute(edge, "edge", "source")?.to_owned();
        let target = required_attribute(edge, "edge", "target")?.to_owned();
        let mut attributes = read_data(edge, &keys.edge)?;
        apply_defaults(&mut attributes, keys.edge_decls());
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
