// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::attrs::{AttrValue, Attributes};
use super::graph::{EdgeRecord, GraphDocument, NodeRecord, Position};
use super::ids::{EdgeId, NodeId};

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

/// The seven-node graph a fresh workspace starts with.
pub fn seed_graph() -> GraphDocument {
    let nodes = [
        ("a", "Node A", "A", 10),
        ("b", "Node B", "A", 20),
        ("c", "Node C", "B", 30),
        ("d", "Node D", "B", 40),
        ("e", "Node E", "C", 50),
        ("f", "Node F", "C", 60),
        ("g", "Node G", "C", 70),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (id, label, category, score))| {
        let mut attrs = Attributes::new();
        attrs.insert("label".to_owned(), AttrValue::from(label));
        attrs.insert("category".to_owned(), AttrValue::from(category));
        attrs.insert("score".to_owned(), AttrValue::from(score as i64));
        // Two rows, matching the initial grid layout.
        let col = (idx % 4) as f64;
        let row = (idx / 4) as f64;
        NodeRecord::new(nid(id), Position::new(100.0 + col * 200.0, 150.0 + row * 300.0), attrs)
    })
    .collect();

    let edges = [("a", "b"), ("a", "c"), ("a", "d"), ("b", "e"), ("b", "f"), ("c", "g")]
        .into_iter()
        .enumerate()
        .map(|(idx, (source, target))| {
            EdgeRecord::new(
                EdgeId::new(format!("e{idx}")).expect("edge id"),
                nid(source),
                nid(target),
                Attributes::new(),
            )
        })
        .collect();

    GraphDocument::from_parts(nodes, edges).expect("seed graph is consistent")
}

#[cfg(test)]
pub(crate) fn scored_graph(scores: &[(&str, Option<AttrValue>)]) -> GraphDocument {
    let nodes = scores
        .iter()
        .map(|(id, score)| {
            let mut attrs = Attributes::new();
            if let Some(score) = score {
                attrs.insert("score".to_owned(), score.clone());
            }
            NodeRecord::new(nid(id), Position::default(), attrs)
        })
        .collect();
    GraphDocument::from_parts(nodes, Vec::new()).expect("scored graph")
}
