// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Deterministic synthetic graphs, rendered as GraphML and GEXF text.

use std::fmt::Write as _;

use netweave::model::GraphDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    LargeSparse,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::LargeSparse];

    pub fn id(self) -> &'static str {
        match self {
            Case::Small => "small",
            Case::Medium => "medium",
            Case::LargeSparse => "large_sparse",
        }
    }

    pub fn node_count(self) -> usize {
        match self {
            Case::Small => 50,
            Case::Medium => 1_000,
            Case::LargeSparse => 10_000,
        }
    }

    fn edges_per_node(self) -> usize {
        match self {
            Case::Small | Case::Medium => 4,
            Case::LargeSparse => 2,
        }
    }
}

const GROUPS: [&str; 6] = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"];

// Neighbor offsets are fixed so the edge set is identical across runs.
fn edges(case: Case) -> impl Iterator<Item = (usize, usize)> {
    let nodes = case.node_count();
    (0..nodes).flat_map(move |source| {
        (1..=case.edges_per_node()).map(move |step| (source, (source + step * step * 7) % nodes))
    })
}

fn degree(case: Case, index: usize) -> usize {
    case.edges_per_node() + index % 11
}

pub fn graphml(case: Case) -> String {
    let mut out = String::with_capacity(case.node_count() * 160);
    out.push_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <key id="d0" for="node" attr.name="label" attr.type="string"/>
  <key id="d1" for="node" attr.name="group" attr.type="string"/>
  <key id="d2" for="node" attr.name="degree" attr.type="int"/>
  <key id="d3" for="node" attr.name="x" attr.type="double"/>
  <key id="d4" for="node" attr.name="y" attr.type="double"/>
  <key id="d5" for="edge" attr.name="weight" attr.type="double">
    <default>1.0</default>
  </key>
  <graph id="G" edgedefault="undirected">
"#,
    );
    for index in 0..case.node_count() {
        let _ = writeln!(
            out,
            r#"    <node id="n{index}"><data key="d0">Node {index}</data><data key="d1">{}</data><data key="d2">{}</data><data key="d3">{}</data><data key="d4">{}</data></node>"#,
            GROUPS[index % GROUPS.len()],
            degree(case, index),
            (index % 100) * 12,
            (index / 100) * 12,
        );
    }
    for (index, (source, target)) in edges(case).enumerate() {
        if index % 3 == 0 {
            let _ = writeln!(
                out,
                r#"    <edge id="e{index}" source="n{source}" target="n{target}"><data key="d5">{}</data></edge>"#,
                index % 5 + 1
            );
        } else {
            let _ = writeln!(
                out,
                r#"    <edge id="e{index}" source="n{source}" target="n{target}"/>"#
            );
        }
    }
    out.push_str("  </graph>\n</graphml>\n");
    out
}

pub fn gexf(case: Case) -> String {
    let mut out = String::with_capacity(case.node_count() * 220);
    out.push_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<gexf xmlns="http://gexf.net/1.3" xmlns:viz="http://gexf.net/1.3/viz" version="1.3">
  <graph defaultedgetype="undirected">
    <attributes class="node">
      <attribute id="0" title="group" type="string"/>
      <attribute id="1" title="degree" type="integer"/>
    </attributes>
    <nodes>
"#,
    );
    for index in 0..case.node_count() {
        let _ = writeln!(
            out,
            r#"      <node id="{index}" label="Node {index}"><attvalues><attvalue for="0" value="{}"/><attvalue for="1" value="{}"/></attvalues><viz:size value="{}"/><viz:position x="{}" y="{}" z="0"/></node>"#,
            GROUPS[index % GROUPS.len()],
            degree(case, index),
            4 + index % 9,
            (index % 100) * 12,
            (index / 100) * 12,
        );
    }
    out.push_str("    </nodes>\n    <edges>\n");
    for (index, (source, target)) in edges(case).enumerate() {
        let _ = writeln!(
            out,
            r#"      <edge id="{index}" source="{source}" target="{target}" weight="{}"/>"#,
            index % 5 + 1
        );
    }
    out.push_str("    </edges>\n  </graph>\n</gexf>\n");
    out
}

pub fn checksum_document(document: &GraphDocument) -> u64 {
    let mut acc = 0u64;
    for node in document.nodes() {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(node.node_id().as_str().len() as u64);
        acc = acc.wrapping_add(node.attributes().len() as u64);
        acc = acc.wrapping_add(node.position().x as u64);
    }
    for edge in document.edges() {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(edge.source().as_str().len() as u64);
        acc = acc.wrapping_add(edge.target().as_str().len() as u64);
    }
    acc
}
