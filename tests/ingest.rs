// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Ingest, attribute discovery and visual mapping through the public API.

use netweave::format::{ingest, GraphFormat, ParseError};
use netweave::model::{AttrValue, Canvas, EdgeEndpoint, GraphError, Position};
use netweave::style::{hash_color, Channel, HexColor, DEFAULT_NODE_SIZE};
use netweave::workspace::Workspace;

const GEXF: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gexf xmlns="http://gexf.net/1.3" xmlns:viz="http://gexf.net/1.3/viz" version="1.3">
  <graph defaultedgetype="undirected">
    <attributes class="node">
      <attribute id="0" title="modularity_class" type="integer"/>
      <attribute id="1" title="role" type="string">
        <default>minor</default>
      </attribute>
    </attributes>
    <nodes>
      <node id="0" label="Myriel">
        <attvalues><attvalue for="0" value="1"/><attvalue for="1" value="bishop"/></attvalues>
        <viz:size value="28.7"/>
        <viz:position x="-87.5" y="43.1" z="0"/>
      </node>
      <node id="1" label="Napoleon">
        <attvalues><attvalue for="0" value="1"/></attvalues>
        <viz:size value="4"/>
        <viz:position x="-200" y="-17.7" z="0"/>
      </node>
      <node id="2" label="Valjean">
        <attvalues><attvalue for="0" value="2"/></attvalues>
        <viz:size value="100"/>
        <viz:position x="15" y="80" z="0"/>
      </node>
    </nodes>
    <edges>
      <edge id="0" source="1" target="0" weight="1"/>
      <edge id="1" source="2" target="0" weight="8"/>
    </edges>
  </graph>
</gexf>
"#;

const GRAPHML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <key id="w" for="edge" attr.name="weight" attr.type="double"/>
  <key id="h" for="node" attr.name="house" attr.type="string"/>
  <graph edgedefault="undirected">
    <node id="arya"><data key="h">Stark</data></node>
    <node id="cersei"><data key="h">Lannister</data></node>
    <edge source="arya" target="cersei"><data key="w">3</data></edge>
    <edge source="arya" target="cersei"/>
  </graph>
</graphml>
"#;

#[test]
fn gexf_flattens_viz_and_applies_defaults() {
    let doc = ingest(GEXF, GraphFormat::Gexf, Canvas::default()).expect("ingest");
    assert_eq!(doc.nodes().len(), 3);
    assert_eq!(doc.edges().len(), 2);

    let myriel = doc.node("0").expect("node 0");
    assert_eq!(myriel.label(), "Myriel");
    assert_eq!(myriel.position(), Position::new(-87.5, 43.1));
    assert_eq!(
        myriel.attributes().get("role"),
        Some(&AttrValue::from("bishop"))
    );
    assert_eq!(myriel.attributes().get("size"), Some(&AttrValue::from(28.7)));

    let napoleon = doc.node("1").expect("node 1");
    assert_eq!(
        napoleon.attributes().get("role"),
        Some(&AttrValue::from("minor"))
    );
    assert_eq!(doc.edges()[1].attributes().get("weight"), Some(&AttrValue::from(8.0)));
}

#[test]
fn graphml_without_coordinates_lands_near_canvas_center() {
    let canvas = Canvas::default();
    let doc = ingest(GRAPHML, GraphFormat::GraphMl, canvas).expect("ingest");

    let center = canvas.center();
    for node in doc.nodes() {
        let position = node.position();
        assert!((position.x - center.x).abs() <= canvas.width * 0.4);
        assert!((position.y - center.y).abs() <= canvas.height * 0.4);
    }

    let ids: Vec<&str> = doc.edges().iter().map(|edge| edge.edge_id().as_str()).collect();
    assert_eq!(ids, vec!["e0", "e1"]);
    assert_eq!(doc.node("arya").map(|node| node.label()), Some("arya"));
}

#[test]
fn dangling_edges_reject_the_whole_document() {
    let text = r#"<graphml><graph>
        <node id="a"/>
        <edge id="broken" source="a" target="ghost"/>
    </graph></graphml>"#;

    let err = ingest(text, GraphFormat::GraphMl, Canvas::default()).unwrap_err();
    match err {
        ParseError::Graph {
            source:
                GraphError::DanglingEdge {
                    edge_id,
                    endpoint,
                    node_id,
                },
        } => {
            assert_eq!(edge_id.as_str(), "broken");
            assert_eq!(endpoint, EdgeEndpoint::Target);
            assert_eq!(node_id.as_str(), "ghost");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn wrong_root_is_reported() {
    let err = ingest(GRAPHML, GraphFormat::Gexf, Canvas::default()).unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedRoot { expected: "gexf", ref found } if found == "graphml"
    ));
}

#[test]
fn size_and_color_mapping_follow_the_active_document() {
    let mut workspace = Workspace::default();
    workspace
        .ingest(GEXF, GraphFormat::Gexf, Canvas::default())
        .expect("ingest gexf");

    let keys: Vec<&str> = workspace.registry().keys().collect();
    assert_eq!(keys, vec!["modularity_class", "role", "size", "z"]);

    workspace.select(Channel::Size, Some("size")).expect("size");
    workspace
        .select(Channel::Color, Some("modularity_class"))
        .expect("color");
    let widths: Vec<f64> = workspace.styles().iter().map(|style| style.width).collect();
    assert_eq!(widths[1], 20.0);
    assert_eq!(widths[2], 80.0);
    assert!(widths[0] > 20.0 && widths[0] < 80.0);
    assert_eq!(workspace.styles()[0].background_color, hash_color("1"));
    assert_eq!(
        workspace.styles()[0].background_color,
        workspace.styles()[1].background_color
    );

    workspace
        .ingest(GRAPHML, GraphFormat::GraphMl, Canvas::default())
        .expect("ingest graphml");
    assert_eq!(workspace.selection().size, None);
    assert_eq!(workspace.selection().color, None);
    assert!(workspace.registry().contains("house"));
    for style in workspace.styles() {
        assert_eq!(style.width, DEFAULT_NODE_SIZE);
        assert_eq!(style.background_color, HexColor::BASE_GRAY);
    }
}

#[test]
fn failed_ingest_keeps_the_previous_graph() {
    let mut workspace = Workspace::default();
    workspace
        .ingest(GRAPHML, GraphFormat::GraphMl, Canvas::default())
        .expect("ingest");
    workspace.select(Channel::Color, Some("house")).expect("color");

    workspace
        .ingest("<graphml><graph>", GraphFormat::GraphMl, Canvas::default())
        .unwrap_err();
    assert_eq!(workspace.document().nodes().len(), 2);
    assert_eq!(workspace.selection().color.as_deref(), Some("house"));
}
