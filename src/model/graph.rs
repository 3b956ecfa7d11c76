// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::attrs::Attributes;
use super::ids::{EdgeId, NodeId};

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the visible drawing area in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Canvas {
    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    node_id: NodeId,
    label: String,
    position: Position,
    attributes: Attributes,
}

impl NodeRecord {
    pub fn new(node_id: NodeId, position: Position, attributes: Attributes) -> Self {
        let label = attributes
            .get("label")
            .map(|value| value.as_display_text())
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| node_id.to_string());
        Self {
            node_id,
            label,
            position,
            attributes,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    edge_id: EdgeId,
    source: NodeId,
    target: NodeId,
    attributes: Attributes,
}

impl EdgeRecord {
    pub fn new(edge_id: EdgeId, source: NodeId, target: NodeId, attributes: Attributes) -> Self {
        Self {
            edge_id,
            source,
            target,
            attributes,
        }
    }

    pub fn edge_id(&self) -> &EdgeId {
        &self.edge_id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// Which end of an edge failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEndpoint {
    Source,
    Target,
}

impl fmt::Display for EdgeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    DuplicateNode {
        node_id: NodeId,
    },
    DuplicateEdge {
        edge_id: EdgeId,
    },
    DanglingEdge {
        edge_id: EdgeId,
        endpoint: EdgeEndpoint,
        node_id: NodeId,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNode { node_id } => write!(f, "duplicate node id: {node_id}"),
            Self::DuplicateEdge { edge_id } => write!(f, "duplicate edge id: {edge_id}"),
            Self::DanglingEdge {
                edge_id,
                endpoint,
                node_id,
            } => write!(
                f,
                "edge {edge_id} references missing {endpoint} node: {node_id}"
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// The working graph: nodes and edges in document order.
///
/// Construction validates id uniqueness and edge endpoints, so every document in circulation
/// satisfies both. Multi-edges between the same pair are kept as separate records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphDocument {
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
    node_index: BTreeMap<NodeId, usize>,
}

impl GraphDocument {
    pub fn from_parts(nodes: Vec<NodeRecord>, edges: Vec<EdgeRecord>) -> Result<Self, GraphError> {
        let mut node_index = BTreeMap::new();
        for (idx, node) in nodes.iter().enumerate() {
            if node_index.insert(node.node_id.clone(), idx).is_some() {
                return Err(GraphError::DuplicateNode {
                    node_id: node.node_id.clone(),
                });
            }
        }

        let mut edge_ids = BTreeSet::new();
        for edge in &edges {
            if !edge_ids.insert(edge.edge_id.clone()) {
                return Err(GraphError::DuplicateEdge {
                    edge_id: edge.edge_id.clone(),
                });
            }
            for (endpoint, node_id) in [
                (EdgeEndpoint::Source, &edge.source),
                (EdgeEndpoint::Target, &edge.target),
            ] {
                if !node_index.contains_key(node_id) {
                    return Err(GraphError::DanglingEdge {
                        edge_id: edge.edge_id.clone(),
                        endpoint,
                        node_id: node_id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            nodes,
            edges,
            node_index,
        })
    }

    pub fn nodes(&self) -> &[NodeRecord] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    pub fn node(&self, node_id: &str) -> Option<&NodeRecord> {
        self.node_index.get(node_id).map(|&idx| &self.nodes[idx])
    }

    /// Position of `node_id` in [`Self::nodes`], which is also its index in parallel style lists.
    pub fn index_of(&self, node_id: &str) -> Option<usize> {
        self.node_index.get(node_id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Updates node positions in place, e.g. after the renderer ran a layout.
    ///
    /// Unknown ids are ignored.
    pub fn apply_positions<'a>(&mut self, positions: impl IntoIterator<Item = (&'a str, Position)>) {
        for (node_id, position) in positions {
            if let Some(&idx) = self.node_index.get(node_id) {
                self.nodes[idx].position = position;
            }
        }
    }
}
