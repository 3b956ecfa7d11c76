// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Graph-interchange ingestion.
//!
//! GraphML and GEXF text is read into a dialect-neutral intermediate form and then normalized
//! into a validated [`GraphDocument`]: labels default to ids, missing positions are synthesized
//! inside the canvas, and edges without ids get generated ones.

mod gexf;
mod graphml;
mod xml;

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use rand::Rng;

use crate::model::{
    AttributeAccess, Canvas, EdgeId, EdgeRecord, GraphDocument, GraphError, NodeId, NodeRecord,
    Position,
};
use xml::RawGraph;

/// Share of the canvas used for synthesized positions, centered on the midpoint.
const JITTER_SPAN: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphFormat {
    GraphMl,
    Gexf,
}

impl GraphFormat {
    /// Detects the dialect from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        extension.parse().map_err(|_| ParseError::UnsupportedFormat {
            name: path.display().to_string(),
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GraphMl => "graphml",
            Self::Gexf => "gexf",
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "graphml" => Ok(Self::GraphMl),
            "gexf" => Ok(Self::Gexf),
            _ => Err(ParseError::UnsupportedFormat { name: s.to_owned() }),
        }
    }
}

#[derive(Debug)]
pub enum ParseError {
    UnsupportedFormat {
        name: String,
    },
    Xml {
        source: roxmltree::Error,
    },
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },
    MissingGraph {
        format: GraphFormat,
    },
    MissingAttribute {
        line_no: u32,
        element: &'static str,
        attribute: &'static str,
    },
    EmptyId {
        line_no: u32,
        element: &'static str,
    },
    Graph {
        source: GraphError,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat { name } => write!(
                f,
                "unsupported graph format: {name} (expected .gexf or .graphml)"
            ),
            Self::Xml { source } => write!(f, "malformed xml: {source}"),
            Self::UnexpectedRoot { expected, found } => {
                write!(f, "expected <{expected}> root element, found <{found}>")
            }
            Self::MissingGraph { format } => write!(f, "{format} document has no <graph> element"),
            Self::MissingAttribute {
                line_no,
                element,
                attribute,
            } => write!(
                f,
                "<{element}> on line {line_no} is missing required attribute '{attribute}'"
            ),
            Self::EmptyId { line_no, element } => {
                write!(f, "<{element}> on line {line_no} has an empty id")
            }
            Self::Graph { source } => write!(f, "inconsistent graph: {source}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Xml { source } => Some(source),
            Self::Graph { source } => Some(source),
            _ => None,
        }
    }
}

impl From<GraphError> for ParseError {
    fn from(source: GraphError) -> Self {
        Self::Graph { source }
    }
}

/// Parses `text` as `format` and normalizes it into a document.
pub fn ingest(text: &str, format: GraphFormat, canvas: Canvas) -> Result<GraphDocument, ParseError> {
    ingest_with_rng(text, format, canvas, &mut rand::thread_rng())
}

/// Like [`ingest`], with an explicit source of randomness for synthesized positions.
pub fn ingest_with_rng<R: Rng + ?Sized>(
    text: &str,
    format: GraphFormat,
    canvas: Canvas,
    rng: &mut R,
) -> Result<GraphDocument, ParseError> {
    let raw = match format {
        GraphFormat::GraphMl => graphml::read_graphml(text)?,
        GraphFormat::Gexf => gexf::read_gexf(text)?,
    };
    let document = normalize(raw, canvas, rng)?;
    tracing::debug!(
        %format,
        nodes = document.nodes().len(),
        edges = document.edges().len(),
        "ingested graph"
    );
    Ok(document)
}

fn synthesize_axis<R: Rng + ?Sized>(extent: f64, rng: &mut R) -> f64 {
    extent / 2.0 + (rng.gen::<f64>() - 0.5) * extent * JITTER_SPAN
}

fn normalize<R: Rng + ?Sized>(
    raw: RawGraph,
    canvas: Canvas,
    rng: &mut R,
) -> Result<GraphDocument, ParseError> {
    let mut nodes = Vec::with_capacity(raw.nodes.len());
    for node in raw.nodes {
        let node_id = NodeId::new(node.id).map_err(|_| ParseError::EmptyId {
            line_no: node.line_no,
            element: "node",
        })?;
        let x = node
            .attributes
            .get_numeric("x")
            .unwrap_or_else(|| synthesize_axis(canvas.width, rng));
        let y = node
            .attributes
            .get_numeric("y")
            .unwrap_or_else(|| synthesize_axis(canvas.height, rng));
        nodes.push(NodeRecord::new(node_id, Position::new(x, y), node.attributes));
    }

    let declared: BTreeSet<String> = raw.edges.iter().filter_map(|edge| edge.id.clone()).collect();
    let mut next_generated = 0_usize;
    let mut generate_id = || loop {
        let candidate = format!("e{next_generated}");
        next_generated += 1;
        if !declared.contains(&candidate) {
            break candidate;
        }
    };

    let mut edges = Vec::with_capacity(raw.edges.len());
    for edge in raw.edges {
        let id = edge.id.unwrap_or_else(&mut generate_id);
        let edge_id = EdgeId::new(id).map_err(|_| ParseError::EmptyId {
            line_no: edge.line_no,
            element: "edge",
        })?;
        let endpoint = |value: String| {
            NodeId::new(value).map_err(|_| ParseError::EmptyId {
                line_no: edge.line_no,
                element: "edge",
            })
        };
        let source = endpoint(edge.source)?;
        let target = endpoint(edge.target)?;
        edges.push(EdgeRecord::new(edge_id, source, target, edge.attributes));
    }

    Ok(GraphDocument::from_parts(nodes, edges)?)
}
