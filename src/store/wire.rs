// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{
    Attributes, EdgeId, EdgeRecord, GraphDocument, GraphError, IdError, NodeId, NodeRecord,
    Position, ProjectId, ProjectSnapshot, ProjectSummary, Thumbnail, ViewState,
};

const GRAPH_DATA_VERSION: u32 = 1;

#[derive(Debug)]
pub enum WireError {
    InvalidId {
        field: &'static str,
        value: String,
        source: IdError,
    },
    Graph {
        source: GraphError,
    },
    Json {
        source: serde_json::Error,
    },
    UnsupportedVersion {
        version: u32,
    },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { field, value, .. } => write!(f, "invalid {field}: {value:?}"),
            Self::Graph { source } => write!(f, "inconsistent graph: {source}"),
            Self::Json { source } => write!(f, "malformed graph data: {source}"),
            Self::UnsupportedVersion { version } => {
                write!(f, "unsupported graph data version: {version}")
            }
        }
    }
}

impl std::error::Error for WireError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidId { source, .. } => Some(source),
            Self::Graph { source } => Some(source),
            Self::Json { source } => Some(source),
            Self::UnsupportedVersion { .. } => None,
        }
    }
}

/// Servers hand out either string or integer ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProjectIdJson {
    Text(String),
    Number(serde_json::Number),
}

impl ProjectIdJson {
    fn into_project_id(self, field: &'static str) -> Result<ProjectId, WireError> {
        let value = match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        };
        ProjectId::new(value.clone()).map_err(|source| WireError::InvalidId {
            field,
            value,
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct NodeJson {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default)]
    position: Position,
    #[serde(default)]
    attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct EdgeJson {
    id: String,
    source: String,
    target: String,
    #[serde(default)]
    attributes: Attributes,
}

/// The `data` payload of a project: the graph plus renderer view state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct GraphDataJson {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    nodes: Vec<NodeJson>,
    #[serde(default)]
    edges: Vec<EdgeJson>,
    #[serde(default)]
    view: ViewState,
}

fn default_version() -> u32 {
    GRAPH_DATA_VERSION
}

/// Some stores keep `data` as a JSON-encoded string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum GraphDataField {
    Inline(GraphDataJson),
    Encoded(String),
}

impl GraphDataField {
    fn into_data(self) -> Result<GraphDataJson, WireError> {
        match self {
            Self::Inline(data) => Ok(data),
            Self::Encoded(text) => {
                serde_json::from_str(&text).map_err(|source| WireError::Json { source })
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProjectSummaryJson {
    id: ProjectIdJson,
    #[serde(default)]
    name: String,
    #[serde(default, alias = "createdAt")]
    created_at: Option<String>,
    #[serde(default, alias = "updatedAt")]
    updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProjectListJson {
    Bare(Vec<ProjectSummaryJson>),
    Wrapped { projects: Vec<ProjectSummaryJson> },
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProjectJson {
    id: ProjectIdJson,
    #[serde(default)]
    name: String,
    data: GraphDataField,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default, alias = "createdAt")]
    created_at: Option<String>,
    #[serde(default, alias = "updatedAt")]
    updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SavedProjectJson {
    id: ProjectIdJson,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SaveRequestJson<'a> {
    pub(crate) name: &'a str,
    pub(crate) app_name: &'a str,
    pub(crate) data: &'a GraphDataJson,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) thumbnail: Option<String>,
}

pub(crate) fn graph_data_to_json(document: &GraphDocument, view: &ViewState) -> GraphDataJson {
    GraphDataJson {
        version: GRAPH_DATA_VERSION,
        nodes: document
            .nodes()
            .iter()
            .map(|node| NodeJson {
                id: node.node_id().to_string(),
                label: Some(node.label().to_owned()),
                position: node.position(),
                attributes: node.attributes().clone(),
            })
            .collect(),
        edges: document
            .edges()
            .iter()
            .map(|edge| EdgeJson {
                id: edge.edge_id().to_string(),
                source: edge.source().to_string(),
                target: edge.target().to_string(),
                attributes: edge.attributes().clone(),
            })
            .collect(),
        view: view.clone(),
    }
}

fn node_id(field: &'static str, value: String) -> Result<NodeId, WireError> {
    NodeId::new(value.clone()).map_err(|source| WireError::InvalidId {
        field,
        value,
        source,
    })
}

pub(crate) fn graph_data_from_json(
    data: GraphDataJson,
) -> Result<(GraphDocument, ViewState), WireError> {
    if data.version > GRAPH_DATA_VERSION {
        return Err(WireError::UnsupportedVersion {
            version: data.version,
        });
    }

    let mut nodes = Vec::with_capacity(data.nodes.len());
    for node_json in data.nodes {
        let node_id = node_id("nodes[].id", node_json.id)?;
        let mut node = NodeRecord::new(node_id, node_json.position, node_json.attributes);
        if let Some(label) = node_json.label.filter(|label| !label.is_empty()) {
            node = node.with_label(label);
        }
        nodes.push(node);
    }

    let mut edges = Vec::with_capacity(data.edges.len());
    for edge_json in data.edges {
        let edge_id = EdgeId::new(edge_json.id.clone()).map_err(|source| WireError::InvalidId {
            field: "edges[].id",
            value: edge_json.id,
            source,
        })?;
        let source = node_id("edges[].source", edge_json.source)?;
        let target = node_id("edges[].target", edge_json.target)?;
        edges.push(EdgeRecord::new(edge_id, source, target, edge_json.attributes));
    }

    let document =
        GraphDocument::from_parts(nodes, edges).map_err(|source| WireError::Graph { source })?;
    Ok((document, data.view))
}

pub(crate) fn summaries_from_json(list: ProjectListJson) -> Result<Vec<ProjectSummary>, WireError> {
    let entries = match list {
        ProjectListJson::Bare(entries) | ProjectListJson::Wrapped { projects: entries } => entries,
    };
    entries
        .into_iter()
        .map(|entry| {
            Ok(ProjectSummary {
                project_id: entry.id.into_project_id("projects[].id")?,
                name: entry.name,
                created_at: entry.created_at,
                updated_at: entry.updated_at,
            })
        })
        .collect()
}

pub(crate) fn snapshot_from_json(project: ProjectJson) -> Result<ProjectSnapshot, WireError> {
    let project_id = project.id.into_project_id("id")?;
    let (document, view) = graph_data_from_json(project.data.into_data()?)?;
    // Previews are best effort; a thumbnail that is not a data URL is dropped.
    let thumbnail = project
        .thumbnail
        .as_deref()
        .and_then(|url| Thumbnail::from_data_url(url).ok());
    Ok(ProjectSnapshot {
        project_id: Some(project_id),
        name: project.name,
        document,
        view,
        thumbnail,
        created_at: project.created_at,
        updated_at: project.updated_at,
    })
}

pub(crate) fn saved_id_from_json(saved: SavedProjectJson) -> Result<ProjectId, WireError> {
    saved.id.into_project_id("id")
}
