// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use super::graph::{GraphDocument, Position};
use super::ids::ProjectId;

/// Renderer view state persisted next to the graph (pan/zoom and the last layout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub zoom: f64,
    pub pan: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Position::default(),
            layout: None,
        }
    }
}

/// An encoded preview image, opaque to everything except the renderer that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    mime: String,
    bytes: Vec<u8>,
}

impl Thumbnail {
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }

    pub fn from_data_url(url: &str) -> Result<Self, ThumbnailError> {
        let rest = url
            .strip_prefix("data:")
            .ok_or(ThumbnailError::NotADataUrl)?;
        let (mime, payload) = rest
            .split_once(";base64,")
            .ok_or(ThumbnailError::NotBase64)?;
        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|source| ThumbnailError::Decode { source })?;
        Ok(Self::new(mime, bytes))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailError {
    NotADataUrl,
    NotBase64,
    Decode { source: base64::DecodeError },
}

impl fmt::Display for ThumbnailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotADataUrl => f.write_str("thumbnail is not a data: url"),
            Self::NotBase64 => f.write_str("thumbnail data url is not base64 encoded"),
            Self::Decode { source } => write!(f, "cannot decode thumbnail: {source}"),
        }
    }
}

impl std::error::Error for ThumbnailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source } => Some(source),
            _ => None,
        }
    }
}

/// A project as it appears in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub project_id: ProjectId,
    pub name: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl ProjectSummary {
    /// The timestamp listings are ordered by.
    pub fn timestamp(&self) -> Option<&str> {
        self.updated_at.as_deref().or(self.created_at.as_deref())
    }
}

/// A persisted, named copy of the working graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSnapshot {
    pub project_id: Option<ProjectId>,
    pub name: String,
    pub document: GraphDocument,
    pub view: ViewState,
    pub thumbnail: Option<Thumbnail>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
