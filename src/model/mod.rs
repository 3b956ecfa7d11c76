// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A graph document holds nodes and edges with schema-less attribute maps; projects wrap a
//! document with its view state and thumbnail for remote persistence.

pub mod attrs;
pub mod fixtures;
pub mod graph;
pub mod ids;
pub mod project;

pub use attrs::{
    is_reserved_attribute_key, AttrValue, AttributeAccess, Attributes, RESERVED_ATTRIBUTE_KEYS,
};
pub use graph::{
    Canvas, EdgeEndpoint, EdgeRecord, GraphDocument, GraphError, NodeRecord, Position,
};
pub use ids::{EdgeId, Id, IdError, NodeId, ProjectId};
pub use project::{ProjectSnapshot, ProjectSummary, Thumbnail, ThumbnailError, ViewState};
