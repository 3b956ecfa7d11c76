// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The working graph and everything derived from it.
//!
//! The registry and styles are always recomputed from the document, never patched, so after any
//! mutation they describe exactly the current graph.

use crate::format::{ingest, GraphFormat, ParseError};
use crate::model::fixtures::seed_graph;
use crate::model::{Canvas, GraphDocument};
use crate::render::{Easing, LayoutName, LayoutRequest, RenderError, ViewRenderer};
use crate::style::{encode, AttributeRegistry, AttributeSelection, Channel, NodeStyle, SelectionError};

#[derive(Debug, Clone)]
pub struct Workspace {
    document: GraphDocument,
    registry: AttributeRegistry,
    selection: AttributeSelection,
    styles: Vec<NodeStyle>,
    layout: LayoutRequest,
}

impl Workspace {
    pub fn new(document: GraphDocument) -> Self {
        let registry = AttributeRegistry::discover(&document);
        let selection = AttributeSelection::default();
        let styles = encode(&document, &selection);
        Self {
            document,
            registry,
            selection,
            styles,
            layout: LayoutRequest::default(),
        }
    }

    pub fn document(&self) -> &GraphDocument {
        &self.document
    }

    pub fn registry(&self) -> &AttributeRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &AttributeSelection {
        &self.selection
    }

    /// Current per-node styles, parallel to `document().nodes()`.
    pub fn styles(&self) -> &[NodeStyle] {
        &self.styles
    }

    pub fn layout(&self) -> LayoutRequest {
        self.layout
    }

    /// Swaps in a new document wholesale and recomputes the registry and styles.
    ///
    /// Selections whose key no longer exists are reset to default styling.
    pub fn replace_document(&mut self, document: GraphDocument) {
        self.registry = AttributeRegistry::discover(&document);
        self.selection = self.registry.reconcile(&self.selection);
        self.document = document;
        self.reencode();
    }

    /// Parses and normalizes `text`, replacing the document only on success.
    pub fn ingest(&mut self, text: &str, format: GraphFormat, canvas: Canvas) -> Result<(), ParseError> {
        let document = ingest(text, format, canvas)?;
        self.replace_document(document);
        Ok(())
    }

    pub fn select(&mut self, channel: Channel, key: Option<&str>) -> Result<(), SelectionError> {
        self.registry.select(&mut self.selection, channel, key)?;
        self.reencode();
        Ok(())
    }

    pub fn set_layout(&mut self, layout: LayoutName) {
        self.layout.layout = layout;
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.layout.easing = easing;
    }

    /// Hands the current frame to the renderer, runs the selected layout, and keeps the resulting
    /// positions in the document.
    pub fn render_into<R: ViewRenderer + ?Sized>(&mut self, renderer: &mut R) -> Result<(), RenderError> {
        renderer.apply_frame(&self.document, &self.styles)?;
        let positions = renderer.run_layout(&self.layout)?;
        self.document.apply_positions(
            positions
                .iter()
                .map(|(node_id, position)| (node_id.as_str(), *position)),
        );
        Ok(())
    }

    fn reencode(&mut self) {
        self.styles = encode(&self.document, &self.selection);
        tracing::debug!(
            nodes = self.styles.len(),
            attributes = self.registry.len(),
            color = self.selection.color.as_deref().unwrap_or("-"),
            size = self.selection.size.as_deref().unwrap_or("-"),
            label = self.selection.label.as_deref().unwrap_or("-"),
            "encoded styles"
        );
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(seed_graph())
    }
}
