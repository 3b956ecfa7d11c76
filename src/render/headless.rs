// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Canvas, GraphDocument, NodeId, Position, Thumbnail, ViewState};
use crate::style::NodeStyle;

use super::svg::{render_svg, SvgOptions};
use super::{LayoutRequest, RenderError, ViewRenderer};

const SVG_MIME: &str = "image/svg+xml";

#[derive(Debug, Clone)]
struct Frame {
    document: GraphDocument,
    styles: Vec<NodeStyle>,
}

/// A renderer without a display: it keeps the last frame, records layout requests and draws SVG.
///
/// Layouts keep the positions already present in the document.
#[derive(Debug, Clone)]
pub struct HeadlessRenderer {
    canvas: Canvas,
    frame: Option<Frame>,
    view: ViewState,
    layouts: Vec<LayoutRequest>,
}

impl HeadlessRenderer {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            frame: None,
            view: ViewState::default(),
            layouts: Vec::new(),
        }
    }

    /// Styles of the current frame, parallel to its nodes.
    pub fn styles(&self) -> &[NodeStyle] {
        self.frame.as_ref().map_or(&[], |frame| &frame.styles)
    }

    /// Layout requests received so far, oldest first.
    pub fn layout_history(&self) -> &[LayoutRequest] {
        &self.layouts
    }

    pub fn set_view(&mut self, zoom: f64, pan: Position) {
        self.view.zoom = zoom;
        self.view.pan = pan;
    }

    fn svg_options(&self) -> SvgOptions {
        SvgOptions {
            canvas: self.canvas,
            ..SvgOptions::default()
        }
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new(Canvas::default())
    }
}

impl ViewRenderer for HeadlessRenderer {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn apply_frame(
        &mut self,
        document: &GraphDocument,
        styles: &[NodeStyle],
    ) -> Result<(), RenderError> {
        if document.nodes().len() != styles.len() {
            return Err(RenderError::StyleCountMismatch {
                nodes: document.nodes().len(),
                styles: styles.len(),
            });
        }
        self.frame = Some(Frame {
            document: document.clone(),
            styles: styles.to_vec(),
        });
        Ok(())
    }

    fn run_layout(&mut self, request: &LayoutRequest) -> Result<Vec<(NodeId, Position)>, RenderError> {
        let frame = self.frame.as_ref().ok_or(RenderError::NoFrame)?;
        let positions = frame
            .document
            .nodes()
            .iter()
            .map(|node| (node.node_id().clone(), node.position()))
            .collect();
        self.layouts.push(*request);
        self.view.layout = Some(request.layout.to_string());
        tracing::debug!(layout = %request.layout, easing = %request.easing, "layout requested");
        Ok(positions)
    }

    fn view_state(&self) -> ViewState {
        self.view.clone()
    }

    fn restore_view_state(&mut self, view: &ViewState) {
        self.view = view.clone();
    }

    fn capture_thumbnail(&self) -> Result<Thumbnail, RenderError> {
        let svg = self.export_svg()?;
        Ok(Thumbnail::new(SVG_MIME, svg.into_bytes()))
    }

    fn export_svg(&self) -> Result<String, RenderError> {
        let frame = self.frame.as_ref().ok_or(RenderError::NoFrame)?;
        Ok(render_svg(
            &frame.document,
            &frame.styles,
            &self.view,
            self.svg_options(),
        ))
    }
}
