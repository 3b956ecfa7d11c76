// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The renderer seam.
//!
//! Core code hands a finalized element list (document plus per-node styles) and layout requests
//! to a [`ViewRenderer`] and reads back positions, view state, thumbnails and SVG. Layout
//! algorithms live behind the seam; [`HeadlessRenderer`] keeps positions as given.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::model::{Canvas, GraphDocument, NodeId, Position, Thumbnail, ViewState};
use crate::style::NodeStyle;
use crate::suggest::closest_match;

mod headless;
mod svg;

pub use headless::HeadlessRenderer;
pub use svg::{render_svg, SvgOptions, EDGE_WIDTH};

pub const LAYOUT_ANIMATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutName {
    Grid,
    Random,
    Circle,
    Concentric,
    Breadthfirst,
    #[default]
    Cose,
    Preset,
}

impl LayoutName {
    pub const ALL: [Self; 7] = [
        Self::Grid,
        Self::Random,
        Self::Circle,
        Self::Concentric,
        Self::Breadthfirst,
        Self::Cose,
        Self::Preset,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Random => "random",
            Self::Circle => "circle",
            Self::Concentric => "concentric",
            Self::Breadthfirst => "breadthfirst",
            Self::Cose => "cose",
            Self::Preset => "preset",
        }
    }
}

impl fmt::Display for LayoutName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutName {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|layout| layout.as_str() == needle)
            .ok_or_else(|| RenderError::UnknownLayout {
                name: s.to_owned(),
                suggestion: closest_match(&needle, Self::ALL.map(Self::as_str)).map(str::to_owned),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub const ALL: [Self; 5] = [
        Self::Linear,
        Self::Ease,
        Self::EaseIn,
        Self::EaseOut,
        Self::EaseInOut,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Easing {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|easing| easing.as_str() == needle)
            .ok_or_else(|| RenderError::UnknownEasing {
                name: s.to_owned(),
                suggestion: closest_match(&needle, Self::ALL.map(Self::as_str)).map(str::to_owned),
            })
    }
}

/// A request to (re)position all nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRequest {
    pub layout: LayoutName,
    pub easing: Easing,
    pub animate: bool,
    pub duration: Duration,
}

impl LayoutRequest {
    pub fn new(layout: LayoutName, easing: Easing) -> Self {
        Self {
            layout,
            easing,
            animate: true,
            duration: LAYOUT_ANIMATION,
        }
    }
}

impl Default for LayoutRequest {
    fn default() -> Self {
        Self::new(LayoutName::default(), Easing::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    NoFrame,
    StyleCountMismatch { nodes: usize, styles: usize },
    UnknownLayout { name: String, suggestion: Option<String> },
    UnknownEasing { name: String, suggestion: Option<String> },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, name, suggestion) = match self {
            Self::NoFrame => return f.write_str("renderer has no frame to draw"),
            Self::StyleCountMismatch { nodes, styles } => {
                return write!(f, "frame has {nodes} nodes but {styles} styles");
            }
            Self::UnknownLayout { name, suggestion } => ("layout", name, suggestion),
            Self::UnknownEasing { name, suggestion } => ("easing", name, suggestion),
        };
        write!(f, "unknown {kind}: {name}")?;
        if let Some(suggestion) = suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

impl std::error::Error for RenderError {}

/// The rendering/layout engine as seen from the core.
pub trait ViewRenderer {
    fn canvas(&self) -> Canvas;

    /// Replaces the displayed elements. `styles` is parallel to `document.nodes()`.
    fn apply_frame(
        &mut self,
        document: &GraphDocument,
        styles: &[NodeStyle],
    ) -> Result<(), RenderError>;

    /// Runs a layout over the current frame and returns the resulting node positions.
    fn run_layout(&mut self, request: &LayoutRequest) -> Result<Vec<(NodeId, Position)>, RenderError>;

    fn view_state(&self) -> ViewState;

    fn restore_view_state(&mut self, view: &ViewState);

    fn capture_thumbnail(&self) -> Result<Thumbnail, RenderError>;

    fn export_svg(&self) -> Result<String, RenderError>;
}
