// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use crate::model::{Canvas, GraphDocument, Position, ViewState};
use crate::style::{HexColor, NodeStyle};

pub const EDGE_WIDTH: f64 = 2.0;
const ARROW_SIZE: f64 = 6.0;
const OUTLINE_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    pub canvas: Canvas,
    pub background: Option<HexColor>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            background: Some(HexColor::WHITE),
        }
    }
}

fn num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    rounded.to_string()
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn write_edge(out: &mut String, from: Position, to: Position, target_radius: f64) {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let len = dx.hypot(dy);

    if len <= f64::EPSILON {
        // Self loop: a small arc above the node.
        let r = target_radius.max(ARROW_SIZE);
        let _ = writeln!(
            out,
            r#"    <path d="M {x0} {y} C {x0} {top}, {x1} {top}, {x1} {y}" class="edge" marker-end="url(#arrow)"/>"#,
            x0 = num(from.x - r / 2.0),
            x1 = num(from.x + r / 2.0),
            y = num(from.y - r),
            top = num(from.y - r * 3.0),
        );
        return;
    }

    let end = Position::new(
        to.x - dx / len * target_radius,
        to.y - dy / len * target_radius,
    );
    let _ = writeln!(
        out,
        r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" class="edge" marker-end="url(#arrow)"/>"#,
        num(from.x),
        num(from.y),
        num(end.x),
        num(end.y),
    );
}

/// Draws the document with the given styles, honoring the view's zoom and pan.
///
/// `styles` is parallel to `document.nodes()`.
pub fn render_svg(
    document: &GraphDocument,
    styles: &[NodeStyle],
    view: &ViewState,
    options: SvgOptions,
) -> String {
    let Canvas { width, height } = options.canvas;
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(width),
        h = num(height),
    );
    let _ = writeln!(
        out,
        r#"  <defs><marker id="arrow" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="{a}" markerHeight="{a}" markerUnits="userSpaceOnUse" orient="auto"><path d="M 0 0 L 10 5 L 0 10 z" fill="{c}"/></marker></defs>"#,
        a = num(ARROW_SIZE),
        c = HexColor::EDGE_GRAY,
    );
    let _ = writeln!(
        out,
        r#"  <style>.edge {{ stroke: {}; stroke-width: {}; fill: none; }} text {{ font-family: sans-serif; text-anchor: middle; dominant-baseline: central; }}</style>"#,
        HexColor::EDGE_GRAY,
        num(EDGE_WIDTH),
    );
    if let Some(background) = options.background {
        let _ = writeln!(
            out,
            r#"  <rect width="100%" height="100%" fill="{background}"/>"#
        );
    }
    let _ = writeln!(
        out,
        r#"  <g transform="translate({} {}) scale({})">"#,
        num(view.pan.x),
        num(view.pan.y),
        num(view.zoom),
    );

    let nodes = document.nodes();
    for edge in document.edges() {
        let (Some(source), Some(target)) = (
            document.node(edge.source().as_str()),
            document.index_of(edge.target().as_str()),
        ) else {
            continue;
        };
        let target_radius = styles
            .get(target)
            .map_or(0.0, |style| style.width.max(style.height) / 2.0);
        write_edge(&mut out, source.position(), nodes[target].position(), target_radius);
    }

    for (node, style) in nodes.iter().zip(styles) {
        let Position { x, y } = node.position();
        let _ = writeln!(
            out,
            r#"    <ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}" stroke="{}" stroke-width="{}"><title>{}</title></ellipse>"#,
            num(x),
            num(y),
            num(style.width / 2.0),
            num(style.height / 2.0),
            style.background_color,
            style.outline_color,
            num(OUTLINE_WIDTH),
            escape_xml(node.node_id().as_str()),
        );
        if !style.label.is_empty() {
            let _ = writeln!(
                out,
                r#"    <text x="{}" y="{}" font-size="{}">{}</text>"#,
                num(x),
                num(y),
                num(style.font_size),
                escape_xml(&style.label),
            );
        }
    }

    out.push_str("  </g>\n</svg>\n");
    out
}
