// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::color::{hash_color, HexColor};
use super::registry::AttributeSelection;
use crate::model::{AttributeAccess, GraphDocument, NodeId, NodeRecord};

pub const DEFAULT_NODE_SIZE: f64 = 30.0;
pub const MIN_MAPPED_SIZE: f64 = 20.0;
pub const MAX_MAPPED_SIZE: f64 = 80.0;
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Concrete visual properties for one node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle {
    pub node_id: NodeId,
    pub background_color: HexColor,
    pub outline_color: HexColor,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub font_size: f64,
}

impl NodeStyle {
    pub fn default_for(node: &NodeRecord) -> Self {
        Self {
            node_id: node.node_id().clone(),
            background_color: HexColor::BASE_GRAY,
            outline_color: HexColor::BASE_GRAY,
            width: DEFAULT_NODE_SIZE,
            height: DEFAULT_NODE_SIZE,
            label: node.label().to_owned(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Value range of the size attribute across all nodes that carry a numeric value for it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SizeRange {
    min: f64,
    max: f64,
}

impl SizeRange {
    fn scan(document: &GraphDocument, key: &str) -> Option<Self> {
        document
            .nodes()
            .iter()
            .filter_map(|node| node.attributes().get_numeric(key))
            .fold(None, |range, value| match range {
                None => Some(Self {
                    min: value,
                    max: value,
                }),
                Some(Self { min, max }) => Some(Self {
                    min: min.min(value),
                    max: max.max(value),
                }),
            })
    }

    fn map(self, value: f64) -> f64 {
        if self.max == self.min {
            return DEFAULT_NODE_SIZE;
        }
        MIN_MAPPED_SIZE + (value - self.min) / (self.max - self.min) * (MAX_MAPPED_SIZE - MIN_MAPPED_SIZE)
    }
}

/// Computes per-node styles, in document order, for the given selection.
///
/// The size range is computed once per pass. Re-running with the same inputs yields identical
/// output.
pub fn encode(document: &GraphDocument, selection: &AttributeSelection) -> Vec<NodeStyle> {
    let size_range = selection
        .size
        .as_deref()
        .and_then(|key| SizeRange::scan(document, key).map(|range| (key, range)));

    document
        .nodes()
        .iter()
        .map(|node| {
            let mut style = NodeStyle::default_for(node);
            let attributes = node.attributes();

            if let Some(text) = selection
                .label
                .as_deref()
                .and_then(|key| attributes.get_string(key))
            {
                style.label = text;
            }

            if let Some(text) = selection
                .color
                .as_deref()
                .and_then(|key| attributes.get_string(key))
            {
                let color = hash_color(&text);
                style.background_color = color;
                style.outline_color = color;
            }

            if let Some((key, range)) = size_range {
                if let Some(value) = attributes.get_numeric(key) {
                    let size = range.map(value);
                    style.width = size;
                    style.height = size;
                }
            }

            style
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{encode, NodeStyle};
    use crate::model::fixtures::{scored_graph, seed_graph};
    use crate::model::AttrValue;
    use crate::style::{AttributeSelection, HexColor};

    fn size_selection() -> AttributeSelection {
        AttributeSelection {
            size: Some("score".to_owned()),
            ..AttributeSelection::default()
        }
    }

    fn sizes(styles: &[NodeStyle]) -> Vec<(f64, f64)> {
        styles.iter().map(|style| (style.width, style.height)).collect()
    }

    #[test]
    fn no_selection_yields_defaults() {
        let styles = encode(&seed_graph(), &AttributeSelection::default());
        assert_eq!(styles.len(), 7);
        for style in &styles {
            assert_eq!(style.background_color, HexColor::BASE_GRAY);
            assert_eq!(style.outline_color, HexColor::BASE_GRAY);
            assert_eq!((style.width, style.height), (30.0, 30.0));
            assert_eq!(style.font_size, 12.0);
        }
        assert_eq!(styles[0].label, "Node A");
    }

    #[test]
    fn equal_values_all_get_default_size() {
        let doc = scored_graph(&[
            ("a", Some(AttrValue::Number(5.0))),
            ("b", Some(AttrValue::Number(5.0))),
            ("c", Some(AttrValue::String("5".to_owned()))),
        ]);
        let styles = encode(&doc, &size_selection());
        assert_eq!(sizes(&styles), vec![(30.0, 30.0); 3]);
    }

    #[test]
    fn linear_mapping_between_min_and_max() {
        let doc = scored_graph(&[
            ("a", Some(AttrValue::Number(10.0))),
            ("b", Some(AttrValue::Number(20.0))),
            ("c", Some(AttrValue::Number(70.0))),
        ]);
        let styles = encode(&doc, &size_selection());
        assert_eq!(sizes(&styles), vec![(20.0, 20.0), (30.0, 30.0), (80.0, 80.0)]);
    }

    #[test]
    fn nodes_without_numeric_value_are_excluded_from_range() {
        let doc = scored_graph(&[
            ("a", Some(AttrValue::Number(10.0))),
            ("b", None),
            ("c", Some(AttrValue::String("n/a".to_owned()))),
            ("d", Some(AttrValue::Number(40.0))),
        ]);
        let styles = encode(&doc, &size_selection());
        assert_eq!(
            sizes(&styles),
            vec![(20.0, 20.0), (30.0, 30.0), (30.0, 30.0), (80.0, 80.0)]
        );
    }

    #[test]
    fn single_valued_node_gets_default_size() {
        let doc = scored_graph(&[("a", Some(AttrValue::Number(99.0))), ("b", None)]);
        let styles = encode(&doc, &size_selection());
        assert_eq!(sizes(&styles), vec![(30.0, 30.0), (30.0, 30.0)]);
    }

    #[test]
    fn color_mapping_hashes_display_text_onto_both_colors() {
        let selection = AttributeSelection {
            color: Some("category".to_owned()),
            ..AttributeSelection::default()
        };
        let styles = encode(&seed_graph(), &selection);
        assert_eq!(styles[0].background_color.to_string(), "#000041");
        assert_eq!(styles[0].outline_color, styles[0].background_color);
        assert_eq!(styles[0].background_color, styles[1].background_color);
        assert_ne!(styles[0].background_color, styles[2].background_color);
    }

    #[test]
    fn label_mapping_uses_display_text_and_falls_back() {
        let doc = scored_graph(&[("a", Some(AttrValue::Number(7.0))), ("b", None)]);
        let selection = AttributeSelection {
            label: Some("score".to_owned()),
            ..AttributeSelection::default()
        };
        let styles = encode(&doc, &selection);
        assert_eq!(styles[0].label, "7");
        assert_eq!(styles[1].label, "b");
    }

    #[test]
    fn encoding_is_idempotent() {
        let selection = AttributeSelection {
            color: Some("category".to_owned()),
            size: Some("score".to_owned()),
            label: Some("category".to_owned()),
        };
        let doc = seed_graph();
        assert_eq!(encode(&doc, &selection), encode(&doc, &selection));
    }
}
