// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;

use crate::model::{is_reserved_attribute_key, GraphDocument};
use crate::suggest::closest_match;

/// The visual channel an attribute selection drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Color,
    Size,
    Label,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color => f.write_str("color"),
            Self::Size => f.write_str("size"),
            Self::Label => f.write_str("label"),
        }
    }
}

/// Attribute keys currently driving color, size and label. `None` means default styling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSelection {
    pub color: Option<String>,
    pub size: Option<String>,
    pub label: Option<String>,
}

impl AttributeSelection {
    pub fn get(&self, channel: Channel) -> Option<&str> {
        match channel {
            Channel::Color => self.color.as_deref(),
            Channel::Size => self.size.as_deref(),
            Channel::Label => self.label.as_deref(),
        }
    }

    fn slot_mut(&mut self, channel: Channel) -> &mut Option<String> {
        match channel {
            Channel::Color => &mut self.color,
            Channel::Size => &mut self.size,
            Channel::Label => &mut self.label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    UnknownAttribute {
        channel: Channel,
        key: String,
        suggestion: Option<String>,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAttribute {
                channel,
                key,
                suggestion,
            } => {
                write!(f, "cannot map {channel}: no node has attribute '{key}'")?;
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{suggestion}'?)")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// Attribute keys usable for visual mapping, derived from the current document.
///
/// Rebuilt from scratch after every ingest or load; never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeRegistry {
    keys: BTreeSet<String>,
}

impl AttributeRegistry {
    /// Collects every non-reserved key that appears on at least one node.
    pub fn discover(document: &GraphDocument) -> Self {
        let keys = document
            .nodes()
            .iter()
            .flat_map(|node| node.attributes().keys())
            .filter(|key| !is_reserved_attribute_key(key))
            .cloned()
            .collect();
        Self { keys }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Drops selections whose key no longer exists; surviving selections are kept as-is.
    pub fn reconcile(&self, selection: &AttributeSelection) -> AttributeSelection {
        let keep = |key: &Option<String>| key.clone().filter(|key| self.contains(key));
        AttributeSelection {
            color: keep(&selection.color),
            size: keep(&selection.size),
            label: keep(&selection.label),
        }
    }

    /// Sets (or clears, with `None`) the key for one channel.
    pub fn select(
        &self,
        selection: &mut AttributeSelection,
        channel: Channel,
        key: Option<&str>,
    ) -> Result<(), SelectionError> {
        let key = key.map(str::trim).filter(|key| !key.is_empty());
        if let Some(key) = key {
            if !self.contains(key) {
                return Err(SelectionError::UnknownAttribute {
                    channel,
                    key: key.to_owned(),
                    suggestion: closest_match(key, self.keys()).map(str::to_owned),
                });
            }
        }
        *selection.slot_mut(channel) = key.map(str::to_owned);
        Ok(())
    }
}
