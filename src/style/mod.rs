// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Attribute-driven visual encoding.
//!
//! The registry discovers which node attributes can drive a visual channel; the encoder turns a
//! selection into concrete per-node styles.

pub mod color;
pub mod encoder;
pub mod registry;

pub use color::{hash_color, HexColor};
pub use encoder::{encode, NodeStyle, DEFAULT_FONT_SIZE, DEFAULT_NODE_SIZE};
pub use registry::{AttributeRegistry, AttributeSelection, Channel, SelectionError};
