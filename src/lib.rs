// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Netweave: graph-interchange ingestion, attribute-driven visual encoding and remote project
//! persistence.
//!
//! GraphML and GEXF files are normalized into a [`model::GraphDocument`]; the [`style`] module
//! turns node attributes into colors, sizes and labels; [`render`] is the seam to whatever draws
//! the graph; [`store`] saves and loads projects against an HTTP project store.

pub mod app;
pub mod config;
pub mod format;
pub mod model;
pub mod render;
pub mod samples;
pub mod store;
pub mod style;
pub mod suggest;
pub mod workspace;
