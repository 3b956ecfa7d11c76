// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence against the remote project store.
//!
//! The client speaks the HTTP API under a bearer token; the sync layer ties it to the workspace
//! and renderer and tracks which project the workspace belongs to.

pub mod client;
pub mod session;
pub mod sync;
mod wire;

pub use client::{ClientContext, ClientError, PersistenceClient};
pub use session::{AnySession, EnvToken, SessionProvider, StaticToken, TokenFile};
pub use sync::{parse_project_id, ActionState, ProjectEntry, ProjectSync, SyncAction, SyncError};
pub use wire::WireError;
