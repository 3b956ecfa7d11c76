// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Save/load/list/delete orchestration between the workspace, the renderer and the store.
//!
//! `current_project_id` decides whether the next save creates or updates. Apart from an explicit
//! [`ProjectSync::resume`], it only changes after an operation fully succeeds.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::model::{IdError, ProjectId, ProjectSummary, Thumbnail};
use crate::render::{LayoutName, RenderError, ViewRenderer};
use crate::workspace::Workspace;

use super::client::{ClientError, PersistenceClient};
use super::session::SessionProvider;

#[derive(Debug)]
pub enum SyncError {
    EmptyName,
    InvalidProjectId { value: String, source: IdError },
    Client { source: ClientError },
    Render { source: RenderError },
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("project name must not be empty"),
            Self::InvalidProjectId { value, .. } => write!(f, "invalid project id: {value:?}"),
            Self::Client { source } => write!(f, "{source}"),
            Self::Render { source } => write!(f, "render error: {source}"),
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyName => None,
            Self::InvalidProjectId { source, .. } => Some(source),
            Self::Client { source } => Some(source),
            Self::Render { source } => Some(source),
        }
    }
}

impl From<ClientError> for SyncError {
    fn from(source: ClientError) -> Self {
        Self::Client { source }
    }
}

impl From<RenderError> for SyncError {
    fn from(source: RenderError) -> Self {
        Self::Render { source }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncAction {
    Save,
    Load,
    List,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActionState {
    #[default]
    Idle,
    Running,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ActionStates {
    save: ActionState,
    load: ActionState,
    list: ActionState,
    delete: ActionState,
}

impl ActionStates {
    fn get_mut(&mut self, action: SyncAction) -> &mut ActionState {
        match action {
            SyncAction::Save => &mut self.save,
            SyncAction::Load => &mut self.load,
            SyncAction::List => &mut self.list,
            SyncAction::Delete => &mut self.delete,
        }
    }
}

/// One row of a project listing. `thumbnail` is filled once it has been fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub summary: ProjectSummary,
    pub thumbnail: Option<Thumbnail>,
}

pub fn parse_project_id(value: &str) -> Result<ProjectId, SyncError> {
    ProjectId::new(value.trim()).map_err(|source| SyncError::InvalidProjectId {
        value: value.to_owned(),
        source,
    })
}

/// Newest first; entries without timestamps go last, ties keep server order.
fn sort_newest_first(summaries: &mut [ProjectSummary]) {
    summaries.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
}

#[derive(Debug)]
pub struct ProjectSync<S> {
    client: PersistenceClient<S>,
    states: ActionStates,
    current_project_id: Option<ProjectId>,
    thumbnails: BTreeMap<ProjectId, Thumbnail>,
}

impl<S: SessionProvider> ProjectSync<S> {
    pub fn new(client: PersistenceClient<S>) -> Self {
        Self {
            client,
            states: ActionStates::default(),
            current_project_id: None,
            thumbnails: BTreeMap::new(),
        }
    }

    pub fn client(&self) -> &PersistenceClient<S> {
        &self.client
    }

    pub fn current_project_id(&self) -> Option<&ProjectId> {
        self.current_project_id.as_ref()
    }

    /// Makes the next save update `project_id` instead of creating a new project.
    pub fn resume(&mut self, project_id: ProjectId) {
        self.current_project_id = Some(project_id);
    }

    pub fn state(&self, action: SyncAction) -> &ActionState {
        match action {
            SyncAction::Save => &self.states.save,
            SyncAction::Load => &self.states.load,
            SyncAction::List => &self.states.list,
            SyncAction::Delete => &self.states.delete,
        }
    }

    fn begin(&mut self, action: SyncAction) {
        *self.states.get_mut(action) = ActionState::Running;
    }

    fn finish<T>(&mut self, action: SyncAction, result: Result<T, SyncError>) -> Result<T, SyncError> {
        *self.states.get_mut(action) = match &result {
            Ok(_) => ActionState::Idle,
            Err(err) => ActionState::Failed(err.to_string()),
        };
        result
    }

    /// Saves the workspace under `name`, creating a project the first time and updating it after.
    pub async fn save<R: ViewRenderer + ?Sized>(
        &mut self,
        name: &str,
        workspace: &Workspace,
        renderer: &R,
    ) -> Result<ProjectId, SyncError> {
        self.begin(SyncAction::Save);
        let result = self.save_inner(name, workspace, renderer).await;
        self.finish(SyncAction::Save, result)
    }

    async fn save_inner<R: ViewRenderer + ?Sized>(
        &mut self,
        name: &str,
        workspace: &Workspace,
        renderer: &R,
    ) -> Result<ProjectId, SyncError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SyncError::EmptyName);
        }

        let thumbnail = renderer.capture_thumbnail()?;
        let view = renderer.view_state();
        let project_id = self
            .client
            .save_project(
                name,
                workspace.document(),
                &view,
                Some(&thumbnail),
                self.current_project_id.as_ref(),
            )
            .await?;

        self.thumbnails.insert(project_id.clone(), thumbnail);
        self.current_project_id = Some(project_id.clone());
        Ok(project_id)
    }

    /// Replaces the workspace with a stored project. Nothing changes unless the snapshot is valid.
    pub async fn load<R: ViewRenderer + ?Sized>(
        &mut self,
        project_id: &ProjectId,
        workspace: &mut Workspace,
        renderer: &mut R,
    ) -> Result<(), SyncError> {
        self.begin(SyncAction::Load);
        let result = self.load_inner(project_id, workspace, renderer).await;
        self.finish(SyncAction::Load, result)
    }

    async fn load_inner<R: ViewRenderer + ?Sized>(
        &mut self,
        project_id: &ProjectId,
        workspace: &mut Workspace,
        renderer: &mut R,
    ) -> Result<(), SyncError> {
        let snapshot = self.client.load_project(project_id).await?;

        let mut staged = workspace.clone();
        staged.replace_document(snapshot.document);
        if let Some(layout) = snapshot
            .view
            .layout
            .as_deref()
            .and_then(|name| name.parse::<LayoutName>().ok())
        {
            staged.set_layout(layout);
        }

        // The workspace and current id change together, or not at all.
        let previous_view = renderer.view_state();
        if let Err(err) = staged.render_into(renderer) {
            let _ = renderer.apply_frame(workspace.document(), workspace.styles());
            renderer.restore_view_state(&previous_view);
            return Err(err.into());
        }
        *workspace = staged;
        renderer.restore_view_state(&snapshot.view);

        if let Some(thumbnail) = snapshot.thumbnail {
            self.thumbnails.insert(project_id.clone(), thumbnail);
        }
        self.current_project_id = Some(project_id.clone());
        Ok(())
    }

    /// Lists projects newest first, with thumbnails that were already fetched.
    pub async fn list(&mut self) -> Result<Vec<ProjectEntry>, SyncError> {
        self.begin(SyncAction::List);
        let result = self.client.list_projects().await.map_err(SyncError::from);
        let result = result.map(|mut summaries| {
            sort_newest_first(&mut summaries);
            summaries
                .into_iter()
                .map(|summary| ProjectEntry {
                    thumbnail: self.thumbnails.get(&summary.project_id).cloned(),
                    summary,
                })
                .collect()
        });
        self.finish(SyncAction::List, result)
    }

    /// The preview for a listed project, fetched on first use and cached afterwards.
    pub async fn thumbnail(&mut self, project_id: &ProjectId) -> Result<Thumbnail, SyncError> {
        if let Some(thumbnail) = self.thumbnails.get(project_id) {
            return Ok(thumbnail.clone());
        }
        let thumbnail = self.client.fetch_thumbnail(project_id).await?;
        self.thumbnails
            .insert(project_id.clone(), thumbnail.clone());
        Ok(thumbnail)
    }

    pub async fn delete(&mut self, project_id: &ProjectId) -> Result<(), SyncError> {
        self.begin(SyncAction::Delete);
        let result = self
            .client
            .delete_project(project_id)
            .await
            .map_err(SyncError::from);
        if result.is_ok() {
            self.thumbnails.remove(project_id);
            if self.current_project_id.as_ref() == Some(project_id) {
                self.current_project_id = None;
            }
        }
        self.finish(SyncAction::Delete, result)
    }

    /// Waits `delay`, then tries once to load `project_id`.
    ///
    /// Failures are logged and otherwise ignored. Returns whether the project was loaded.
    pub async fn auto_load<R: ViewRenderer + ?Sized>(
        &mut self,
        project_id: &str,
        delay: Duration,
        workspace: &mut Workspace,
        renderer: &mut R,
    ) -> bool {
        tokio::time::sleep(delay).await;

        let result = match parse_project_id(project_id) {
            Ok(project_id) => self.load(&project_id, workspace, renderer).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(()) => {
                tracing::info!(project_id, "auto-loaded project");
                true
            }
            Err(err) => {
                tracing::warn!(project_id, %err, "auto-load failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_project_id, sort_newest_first, ActionState, ProjectSync, SyncAction, SyncError};
    use crate::model::{ProjectId, ProjectSummary};
    use crate::render::HeadlessRenderer;
    use crate::store::{ClientContext, PersistenceClient, StaticToken};
    use crate::workspace::Workspace;

    fn new_runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime")
    }

    fn summary(id: &str, updated_at: Option<&str>) -> ProjectSummary {
        ProjectSummary {
            project_id: ProjectId::new(id).expect("project id"),
            name: id.to_owned(),
            created_at: None,
            updated_at: updated_at.map(str::to_owned),
        }
    }

    fn offline_sync() -> ProjectSync<StaticToken> {
        let context = ClientContext::new("http://127.0.0.1:9", "netweave").expect("context");
        ProjectSync::new(PersistenceClient::new(context, StaticToken::anonymous()))
    }

    #[test]
    fn sorts_listing_newest_first() {
        let mut summaries = vec![
            summary("old", Some("2026-01-01T00:00:00Z")),
            summary("none", None),
            summary("new", Some("2026-03-01T00:00:00Z")),
        ];
        sort_newest_first(&mut summaries);
        let ids: Vec<&str> = summaries.iter().map(|s| s.project_id.as_str()).collect();
        assert_eq!(ids, ["new", "old", "none"]);
    }

    #[test]
    fn blank_name_is_rejected_before_any_call() {
        let runtime = new_runtime();
        let mut sync = offline_sync();
        let workspace = Workspace::default();
        let renderer = HeadlessRenderer::default();

        let err = runtime
            .block_on(sync.save("   ", &workspace, &renderer))
            .unwrap_err();
        assert!(matches!(err, SyncError::EmptyName));
        assert_eq!(
            sync.state(SyncAction::Save),
            &ActionState::Failed("project name must not be empty".to_owned())
        );
        assert_eq!(sync.current_project_id(), None);
    }

    #[test]
    fn failed_save_keeps_current_id_unset() {
        let runtime = new_runtime();
        let mut sync = offline_sync();
        let mut workspace = Workspace::default();
        let mut renderer = HeadlessRenderer::default();
        workspace.render_into(&mut renderer).expect("render");

        let err = runtime
            .block_on(sync.save("demo", &workspace, &renderer))
            .unwrap_err();
        assert!(matches!(err, SyncError::Client { .. }));
        assert_eq!(sync.current_project_id(), None);
        assert_eq!(sync.state(SyncAction::Load), &ActionState::Idle);
    }

    #[test]
    fn rejects_blank_project_ids() {
        assert!(matches!(
            parse_project_id("  "),
            Err(SyncError::InvalidProjectId { .. })
        ));
        assert_eq!(parse_project_id(" 42 ").expect("id").as_str(), "42");
    }

    #[test]
    fn auto_load_swallows_failures() {
        let runtime = new_runtime();
        let mut sync = offline_sync();
        let mut workspace = Workspace::default();
        let mut renderer = HeadlessRenderer::default();
        let before = workspace.document().clone();

        let loaded = runtime.block_on(sync.auto_load(
            "17",
            std::time::Duration::from_millis(1),
            &mut workspace,
            &mut renderer,
        ));
        assert!(!loaded);
        assert_eq!(workspace.document(), &before);
        assert_eq!(sync.current_project_id(), None);
    }
}
