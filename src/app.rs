// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The process-scoped context: configuration, workspace, renderer and project sync, created once
//! at startup and passed to whatever drives them.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigError};
use crate::format::{GraphFormat, ParseError};
use crate::model::{ProjectId, Thumbnail};
use crate::render::{Easing, HeadlessRenderer, LayoutName, RenderError, ViewRenderer};
use crate::samples::{load_sample, SampleError};
use crate::store::{
    parse_project_id, AnySession, ClientContext, ClientError, PersistenceClient, ProjectEntry,
    ProjectSync, SessionProvider, SyncError,
};
use crate::style::{Channel, SelectionError};
use crate::workspace::Workspace;

pub const DEFAULT_SVG_FILE: &str = "network.svg";

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Client(ClientError),
    Io { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: Box<ParseError> },
    Sample(SampleError),
    Selection(SelectionError),
    Render(RenderError),
    Sync(SyncError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Client(err) => write!(f, "{err}"),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Parse { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Sample(err) => write!(f, "{err}"),
            Self::Selection(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "{err}"),
            Self::Sync(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Client(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source.as_ref()),
            Self::Sample(err) => Some(err),
            Self::Selection(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Sync(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<ClientError> for AppError {
    fn from(value: ClientError) -> Self {
        Self::Client(value)
    }
}

impl From<SampleError> for AppError {
    fn from(value: SampleError) -> Self {
        Self::Sample(value)
    }
}

impl From<SelectionError> for AppError {
    fn from(value: SelectionError) -> Self {
        Self::Selection(value)
    }
}

impl From<RenderError> for AppError {
    fn from(value: RenderError) -> Self {
        Self::Render(value)
    }
}

impl From<SyncError> for AppError {
    fn from(value: SyncError) -> Self {
        Self::Sync(value)
    }
}

#[derive(Debug)]
pub struct App<S = AnySession, R = HeadlessRenderer> {
    config: Config,
    workspace: Workspace,
    renderer: R,
    sync: ProjectSync<S>,
}

impl App {
    /// Builds the context described by `config`, with a headless renderer on the configured
    /// canvas.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let session = config.session();
        let renderer = HeadlessRenderer::new(config.canvas);
        Self::new(config, session, renderer)
    }
}

impl<S: SessionProvider, R: ViewRenderer> App<S, R> {
    pub fn new(config: Config, session: S, renderer: R) -> Result<Self, AppError> {
        let context = ClientContext::new(&config.api.base_url, config.api.app_name.clone())?;
        let request = config.layout_request()?;

        let mut workspace = Workspace::default();
        workspace.set_layout(request.layout);
        workspace.set_easing(request.easing);

        let mut app = Self {
            config,
            workspace,
            renderer,
            sync: ProjectSync::new(PersistenceClient::new(context, session)),
        };
        app.refresh()?;
        Ok(app)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Direct renderer access for view changes made outside the workspace (pan/zoom).
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn sync(&self) -> &ProjectSync<S> {
        &self.sync
    }

    pub fn current_project_id(&self) -> Option<&ProjectId> {
        self.sync.current_project_id()
    }

    pub fn resume(&mut self, project_id: &str) -> Result<(), AppError> {
        self.sync.resume(parse_project_id(project_id)?);
        Ok(())
    }

    /// Re-sends the current frame to the renderer and re-runs the selected layout.
    pub fn refresh(&mut self) -> Result<(), AppError> {
        self.workspace.render_into(&mut self.renderer)?;
        Ok(())
    }

    /// Ingests a `.graphml` or `.gexf` file and renders it.
    pub fn import_file(&mut self, path: &Path) -> Result<(), AppError> {
        let parse_error = |source: ParseError| AppError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        };
        let format = GraphFormat::from_path(path).map_err(parse_error)?;
        let text = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.workspace
            .ingest(&text, format, self.config.canvas)
            .map_err(parse_error)?;
        tracing::info!(
            path = %path.display(),
            nodes = self.workspace.document().nodes().len(),
            edges = self.workspace.document().edges().len(),
            "imported graph"
        );
        self.refresh()
    }

    pub fn load_sample(&mut self, key: &str) -> Result<(), AppError> {
        let document = load_sample(&self.config.samples.dir, key, self.config.canvas)?;
        self.workspace.replace_document(document);
        self.refresh()
    }

    pub fn select(&mut self, channel: Channel, key: Option<&str>) -> Result<(), AppError> {
        self.workspace.select(channel, key)?;
        self.renderer
            .apply_frame(self.workspace.document(), self.workspace.styles())?;
        Ok(())
    }

    pub fn set_layout(&mut self, layout: LayoutName) -> Result<(), AppError> {
        self.workspace.set_layout(layout);
        self.refresh()
    }

    pub fn set_easing(&mut self, easing: Easing) -> Result<(), AppError> {
        self.workspace.set_easing(easing);
        self.refresh()
    }

    pub fn export_svg(&self) -> Result<String, AppError> {
        Ok(self.renderer.export_svg()?)
    }

    pub fn write_svg(&self, path: &Path) -> Result<(), AppError> {
        let svg = self.export_svg()?;
        std::fs::write(path, svg).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "exported svg");
        Ok(())
    }

    /// Saves the workspace, creating a project on first save and updating it afterwards.
    pub async fn save(&mut self, name: &str) -> Result<ProjectId, AppError> {
        Ok(self.sync.save(name, &self.workspace, &self.renderer).await?)
    }

    pub async fn load(&mut self, project_id: &str) -> Result<(), AppError> {
        let project_id = parse_project_id(project_id)?;
        self.sync
            .load(&project_id, &mut self.workspace, &mut self.renderer)
            .await?;
        Ok(())
    }

    pub async fn list(&mut self) -> Result<Vec<ProjectEntry>, AppError> {
        Ok(self.sync.list().await?)
    }

    pub async fn thumbnail(&mut self, project_id: &ProjectId) -> Result<Thumbnail, AppError> {
        Ok(self.sync.thumbnail(project_id).await?)
    }

    pub async fn delete(&mut self, project_id: &str) -> Result<(), AppError> {
        let project_id = parse_project_id(project_id)?;
        self.sync.delete(&project_id).await?;
        Ok(())
    }

    /// Best-effort load after the configured delay. Never fails.
    pub async fn auto_load(&mut self, project_id: &str) -> bool {
        let delay = self.config.auto_load_delay();
        self.sync
            .auto_load(project_id, delay, &mut self.workspace, &mut self.renderer)
            .await
    }
}
