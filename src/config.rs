// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Runtime configuration.
//!
//! Read from `netweave.toml` (or an explicit path), then overridden by `NETWEAVE_*` environment
//! variables. Every field has a default, so an absent file is a valid configuration.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::model::Canvas;
use crate::render::{Easing, LayoutName, LayoutRequest, RenderError};
use crate::store::{AnySession, EnvToken, StaticToken, TokenFile};

pub const DEFAULT_CONFIG_FILE: &str = "netweave.toml";

pub const ENV_API_URL: &str = "NETWEAVE_API_URL";
pub const ENV_APP: &str = "NETWEAVE_APP";
pub const ENV_TOKEN: &str = "NETWEAVE_TOKEN";
pub const ENV_SESSION_FILE: &str = "NETWEAVE_SESSION_FILE";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Toml { path: PathBuf, source: toml::de::Error },
    InvalidEnv { name: String, value: String },
    InvalidView { source: RenderError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read config {path:?}: {source}"),
            Self::Toml { path, source } => write!(f, "invalid config {path:?}: {source}"),
            Self::InvalidEnv { name, value } => write!(f, "invalid {name}: {value}"),
            Self::InvalidView { source } => write!(f, "invalid [view] setting: {source}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Toml { source, .. } => Some(source),
            Self::InvalidEnv { .. } => None,
            Self::InvalidView { source } => Some(source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub base_url: String,
    pub app_name: String,
    pub token: Option<String>,
    pub session_file: Option<PathBuf>,
    /// Environment variable read on every call, for tokens refreshed outside the process.
    pub token_env: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_owned(),
            app_name: "netweave".to_owned(),
            token: None,
            session_file: None,
            token_env: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    pub auto_load_delay_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            auto_load_delay_ms: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplesConfig {
    pub dir: PathBuf,
}

impl Default for SamplesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data/samples"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub layout: String,
    pub easing: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            layout: LayoutName::default().to_string(),
            easing: Easing::default().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub api: ApiConfig,
    pub canvas: Canvas,
    pub sync: SyncConfig,
    pub samples: SamplesConfig,
    pub view: ViewConfig,
}

impl Config {
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `path`, or `netweave.toml` in the working directory when `path` is `None`.
    ///
    /// Only the implicit default file may be missing.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!(path = %path.display(), "read config");
                Self::from_toml_str(&text, &path)
            }
            Err(source) if !required && source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }

    /// Applies `NETWEAVE_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|name| match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnv {
                name: name.to_owned(),
                value: "<non-unicode>".to_owned(),
            }),
        })
    }

    /// Applies overrides from `lookup`. Blank values are ignored.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Result<Option<String>, ConfigError>,
    ) -> Result<Self, ConfigError> {
        let get = |name: &str| -> Result<Option<String>, ConfigError> {
            Ok(lookup(name)?
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty()))
        };
        if let Some(value) = get(ENV_API_URL)? {
            self.api.base_url = value;
        }
        if let Some(value) = get(ENV_APP)? {
            self.api.app_name = value;
        }
        if let Some(value) = get(ENV_TOKEN)? {
            self.api.token = Some(value);
        }
        if let Some(value) = get(ENV_SESSION_FILE)? {
            self.api.session_file = Some(PathBuf::from(value));
        }
        Ok(self)
    }

    pub fn auto_load_delay(&self) -> Duration {
        Duration::from_millis(self.sync.auto_load_delay_ms)
    }

    pub fn layout_request(&self) -> Result<LayoutRequest, ConfigError> {
        let layout = self
            .view
            .layout
            .parse()
            .map_err(|source| ConfigError::InvalidView { source })?;
        let easing = self
            .view
            .easing
            .parse()
            .map_err(|source| ConfigError::InvalidView { source })?;
        Ok(LayoutRequest::new(layout, easing))
    }

    /// Token sources in priority order: explicit token, session file, token variable. With none
    /// of them, calls run signed out.
    pub fn session(&self) -> AnySession {
        let api = &self.api;
        if let Some(token) = &api.token {
            AnySession::Static(StaticToken::new(token))
        } else if let Some(path) = &api.session_file {
            AnySession::File(TokenFile::new(path))
        } else if let Some(var) = &api.token_env {
            AnySession::Env(EnvToken::new(var.clone()))
        } else {
            AnySession::Static(StaticToken::anonymous())
        }
    }
}
