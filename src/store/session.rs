// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bearer-token sources.
//!
//! How a token is obtained (sign-in flows, refresh) is outside this crate; a provider only answers
//! "is there a token right now, and what is it".

use std::future::Future;
use std::path::PathBuf;

pub trait SessionProvider {
    /// The current bearer token, or `None` when there is no signed-in session.
    fn access_token(&self) -> impl Future<Output = Option<String>> + Send;
}

fn non_empty(token: &str) -> Option<String> {
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_owned())
}

/// A fixed token, or a fixed absence of one.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(non_empty(token.as_ref()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl SessionProvider for StaticToken {
    fn access_token(&self) -> impl Future<Output = Option<String>> + Send {
        std::future::ready(self.0.clone())
    }
}

/// Reads the token from an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl SessionProvider for EnvToken {
    fn access_token(&self) -> impl Future<Output = Option<String>> + Send {
        let token = std::env::var(&self.var).ok().and_then(|value| non_empty(&value));
        std::future::ready(token)
    }
}

/// Reads the token from a file persisted by an external sign-in step.
///
/// A missing or empty file means "not signed in".
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionProvider for TokenFile {
    fn access_token(&self) -> impl Future<Output = Option<String>> + Send {
        let path = self.path.clone();
        async move {
            match tokio::fs::read_to_string(&path).await {
                Ok(contents) => non_empty(&contents),
                Err(err) => {
                    tracing::debug!(path = %path.display(), %err, "no session token file");
                    None
                }
            }
        }
    }
}

/// The provider chosen at startup from configuration.
#[derive(Debug, Clone)]
pub enum AnySession {
    Static(StaticToken),
    Env(EnvToken),
    File(TokenFile),
}

impl SessionProvider for AnySession {
    fn access_token(&self) -> impl Future<Output = Option<String>> + Send {
        let this = self.clone();
        async move {
            match &this {
                Self::Static(provider) => provider.access_token().await,
                Self::Env(provider) => provider.access_token().await,
                Self::File(provider) => provider.access_token().await,
            }
        }
    }
}
