// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::model::{GraphDocument, ProjectId, ProjectSnapshot, ProjectSummary, Thumbnail, ViewState};

use super::session::SessionProvider;
use super::wire::{
    graph_data_to_json, saved_id_from_json, snapshot_from_json, summaries_from_json, ProjectJson,
    ProjectListJson, SaveRequestJson, SavedProjectJson, WireError,
};

const DEFAULT_THUMBNAIL_MIME: &str = "image/png";

#[derive(Debug)]
pub enum ClientError {
    NotAuthenticated,
    InvalidUrl { url: String, reason: String },
    FetchFailed { reason: String },
    SaveFailed { reason: String },
    LoadFailed { reason: String },
    DeleteFailed { reason: String },
    InvalidResponse { operation: &'static str, reason: String },
    InvalidSnapshot { source: WireError },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAuthenticated => f.write_str("not signed in"),
            Self::InvalidUrl { url, reason } => write!(f, "invalid api url {url:?}: {reason}"),
            Self::FetchFailed { reason } => write!(f, "failed to fetch projects: {reason}"),
            Self::SaveFailed { reason } => write!(f, "failed to save project: {reason}"),
            Self::LoadFailed { reason } => write!(f, "failed to load project: {reason}"),
            Self::DeleteFailed { reason } => write!(f, "failed to delete project: {reason}"),
            Self::InvalidResponse { operation, reason } => {
                write!(f, "invalid {operation} response: {reason}")
            }
            Self::InvalidSnapshot { source } => write!(f, "invalid project snapshot: {source}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSnapshot { source } => Some(source),
            _ => None,
        }
    }
}

impl From<WireError> for ClientError {
    fn from(source: WireError) -> Self {
        Self::InvalidSnapshot { source }
    }
}

/// Connection settings shared by every call: where the store lives and which app tag to use.
#[derive(Debug, Clone)]
pub struct ClientContext {
    base_url: Url,
    app_name: String,
    http: reqwest::Client,
}

impl ClientContext {
    pub fn new(base_url: &str, app_name: impl Into<String>) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidUrl {
            url: base_url.to_owned(),
            reason,
        };
        let parsed = Url::parse(base_url).map_err(|err| invalid(err.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("not a base url".to_owned()));
        }
        Ok(Self {
            base_url: parsed,
            app_name: app_name.into(),
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// `base_url` joined with percent-encoded path segments.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "not a base url".to_owned(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Remote project CRUD under a bearer token.
///
/// Every call resolves the token first and fails with [`ClientError::NotAuthenticated`] before
/// touching the network when there is none.
#[derive(Debug, Clone)]
pub struct PersistenceClient<S> {
    context: ClientContext,
    session: S,
}

impl<S: SessionProvider> PersistenceClient<S> {
    pub fn new(context: ClientContext, session: S) -> Self {
        Self { context, session }
    }

    pub fn context(&self) -> &ClientContext {
        &self.context
    }

    async fn authorized(&self, method: Method, url: Url) -> Result<RequestBuilder, ClientError> {
        let token = self
            .session
            .access_token()
            .await
            .ok_or(ClientError::NotAuthenticated)?;
        Ok(self.context.http.request(method, url).bearer_auth(token))
    }

    pub async fn list_projects(&self) -> Result<Vec<ProjectSummary>, ClientError> {
        let mut url = self.context.endpoint(&["projects"])?;
        url.query_pairs_mut().append_pair("app", &self.context.app_name);

        let request = self.authorized(Method::GET, url).await?;
        let response = send(request, fetch_failed).await?;
        let list: ProjectListJson = read_json(response, "list", fetch_failed).await?;
        let summaries = summaries_from_json(list)?;
        tracing::info!(count = summaries.len(), "listed projects");
        Ok(summaries)
    }

    /// Creates a project when `existing_id` is `None`, otherwise updates that project.
    ///
    /// Returns the id the project is stored under.
    pub async fn save_project(
        &self,
        name: &str,
        document: &GraphDocument,
        view: &ViewState,
        thumbnail: Option<&Thumbnail>,
        existing_id: Option<&ProjectId>,
    ) -> Result<ProjectId, ClientError> {
        let data = graph_data_to_json(document, view);
        let body = SaveRequestJson {
            name,
            app_name: &self.context.app_name,
            data: &data,
            thumbnail: thumbnail.map(Thumbnail::to_data_url),
        };

        let (method, url) = match existing_id {
            None => (Method::POST, self.context.endpoint(&["projects"])?),
            Some(id) => (Method::PUT, self.context.endpoint(&["projects", id.as_str()])?),
        };
        let request = self.authorized(method.clone(), url).await?.json(&body);
        let response = send(request, save_failed).await?;

        let project_id = match existing_id {
            None => {
                let saved: SavedProjectJson = read_json(response, "save", save_failed).await?;
                saved_id_from_json(saved)?
            }
            // Updates may answer with an empty body; the id does not change.
            Some(id) => {
                let bytes = response
                    .bytes()
                    .await
                    .map_err(|err| save_failed(err.to_string()))?;
                serde_json::from_slice::<SavedProjectJson>(&bytes)
                    .ok()
                    .and_then(|saved| saved_id_from_json(saved).ok())
                    .unwrap_or_else(|| id.clone())
            }
        };
        tracing::info!(%method, project_id = %project_id, name, "saved project");
        Ok(project_id)
    }

    pub async fn load_project(&self, project_id: &ProjectId) -> Result<ProjectSnapshot, ClientError> {
        let url = self.context.endpoint(&["projects", project_id.as_str()])?;
        let request = self.authorized(Method::GET, url).await?;
        let response = send(request, load_failed).await?;
        let project: ProjectJson = read_json(response, "load", load_failed).await?;
        let snapshot = snapshot_from_json(project)?;
        tracing::info!(
            project_id = %project_id,
            nodes = snapshot.document.nodes().len(),
            edges = snapshot.document.edges().len(),
            "loaded project"
        );
        Ok(snapshot)
    }

    pub async fn delete_project(&self, project_id: &ProjectId) -> Result<(), ClientError> {
        let url = self.context.endpoint(&["projects", project_id.as_str()])?;
        let request = self.authorized(Method::DELETE, url).await?;
        send(request, delete_failed).await?;
        tracing::info!(project_id = %project_id, "deleted project");
        Ok(())
    }

    pub async fn fetch_thumbnail(&self, project_id: &ProjectId) -> Result<Thumbnail, ClientError> {
        let url = self
            .context
            .endpoint(&["projects", project_id.as_str(), "thumbnail"])?;
        let request = self.authorized(Method::GET, url).await?;
        let response = send(request, fetch_failed).await?;
        let mime = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.split(';').next().unwrap_or(value).trim().to_owned())
            .filter(|mime| !mime.is_empty())
            .unwrap_or_else(|| DEFAULT_THUMBNAIL_MIME.to_owned());
        let bytes = response
            .bytes()
            .await
            .map_err(|err| fetch_failed(err.to_string()))?;
        Ok(Thumbnail::new(mime, bytes.to_vec()))
    }
}

fn fetch_failed(reason: String) -> ClientError {
    ClientError::FetchFailed { reason }
}

fn save_failed(reason: String) -> ClientError {
    ClientError::SaveFailed { reason }
}

fn load_failed(reason: String) -> ClientError {
    ClientError::LoadFailed { reason }
}

fn delete_failed(reason: String) -> ClientError {
    ClientError::DeleteFailed { reason }
}

/// Sends `request`, mapping transport errors and non-success statuses through `failed`.
async fn send(
    request: RequestBuilder,
    failed: fn(String) -> ClientError,
) -> Result<Response, ClientError> {
    let response = request.send().await.map_err(|err| failed(err.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(failed(status.to_string()));
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(
    response: Response,
    operation: &'static str,
    failed: fn(String) -> ClientError,
) -> Result<T, ClientError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|err| failed(err.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|err| ClientError::InvalidResponse {
        operation,
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ClientContext, ClientError, PersistenceClient};
    use crate::model::fixtures::seed_graph;
    use crate::model::{ProjectId, ViewState};
    use crate::store::StaticToken;

    fn new_runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime")
    }

    #[rstest]
    #[case("https://api.example.com", "https://api.example.com/projects/a%2Fb")]
    #[case("https://api.example.com/v1/", "https://api.example.com/v1/projects/a%2Fb")]
    fn endpoint_joins_and_encodes_segments(#[case] base: &str, #[case] expected: &str) {
        let context = ClientContext::new(base, "netweave").expect("context");
        let url = context.endpoint(&["projects", "a/b"]).expect("endpoint");
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    #[case("not a url")]
    #[case("mailto:someone@example.com")]
    fn rejects_unusable_base_urls(#[case] base: &str) {
        assert!(matches!(
            ClientContext::new(base, "netweave"),
            Err(ClientError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn every_call_requires_a_session() {
        let runtime = new_runtime();
        // Port 9 (discard) is never contacted: the token check comes first.
        let context = ClientContext::new("http://127.0.0.1:9", "netweave").expect("context");
        let client = PersistenceClient::new(context, StaticToken::anonymous());
        let id = ProjectId::new("1").expect("project id");

        runtime.block_on(async {
            assert!(matches!(
                client.list_projects().await,
                Err(ClientError::NotAuthenticated)
            ));
            assert!(matches!(
                client
                    .save_project("demo", &seed_graph(), &ViewState::default(), None, None)
                    .await,
                Err(ClientError::NotAuthenticated)
            ));
            assert!(matches!(
                client.load_project(&id).await,
                Err(ClientError::NotAuthenticated)
            ));
            assert!(matches!(
                client.delete_project(&id).await,
                Err(ClientError::NotAuthenticated)
            ));
            assert!(matches!(
                client.fetch_thumbnail(&id).await,
                Err(ClientError::NotAuthenticated)
            ));
        });
    }
}
