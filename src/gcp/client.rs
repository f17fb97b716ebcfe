// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! REST client for the Resource Manager v3 and GKE v1 APIs

use futures::future::BoxFuture;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use futures::FutureExt;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use crate::config::Config;
use crate::constants::api::ALL_LOCATIONS;
use crate::error::ApiError;
use crate::gcp::{AccessToken, ClusterSource, FolderSource, ProjectSource};
use crate::types::{ClusterList, Folder, Project};

/// One page of a `*:search` response
trait Page: DeserializeOwned + Send {
    type Item: Send;

    fn into_parts(self) -> (Vec<Self::Item>, Option<String>);
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct FolderPage {
    #[serde(default)]
    folders: Vec<Folder>,
    next_page_token: Option<String>,
}

impl Page for FolderPage {
    type Item = Folder;

    fn into_parts(self) -> (Vec<Folder>, Option<String>) {
        (self.folders, self.next_page_token)
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ProjectPage {
    #[serde(default)]
    projects: Vec<Project>,
    next_page_token: Option<String>,
}

impl Page for ProjectPage {
    type Item = Project;

    fn into_parts(self) -> (Vec<Project>, Option<String>) {
        (self.projects, self.next_page_token)
    }
}

/// Authenticated client for the Google Cloud APIs used during discovery
#[derive(Clone, Debug)]
pub struct GcpClient {
    http: reqwest::Client,
    token: AccessToken,
    resource_manager_url: Url,
    container_url: Url,
}

impl GcpClient {
    pub fn new(config: &Config, token: AccessToken) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            token,
            resource_manager_url: config.resource_manager_url.clone(),
            container_url: config.container_url.clone(),
        })
    }

    #[instrument(skip_all, fields(url = %url))]
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        debug!("GET");
        let response = self
            .http
            .get(url.clone())
            .bearer_auth(self.token.secret())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
                message: message.trim().to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Stream every item of a paginated search, fetching pages on demand
    fn paginate<P: Page + 'static>(&self, url: Url) -> BoxStream<'_, Result<P::Item, ApiError>> {
        stream::try_unfold(Some(None::<String>), move |state| {
            let url = url.clone();
            async move {
                let Some(page_token) = state else {
                    return Ok::<_, ApiError>(None);
                };

                let query: Vec<(&str, &str)> = page_token
                    .as_deref()
                    .map(|t| vec![("pageToken", t)])
                    .unwrap_or_default();
                let page: P = self.get_json(url, &query).await?;
                let (items, next_page_token) = page.into_parts();

                let next_state = next_page_token.filter(|t| !t.is_empty()).map(Some);
                Ok(Some((
                    stream::iter(items.into_iter().map(Ok::<_, ApiError>)),
                    next_state,
                )))
            }
        })
        .try_flatten()
        .boxed()
    }
}

/// Append `path` to a base URL that ends in `/`
fn endpoint(base: &Url, path: &str) -> Result<Url, ApiError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidEndpoint(base.to_string()))?
        .pop_if_empty()
        .extend(path.split('/'));
    Ok(url)
}

impl FolderSource for GcpClient {
    fn folders(&self) -> BoxStream<'_, Result<Folder, ApiError>> {
        match endpoint(&self.resource_manager_url, "folders:search") {
            Ok(url) => self.paginate::<FolderPage>(url),
            Err(e) => stream::once(async move { Err(e) }).boxed(),
        }
    }
}

impl ProjectSource for GcpClient {
    fn projects(&self) -> BoxStream<'_, Result<Project, ApiError>> {
        match endpoint(&self.resource_manager_url, "projects:search") {
            Ok(url) => self.paginate::<ProjectPage>(url),
            Err(e) => stream::once(async move { Err(e) }).boxed(),
        }
    }
}

impl ClusterSource for GcpClient {
    fn clusters<'a>(&'a self, project: &'a str) -> BoxFuture<'a, Result<ClusterList, ApiError>> {
        async move {
            let path = format!("{}/locations/{}/clusters", project, ALL_LOCATIONS);
            let url = endpoint(&self.container_url, &path)?;
            self.get_json(url, &[]).await
        }
        .boxed()
    }
}
