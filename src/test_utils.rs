// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-memory data sources for exercising the discovery pipeline.

use futures::future::{self, BoxFuture, FutureExt};
use futures::stream::{self, BoxStream, StreamExt};
use reqwest::StatusCode;
use std::collections::HashMap;

use crate::error::ApiError;
use crate::gcp::{ClusterSource, FolderSource, ProjectSource};
use crate::types::cluster::MasterAuth;
use crate::types::{ClusterList, Folder, GkeCluster, Project};

/// A fixture-backed implementation of every source trait.
///
/// Failures can be injected after a number of streamed items, or for a given project.
#[derive(Clone, Default)]
pub struct FixtureSource {
    folders: Vec<Folder>,
    projects: Vec<Project>,
    clusters: HashMap<String, ClusterList>,
    fail_folders_after: Option<usize>,
    fail_projects_after: Option<usize>,
    failing_projects: Vec<String>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_folders(mut self, folders: Vec<Folder>) -> Self {
        self.folders = folders;
        self
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    /// Clusters returned when listing `project`
    pub fn with_clusters(self, project: &str, clusters: Vec<GkeCluster>) -> Self {
        self.with_cluster_list(
            project,
            ClusterList {
                clusters,
                missing_zones: Vec::new(),
            },
        )
    }

    pub fn with_cluster_list(mut self, project: &str, list: ClusterList) -> Self {
        self.clusters.insert(project.to_string(), list);
        self
    }

    /// Yield `n` folders, then an error
    pub fn fail_folders_after(mut self, n: usize) -> Self {
        self.fail_folders_after = Some(n);
        self
    }

    /// Yield `n` projects, then an error
    pub fn fail_projects_after(mut self, n: usize) -> Self {
        self.fail_projects_after = Some(n);
        self
    }

    pub fn fail_clusters_for(mut self, project: &str) -> Self {
        self.failing_projects.push(project.to_string());
        self
    }
}

fn unavailable(url: &str) -> ApiError {
    ApiError::Status {
        url: url.to_string(),
        status: StatusCode::SERVICE_UNAVAILABLE,
        message: "backend unavailable".to_string(),
    }
}

fn fixture_stream<T: Clone + Send + 'static>(
    items: &[T],
    fail_after: Option<usize>,
    url: &str,
) -> BoxStream<'static, Result<T, ApiError>> {
    let items: Vec<Result<T, ApiError>> = match fail_after {
        Some(n) => items
            .iter()
            .take(n)
            .cloned()
            .map(Ok)
            .chain(std::iter::once(Err(unavailable(url))))
            .collect(),
        None => items.iter().cloned().map(Ok).collect(),
    };
    stream::iter(items).boxed()
}

impl FolderSource for FixtureSource {
    fn folders(&self) -> BoxStream<'_, Result<Folder, ApiError>> {
        fixture_stream(&self.folders, self.fail_folders_after, "folders:search")
    }
}

impl ProjectSource for FixtureSource {
    fn projects(&self) -> BoxStream<'_, Result<Project, ApiError>> {
        fixture_stream(&self.projects, self.fail_projects_after, "projects:search")
    }
}

impl ClusterSource for FixtureSource {
    fn clusters<'a>(&'a self, project: &'a str) -> BoxFuture<'a, Result<ClusterList, ApiError>> {
        let result = if self.failing_projects.iter().any(|p| p == project) {
            Err(unavailable(&format!("{}/locations/-/clusters", project)))
        } else {
            Ok(self.clusters.get(project).cloned().unwrap_or_default())
        };
        future::ready(result).boxed()
    }
}

/// A GKE cluster record as the API returns it for `project_id`
pub fn gke_cluster(project_id: &str, location: &str, name: &str, endpoint: &str) -> GkeCluster {
    GkeCluster {
        name: name.to_string(),
        location: location.to_string(),
        endpoint: endpoint.to_string(),
        master_auth: Some(MasterAuth {
            cluster_ca_certificate: Some(format!("{}-ca", name)),
        }),
        self_link: format!(
            "https://container.googleapis.com/v1/projects/{}/locations/{}/clusters/{}",
            project_id, location, name
        ),
    }
}
