// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

/// Errors from the Google Cloud APIs backing the discovery pipeline
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}: {message}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Invalid API endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Failed to obtain access token: {0}")]
    Credentials(String),

    #[error("Malformed API response: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum GkeKubeconfigError {
    #[error("Failed to build context name template: {0}")]
    TemplateCompile(#[source] minijinja::Error),

    #[error("Failed to obtain credentials: {0}")]
    Credentials(#[source] ApiError),

    #[error("Failed to create Google Cloud API client: {0}")]
    Client(#[source] ApiError),

    #[error("Failed to list folders: {0}")]
    FolderFetch(#[source] ApiError),

    #[error("Failed to list projects: {0}")]
    ProjectFetch(#[source] ApiError),

    #[error("Failed to list clusters for {project}: {source}")]
    ClusterFetch {
        project: String,
        #[source]
        source: ApiError,
    },

    #[error("Failed to render context name for cluster {cluster}: {source}")]
    TemplateRender {
        cluster: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to serialize kubeconfig: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, GkeKubeconfigError>;
