// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Data sources for the organization hierarchy and GKE clusters.
//!
//! The discovery pipeline only sees the [`FolderSource`], [`ProjectSource`] and
//! [`ClusterSource`] traits; [`GcpClient`] implements them against the REST APIs.

pub mod auth;
pub mod client;

use futures::future::BoxFuture;
use futures::stream::BoxStream;

use crate::error::ApiError;
use crate::types::{ClusterList, Folder, Project};

pub use auth::{fetch_access_token, AccessToken};
pub use client::GcpClient;

/// Lists every folder visible to the caller
pub trait FolderSource {
    fn folders(&self) -> BoxStream<'_, Result<Folder, ApiError>>;
}

/// Lists every project visible to the caller
pub trait ProjectSource {
    fn projects(&self) -> BoxStream<'_, Result<Project, ApiError>>;
}

/// Lists the clusters of one project across all locations
pub trait ClusterSource {
    fn clusters<'a>(&'a self, project: &'a str) -> BoxFuture<'a, Result<ClusterList, ApiError>>;
}
