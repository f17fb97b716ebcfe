// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Folder, project and cluster resolution stages.

pub mod clusters;
pub mod folders;
pub mod projects;

pub use clusters::enumerate_clusters;
pub use folders::{resolve_folders, FolderSet};
pub use projects::{is_eligible, resolve_projects, EXCLUDED_PROJECT_STATES};

use crate::error::Result;
use crate::gcp::{FolderSource, ProjectSource};

/// Names of the projects below the folder whose display name is `search_root`
pub async fn descendant_projects<S>(source: &S, search_root: &str) -> Result<Vec<String>>
where
    S: FolderSource + ProjectSource + ?Sized,
{
    let folders = resolve_folders(source, search_root).await?;
    resolve_projects(source, &folders).await
}
