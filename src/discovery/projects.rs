// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Selection of projects attached to the resolved folders

use futures::TryStreamExt;
use tracing::{debug, info, instrument};

use crate::discovery::folders::FolderSet;
use crate::error::{GkeKubeconfigError, Result};
use crate::gcp::ProjectSource;
use crate::types::{Project, ProjectState};

/// Lifecycle states that disqualify a project. Anything else, including
/// states unknown to this crate, is eligible.
pub const EXCLUDED_PROJECT_STATES: &[ProjectState] = &[ProjectState::DeleteRequested];

/// Check if a project sits directly in one of `folders` and is not excluded by state
pub fn is_eligible(project: &Project, folders: &FolderSet) -> bool {
    !EXCLUDED_PROJECT_STATES.contains(&project.state) && folders.contains(&project.parent)
}

/// Fetch every project and return the names of those eligible under `folders`
#[instrument(skip_all, fields(folders = folders.len()))]
pub async fn resolve_projects<S>(source: &S, folders: &FolderSet) -> Result<Vec<String>>
where
    S: ProjectSource + ?Sized,
{
    let mut eligible = Vec::new();
    let mut seen = 0usize;

    let mut projects = source.projects();
    while let Some(project) = projects
        .try_next()
        .await
        .map_err(GkeKubeconfigError::ProjectFetch)?
    {
        seen += 1;
        if is_eligible(&project, folders) {
            eligible.push(project.name);
        } else {
            debug!(
                project = %project.name,
                parent = %project.parent,
                state = ?project.state,
                "Skipping project"
            );
        }
    }

    info!("Selected {} of {} projects", eligible.len(), seen);
    Ok(eligible)
}
