// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! GKE cluster enumeration across projects

use tracing::{debug, info, instrument, warn};

use crate::error::{GkeKubeconfigError, Result};
use crate::gcp::ClusterSource;
use crate::types::ClusterInfo;

/// List the clusters of every project, one project at a time.
///
/// A failure for any project aborts the whole enumeration.
#[instrument(skip_all, fields(projects = projects.len()))]
pub async fn enumerate_clusters<S>(source: &S, projects: &[String]) -> Result<Vec<ClusterInfo>>
where
    S: ClusterSource + ?Sized,
{
    let mut clusters = Vec::new();

    for project in projects {
        let cluster_fetch = |source| GkeKubeconfigError::ClusterFetch {
            project: project.clone(),
            source,
        };

        let list = source.clusters(project).await.map_err(cluster_fetch)?;

        if !list.missing_zones.is_empty() {
            warn!(
                project = %project,
                zones = ?list.missing_zones,
                "Some zones could not be reached, their clusters are missing"
            );
        }

        for cluster in list.clusters {
            let info = ClusterInfo::from_gke(cluster).map_err(cluster_fetch)?;
            debug!(project = %project, cluster = %info.id(), "Found cluster");
            clusters.push(info);
        }
    }

    info!("Found {} clusters in {} projects", clusters.len(), projects.len());
    Ok(clusters)
}
