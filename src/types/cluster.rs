// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ApiError;

/// Response of `projects/*/locations/-/clusters`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterList {
    #[serde(default)]
    pub clusters: Vec<GkeCluster>,
    /// Zones that could not be reached while listing
    #[serde(default)]
    pub missing_zones: Vec<String>,
}

/// The subset of a GKE cluster resource needed to connect to it
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GkeCluster {
    pub name: String,
    #[serde(default)]
    pub location: String,
    /// Control plane address without scheme
    #[serde(default)]
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_auth: Option<MasterAuth>,
    #[serde(default)]
    pub self_link: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MasterAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_ca_certificate: Option<String>,
}

impl GkeCluster {
    /// Project id encoded in the self link,
    /// e.g. `https://container.googleapis.com/v1/projects/<id>/locations/<loc>/clusters/<name>`
    pub fn project_id(&self) -> Result<String, ApiError> {
        let malformed = || {
            ApiError::Malformed(format!(
                "cluster {} has no project in self link '{}'",
                self.name, self.self_link
            ))
        };

        let url = Url::parse(&self.self_link).map_err(|_| malformed())?;
        let mut segments = url.path_segments().ok_or_else(malformed)?;
        segments
            .by_ref()
            .find(|s| *s == "projects")
            .ok_or_else(malformed)?;
        segments
            .next()
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .ok_or_else(malformed)
    }

    pub fn ca_data(&self) -> String {
        self.master_auth
            .as_ref()
            .and_then(|a| a.cluster_ca_certificate.clone())
            .unwrap_or_default()
    }
}

/// Connection details of one discovered cluster.
///
/// Field names double as the variables available to the context name template.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ClusterInfo {
    #[serde(rename = "ProjectId")]
    pub project_id: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CAData")]
    pub ca_data: String,
    #[serde(rename = "Endpoint")]
    pub endpoint: String,
}

impl ClusterInfo {
    pub fn from_gke(cluster: GkeCluster) -> Result<Self, ApiError> {
        let project_id = cluster.project_id()?;
        let ca_data = cluster.ca_data();
        Ok(Self {
            project_id,
            location: cluster.location,
            name: cluster.name,
            ca_data,
            endpoint: cluster.endpoint,
        })
    }

    /// Identity linking the cluster entry to its context: `<project>/<location>/<name>`
    pub fn id(&self) -> String {
        format!("{}/{}/{}", self.project_id, self.location, self.name)
    }

    pub fn server(&self) -> String {
        format!("https://{}", self.endpoint)
    }
}
