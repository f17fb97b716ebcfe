// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubeconfig document synthesis

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use crate::constants::auth;
use crate::error::Result;
use crate::template::ContextNameTemplate;
use crate::types::ClusterInfo;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Kubeconfig {
    pub clusters: Vec<NamedCluster>,
    pub contexts: Vec<NamedContext>,
    pub users: Vec<NamedUser>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NamedCluster {
    pub name: String,
    pub cluster: ClusterEndpoint,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ClusterEndpoint {
    pub certificate_authority_data: String,
    pub server: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NamedContext {
    pub name: String,
    pub context: ContextRef,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ContextRef {
    pub cluster: String,
    pub user: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NamedUser {
    pub name: String,
    pub user: UserAuth,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct UserAuth {
    pub auth_provider: AuthProvider,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AuthProvider {
    pub name: String,
    pub config: BTreeMap<String, String>,
}

impl NamedUser {
    /// The user every context shares: credentials come from the GKE auth plugin
    pub fn google_auth() -> Self {
        let config = [
            ("cmd-path", auth::CMD_PATH),
            ("expiry-key", auth::EXPIRY_KEY),
            ("token-key", auth::TOKEN_KEY),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            name: auth::USER_NAME.to_string(),
            user: UserAuth {
                auth_provider: AuthProvider {
                    name: auth::PROVIDER_NAME.to_string(),
                    config,
                },
            },
        }
    }
}

impl Kubeconfig {
    /// Build the document: one cluster and one context per cluster, one shared user.
    ///
    /// Context names are not checked for uniqueness.
    #[instrument(skip_all, fields(clusters = clusters.len(), template = %template.source()))]
    pub fn synthesize(clusters: &[ClusterInfo], template: &ContextNameTemplate) -> Result<Self> {
        let user = NamedUser::google_auth();
        let mut config = Kubeconfig {
            clusters: Vec::with_capacity(clusters.len()),
            contexts: Vec::with_capacity(clusters.len()),
            users: Vec::new(),
        };

        for cluster in clusters {
            let id = cluster.id();
            let context_name = template.render(cluster)?;
            debug!(cluster = %id, context = %context_name, "Adding cluster");

            config.clusters.push(NamedCluster {
                name: id.clone(),
                cluster: ClusterEndpoint {
                    certificate_authority_data: cluster.ca_data.clone(),
                    server: cluster.server(),
                },
            });
            config.contexts.push(NamedContext {
                name: context_name,
                context: ContextRef {
                    cluster: id,
                    user: user.name.clone(),
                },
            });
        }

        config.users.push(user);
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
