// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use std::fmt;
use url::Url;

use crate::constants::{api, DEFAULT_CONTEXT_NAME_TEMPLATE};

/// Generate a kubeconfig for every GKE cluster below a Google Cloud folder
#[derive(Parser, Debug)]
#[command(name = "gke-kubeconfig", version, about, long_about = None)]
pub struct Args {
    /// Folder under which to list projects (display name, empty means all projects)
    #[arg(long, env = "GKE_KUBECONFIG_SEARCH_ROOT", default_value = "")]
    pub search_root: String,

    /// Template to construct context name
    #[arg(
        long,
        env = "GKE_KUBECONFIG_CONTEXT_NAME_TEMPLATE",
        default_value = DEFAULT_CONTEXT_NAME_TEMPLATE
    )]
    pub context_name_template: String,

    /// gcloud binary used to obtain an access token
    #[arg(long, env = "GKE_KUBECONFIG_GCLOUD_PATH", default_value = api::DEFAULT_GCLOUD_PATH)]
    pub gcloud_path: String,

    /// Resource Manager v3 API base URL
    #[arg(long, env = "GKE_KUBECONFIG_RESOURCE_MANAGER_URL", default_value = api::RESOURCE_MANAGER_URL, hide = true)]
    pub resource_manager_url: String,

    /// GKE v1 API base URL
    #[arg(long, env = "GKE_KUBECONFIG_CONTAINER_URL", default_value = api::CONTAINER_URL, hide = true)]
    pub container_url: String,

    #[arg(long, env = api::ACCESS_TOKEN_ENV, hide = true, hide_env_values = true)]
    pub access_token: Option<String>,
}

/// Where the OAuth access token comes from
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    AccessToken(String),
    Gcloud { path: String },
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::AccessToken(_) => f.write_str("AccessToken(<redacted>)"),
            Credentials::Gcloud { path } => f.debug_struct("Gcloud").field("path", path).finish(),
        }
    }
}

/// Pipeline configuration resolved from the command line and environment
#[derive(Debug, Clone)]
pub struct Config {
    pub search_root: String,
    pub context_name_template: String,
    pub credentials: Credentials,
    pub resource_manager_url: Url,
    pub container_url: Url,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let resource_manager_url = parse_base_url(&args.resource_manager_url)
            .context("Invalid Resource Manager API URL")?;
        let container_url =
            parse_base_url(&args.container_url).context("Invalid GKE API URL")?;

        let credentials = match args.access_token.filter(|t| !t.trim().is_empty()) {
            Some(token) => Credentials::AccessToken(token.trim().to_string()),
            None => Credentials::Gcloud {
                path: args.gcloud_path,
            },
        };

        Ok(Config {
            search_root: args.search_root,
            context_name_template: args.context_name_template,
            credentials,
            resource_manager_url,
            container_url,
        })
    }
}

/// Parse an API base URL, forcing a trailing slash so relative paths append to it
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).with_context(|| format!("'{}' is not a valid URL", raw))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("'{}' cannot be used as a base URL", raw);
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
