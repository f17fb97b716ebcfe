// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gke_kubeconfig::config::{Args, Config};
use gke_kubeconfig::error::GkeKubeconfigError;
use gke_kubeconfig::gcp::{fetch_access_token, GcpClient};
use gke_kubeconfig::generate;
use gke_kubeconfig::template::ContextNameTemplate;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout carries only the kubeconfig
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = Config::from_args(Args::parse())?;

    // Fail on a bad template before touching any API
    let template = ContextNameTemplate::compile(&config.context_name_template)?;

    let token = fetch_access_token(&config.credentials)
        .await
        .map_err(GkeKubeconfigError::Credentials)?;

    let kubeconfig = {
        let client = GcpClient::new(&config, token).map_err(GkeKubeconfigError::Client)?;
        generate(&client, &config.search_root, &template).await?
    };

    let yaml = kubeconfig.to_yaml()?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(yaml.as_bytes())?;
    stdout.flush()?;

    info!("Wrote kubeconfig with {} contexts", kubeconfig.contexts.len());
    Ok(())
}
