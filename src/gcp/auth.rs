// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! OAuth access token acquisition

use std::fmt;
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::config::Credentials;
use crate::error::ApiError;

/// Bearer token for the Google Cloud APIs
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Obtain an access token, either as given or from `gcloud auth print-access-token`
#[instrument(skip(credentials))]
pub async fn fetch_access_token(credentials: &Credentials) -> Result<AccessToken, ApiError> {
    match credentials {
        Credentials::AccessToken(token) => {
            debug!("Using access token from environment");
            Ok(AccessToken::new(token.clone()))
        }
        Credentials::Gcloud { path } => print_access_token(path).await,
    }
}

async fn print_access_token(gcloud: &str) -> Result<AccessToken, ApiError> {
    let mut cmd = Command::new(gcloud);
    cmd.args(["auth", "print-access-token"]);

    debug!(command = ?cmd, "Executing gcloud");

    let output = cmd
        .output()
        .await
        .map_err(|e| ApiError::Credentials(format!("failed to execute {}: {}", gcloud, e)))?;

    if !output.status.success() {
        return Err(ApiError::Credentials(format!(
            "{} exited with {}: {}",
            gcloud,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let token = String::from_utf8(output.stdout)
        .map_err(|e| ApiError::Credentials(format!("token is not valid UTF-8: {}", e)))?;
    let token = token.trim();
    if token.is_empty() {
        return Err(ApiError::Credentials(format!("{} printed no token", gcloud)));
    }

    Ok(AccessToken::new(token))
}
