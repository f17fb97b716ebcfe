// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Context name template used when none is given
pub const DEFAULT_CONTEXT_NAME_TEMPLATE: &str = "{{ .ProjectId }}-{{ .Name }}";

/// The shared kubeconfig user and the auth plugin it delegates to
pub mod auth {
    pub const USER_NAME: &str = "google-auth";
    pub const PROVIDER_NAME: &str = "gcp";
    pub const CMD_PATH: &str = "gke-gcloud-auth-plugin";
    pub const EXPIRY_KEY: &str = "{.credential.token_expiry}";
    pub const TOKEN_KEY: &str = "{.credential.access_token}";
}

/// Google Cloud API endpoints and request conventions
pub mod api {
    pub const RESOURCE_MANAGER_URL: &str = "https://cloudresourcemanager.googleapis.com/v3/";
    pub const CONTAINER_URL: &str = "https://container.googleapis.com/v1/";
    /// Location selector matching every region and zone
    pub const ALL_LOCATIONS: &str = "-";
    /// Environment variable holding a pre-issued OAuth access token
    pub const ACCESS_TOKEN_ENV: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";
    pub const DEFAULT_GCLOUD_PATH: &str = "gcloud";
}
