// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod gcp;
pub mod kubeconfig;
pub mod template;
pub mod types;

#[cfg(test)]
pub mod test_utils;

use tracing::{info, instrument};

use crate::discovery::{descendant_projects, enumerate_clusters};
use crate::error::Result;
use crate::gcp::{ClusterSource, FolderSource, ProjectSource};
use crate::kubeconfig::Kubeconfig;
use crate::template::ContextNameTemplate;

/// Run the whole pipeline: folders, projects, clusters, then the document.
///
/// Any stage failure aborts the run; no partial document is ever returned.
#[instrument(skip(source, template))]
pub async fn generate<S>(
    source: &S,
    search_root: &str,
    template: &ContextNameTemplate,
) -> Result<Kubeconfig>
where
    S: FolderSource + ProjectSource + ClusterSource + ?Sized,
{
    let projects = descendant_projects(source, search_root).await?;
    let clusters = enumerate_clusters(source, &projects).await?;
    let config = Kubeconfig::synthesize(&clusters, template)?;

    info!(
        "Generated kubeconfig with {} clusters from {} projects",
        config.clusters.len(),
        projects.len()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_CONTEXT_NAME_TEMPLATE;
    use crate::error::GkeKubeconfigError;
    use crate::test_utils::{gke_cluster, FixtureSource};
    use crate::types::{Folder, Project, ProjectState};

    fn organization() -> FixtureSource {
        FixtureSource::new()
            .with_folders(vec![
                Folder::new("folders/1", "engineering", "organizations/1"),
                Folder::new("folders/2", "platform", "folders/1"),
                Folder::new("folders/3", "sandbox", "organizations/1"),
            ])
            .with_projects(vec![
                Project::new("projects/100", "folders/2", ProjectState::Active),
                Project::new("projects/200", "folders/3", ProjectState::Active),
                Project::new("projects/300", "folders/1", ProjectState::DeleteRequested),
                Project::new("projects/400", "organizations/1", ProjectState::Active),
            ])
            .with_clusters(
                "projects/100",
                vec![gke_cluster("platform-prod", "us-west1", "west-cluster", "10.0.0.1")],
            )
            .with_clusters(
                "projects/200",
                vec![gke_cluster("sandbox-dev", "europe-west4-a", "dev", "10.0.0.2")],
            )
            .with_clusters(
                "projects/300",
                vec![gke_cluster("retired", "us-east1", "old", "10.0.0.3")],
            )
    }

    fn template() -> ContextNameTemplate {
        ContextNameTemplate::compile(DEFAULT_CONTEXT_NAME_TEMPLATE).unwrap()
    }

    fn cluster_names(config: &Kubeconfig) -> Vec<&str> {
        let mut names: Vec<&str> = config.clusters.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    #[tokio::test]
    async fn test_generate_under_search_root() {
        let config = generate(&organization(), "engineering", &template())
            .await
            .unwrap();

        assert_eq!(cluster_names(&config), vec!["platform-prod/us-west1/west-cluster"]);
        assert_eq!(config.contexts[0].name, "platform-prod-west-cluster");
        assert_eq!(config.users.len(), 1);
    }

    #[tokio::test]
    async fn test_generate_without_search_root() {
        let config = generate(&organization(), "", &template()).await.unwrap();

        assert_eq!(
            cluster_names(&config),
            vec![
                "platform-prod/us-west1/west-cluster",
                "sandbox-dev/europe-west4-a/dev"
            ]
        );
    }

    #[tokio::test]
    async fn test_generate_with_no_eligible_projects() {
        let config = generate(&organization(), "no-such-folder", &template())
            .await
            .unwrap();

        assert!(config.clusters.is_empty());
        assert!(config.contexts.is_empty());
        assert_eq!(config.users.len(), 1);
    }

    #[tokio::test]
    async fn test_generate_aborts_on_cluster_failure() {
        let source = organization().fail_clusters_for("projects/200");

        let result = generate(&source, "", &template()).await;

        assert!(matches!(result, Err(GkeKubeconfigError::ClusterFetch { .. })));
    }
}
