// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Folder hierarchy fetching and pruning to a search root

use futures::TryStreamExt;
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

use crate::error::{GkeKubeconfigError, Result};
use crate::gcp::FolderSource;
use crate::types::Folder;

/// Folders keyed by resource name. Only ever shrinks after the initial fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSet {
    folders: HashMap<String, Folder>,
}

impl FolderSet {
    pub fn contains(&self, name: &str) -> bool {
        self.folders.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.folders.keys().map(String::as_str)
    }

    /// Whether the parent chain starting at `start` passes through `root`.
    ///
    /// The walk stops without a match at a self-parented folder or at a parent
    /// outside the set (an organization). It is bounded by the set size, so a
    /// malformed cyclic hierarchy cannot hang it.
    pub fn reaches(&self, start: &str, root: &str) -> bool {
        let mut current = start;
        for _ in 0..=self.folders.len() {
            if current == root {
                return true;
            }
            match self.folders.get(current) {
                Some(folder) if !folder.is_top() => current = &folder.parent,
                _ => return false,
            }
        }

        warn!(
            folder = start,
            "Folder parent chain does not terminate, treating it as outside the search root"
        );
        false
    }

    /// Keep only `root` and the folders below it
    pub fn prune(&mut self, root: &str) {
        let marked: Vec<String> = self
            .folders
            .keys()
            .filter(|name| !self.reaches(name, root))
            .cloned()
            .collect();

        for name in &marked {
            debug!(folder = %name, "Pruning folder outside search root");
            self.folders.remove(name);
        }
    }
}

impl FromIterator<Folder> for FolderSet {
    fn from_iter<I: IntoIterator<Item = Folder>>(iter: I) -> Self {
        Self {
            folders: iter.into_iter().map(|f| (f.name.clone(), f)).collect(),
        }
    }
}

/// Fetch every folder and prune the set to the subtree under the folder whose
/// display name is `search_root`. An empty search root disables pruning.
///
/// When several folders share the display name, the first one returned wins.
#[instrument(skip(source))]
pub async fn resolve_folders<S>(source: &S, search_root: &str) -> Result<FolderSet>
where
    S: FolderSource + ?Sized,
{
    let mut set = FolderSet::default();
    let mut root: Option<String> = None;

    let mut folders = source.folders();
    while let Some(folder) = folders
        .try_next()
        .await
        .map_err(GkeKubeconfigError::FolderFetch)?
    {
        if !search_root.is_empty() && folder.display_name == search_root {
            match &root {
                None => root = Some(folder.name.clone()),
                Some(first) => warn!(
                    search_root,
                    kept = %first,
                    ignored = %folder.name,
                    "Multiple folders match the search root, using the first one"
                ),
            }
        }
        set.folders.insert(folder.name.clone(), folder);
    }

    info!("Found {} folders", set.len());

    if search_root.is_empty() {
        return Ok(set);
    }

    match root {
        Some(root) => {
            set.prune(&root);
            info!("{} folders under search root {}", set.len(), root);
        }
        None => {
            warn!(search_root, "No folder matches the search root, no projects will be selected");
            set.folders.clear();
        }
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::test_utils::FixtureSource;

    fn sorted_names(set: &FolderSet) -> Vec<&str> {
        let mut names: Vec<&str> = set.names().collect();
        names.sort_unstable();
        names
    }

    /// org-level folders `a` and `x`, with `b` under `a`, `c` under `b`, `y` under `x`
    fn hierarchy() -> Vec<Folder> {
        vec![
            Folder::new("folders/a", "alpha", "organizations/1"),
            Folder::new("folders/b", "beta", "folders/a"),
            Folder::new("folders/c", "gamma", "folders/b"),
            Folder::new("folders/x", "xray", "organizations/1"),
            Folder::new("folders/y", "yankee", "folders/x"),
        ]
    }

    #[tokio::test]
    async fn test_self_parented_top_is_removed() {
        let source = FixtureSource::new().with_folders(vec![
            Folder::new("A", "a", "A"),
            Folder::new("B", "b", "A"),
            Folder::new("C", "c", "B"),
        ]);

        let set = resolve_folders(&source, "b").await.unwrap();

        assert_eq!(sorted_names(&set), vec!["B", "C"]);
    }

    #[tokio::test]
    async fn test_empty_search_root_keeps_everything() {
        let source = FixtureSource::new().with_folders(hierarchy());

        let set = resolve_folders(&source, "").await.unwrap();

        assert_eq!(set, hierarchy().into_iter().collect::<FolderSet>());
    }

    #[tokio::test]
    async fn test_prune_to_subtree() {
        let source = FixtureSource::new().with_folders(hierarchy());

        let set = resolve_folders(&source, "alpha").await.unwrap();

        assert_eq!(sorted_names(&set), vec!["folders/a", "folders/b", "folders/c"]);
    }

    #[tokio::test]
    async fn test_prune_to_leaf() {
        let source = FixtureSource::new().with_folders(hierarchy());

        let set = resolve_folders(&source, "gamma").await.unwrap();

        assert_eq!(sorted_names(&set), vec!["folders/c"]);
    }

    #[tokio::test]
    async fn test_unknown_search_root_removes_everything() {
        let source = FixtureSource::new().with_folders(hierarchy());

        let set = resolve_folders(&source, "nonexistent").await.unwrap();

        assert!(set.is_empty());
    }

    #[tokio::test]
    async fn test_first_matching_display_name_wins() {
        let source = FixtureSource::new().with_folders(vec![
            Folder::new("folders/a", "shared", "organizations/1"),
            Folder::new("folders/a1", "child-a", "folders/a"),
            Folder::new("folders/b", "shared", "organizations/1"),
            Folder::new("folders/b1", "child-b", "folders/b"),
        ]);

        let set = resolve_folders(&source, "shared").await.unwrap();

        assert_eq!(sorted_names(&set), vec!["folders/a", "folders/a1"]);
    }

    #[tokio::test]
    async fn test_fetch_error_aborts() {
        let source = FixtureSource::new()
            .with_folders(hierarchy())
            .fail_folders_after(2);

        let result = resolve_folders(&source, "").await;

        assert!(matches!(
            result,
            Err(GkeKubeconfigError::FolderFetch(ApiError::Status { .. }))
        ));
    }

    #[test]
    fn test_kept_folders_reach_root_and_removed_do_not() {
        let all: FolderSet = hierarchy().into_iter().collect();
        let mut pruned = all.clone();
        pruned.prune("folders/b");

        for name in all.names() {
            assert_eq!(pruned.contains(name), all.reaches(name, "folders/b"), "{}", name);
        }
        assert_eq!(sorted_names(&pruned), vec!["folders/b", "folders/c"]);
    }

    #[test]
    fn test_cycle_does_not_hang() {
        let mut set: FolderSet = vec![
            Folder::new("folders/root", "root", "organizations/1"),
            Folder::new("folders/p", "p", "folders/q"),
            Folder::new("folders/q", "q", "folders/p"),
        ]
        .into_iter()
        .collect();

        assert!(!set.reaches("folders/p", "folders/root"));

        set.prune("folders/root");
        assert_eq!(sorted_names(&set), vec!["folders/root"]);
    }
}
