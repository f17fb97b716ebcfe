// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource records returned by the Resource Manager and GKE APIs.

pub mod cluster;
pub mod folder;
pub mod project;

pub use cluster::{ClusterInfo, ClusterList, GkeCluster};
pub use folder::Folder;
pub use project::{Project, ProjectState};
