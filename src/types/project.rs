// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};

/// Project lifecycle state. States added to the API later land in `Other`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectState {
    #[default]
    StateUnspecified,
    Active,
    DeleteRequested,
    #[serde(other)]
    Other,
}

/// A project, as returned by `projects:search`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Resource name, e.g. `projects/415104041262`
    pub name: String,
    #[serde(default)]
    pub parent: String,
    #[serde(default)]
    pub state: ProjectState,
}

impl Project {
    pub fn new(name: impl Into<String>, parent: impl Into<String>, state: ProjectState) -> Self {
        Self {
            name: name.into(),
            parent: parent.into(),
            state,
        }
    }
}
