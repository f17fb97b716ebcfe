// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};

/// A node of the organization hierarchy, as returned by `folders:search`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Resource name, e.g. `folders/1234`
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    /// `folders/...` or `organizations/...`
    #[serde(default)]
    pub parent: String,
}

impl Folder {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        parent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            parent: parent.into(),
        }
    }

    /// A folder that names itself as parent marks the top of its tree
    pub fn is_top(&self) -> bool {
        self.name == self.parent
    }
}
