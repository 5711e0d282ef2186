// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// Name + url pair PokéAPI uses to reference any other resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Response of a list endpoint such as `GET /pokemon?limit=N` or `GET /type/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

impl ResourceList {
    pub fn urls(&self) -> Vec<String> {
        self.results.iter().map(|entry| entry.url.clone()).collect()
    }
}
