//! The per-repository analysis record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a qualifying template repository is built with.
///
/// Field order is the order of keys in the written snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateAnalysis {
    /// Repository name.
    pub name: String,

    /// Repository owner (user or organization).
    pub owner: String,

    /// Star count at the time of analysis.
    pub stars: u32,

    /// Repository description.
    pub description: Option<String>,

    /// Runtime dependencies declared in `package.json`.
    pub dependencies: BTreeMap<String, String>,

    /// Development dependencies declared in `package.json`.
    pub dev_dependencies: BTreeMap<String, String>,

    /// Whether `tsconfig.json` sits at the repository root.
    pub has_typescript: bool,

    /// Whether any root entry name contains "test" or "jest".
    pub has_tests: bool,

    /// Declared `tailwindcss` version range, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_tailwind: Option<String>,

    /// Timestamp of the last push.
    pub last_update: Option<String>,

    /// SPDX license identifier.
    pub license: Option<String>,

    /// Repository topics.
    pub topics: Vec<String>,
}

impl TemplateAnalysis {
    /// Full repository name in "owner/name" format.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Iterates over runtime and development dependency names.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .map(String::as_str)
    }
}
