//! Categorized registry of discovered templates.
//!
//! The registry groups templates by what they are built with, so a consumer
//! can list e.g. every Tailwind template without scanning dependency maps.

use crate::analysis::TemplateAnalysis;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Component libraries that put a template in the "ui-frameworks" category.
const UI_FRAMEWORK_PACKAGES: [&str; 12] = [
    "@mui/material",
    "@chakra-ui/react",
    "antd",
    "@mantine/core",
    "@nextui-org/react",
    "@headlessui/react",
    "@radix-ui/themes",
    "styled-components",
    "@emotion/react",
    "react-bootstrap",
    "daisyui",
    "@shadcn/ui",
];

const UI_FRAMEWORK_PREFIXES: [&str; 1] = ["@radix-ui/react-"];

const GRAPHQL_PACKAGES: [&str; 2] = ["graphql", "urql"];

const GRAPHQL_PREFIXES: [&str; 3] = ["@apollo/", "@urql/", "graphql-"];

/// Templates grouped by feature, each entry an "owner/name".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryCategories {
    /// Templates depending on a known component library.
    #[serde(rename = "ui-frameworks")]
    pub ui_frameworks: Vec<String>,

    /// Templates with a root `tsconfig.json`.
    pub typescript: Vec<String>,

    /// Templates declaring `tailwindcss`.
    pub tailwind: Vec<String>,

    /// Templates depending on a GraphQL client or server.
    pub graphql: Vec<String>,
}

/// A snapshot of discovered templates with category indexes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRegistry {
    /// When the registry was generated (RFC 3339).
    pub last_updated: String,

    /// All discovered templates.
    pub templates: Vec<TemplateAnalysis>,

    /// Category indexes over `templates`.
    pub categories: RegistryCategories,
}

impl TemplateRegistry {
    /// Builds a registry from discovered templates.
    pub fn from_templates(templates: Vec<TemplateAnalysis>, generated_at: DateTime<Utc>) -> Self {
        let mut categories = RegistryCategories::default();

        for template in &templates {
            let id = template.full_name();
            if is_ui_framework_template(template) {
                categories.ui_frameworks.push(id.clone());
            }
            if template.has_typescript {
                categories.typescript.push(id.clone());
            }
            if template.has_tailwind.is_some() {
                categories.tailwind.push(id.clone());
            }
            if is_graphql_template(template) {
                categories.graphql.push(id);
            }
        }

        Self {
            last_updated: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            templates,
            categories,
        }
    }
}

fn is_ui_framework_template(template: &TemplateAnalysis) -> bool {
    depends_on_any(template, &UI_FRAMEWORK_PACKAGES, &UI_FRAMEWORK_PREFIXES)
}

fn is_graphql_template(template: &TemplateAnalysis) -> bool {
    depends_on_any(template, &GRAPHQL_PACKAGES, &GRAPHQL_PREFIXES)
}

fn depends_on_any(template: &TemplateAnalysis, packages: &[&str], prefixes: &[&str]) -> bool {
    template.dependency_names().any(|name| {
        packages.contains(&name) || prefixes.iter().any(|prefix| name.starts_with(prefix))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn template(name: &str, dependencies: &[&str]) -> TemplateAnalysis {
        TemplateAnalysis {
            name: name.to_string(),
            owner: "acme".to_string(),
            stars: 500,
            description: None,
            dependencies: dependencies
                .iter()
                .map(|dep| (dep.to_string(), "*".to_string()))
                .collect(),
            dev_dependencies: BTreeMap::new(),
            has_typescript: false,
            has_tests: false,
            has_tailwind: None,
            last_update: None,
            license: None,
            topics: Vec::new(),
        }
    }

    #[test]
    fn categorizes_templates() {
        let mut typed = template("typed", &["@apollo/client"]);
        typed.has_typescript = true;
        typed.has_tailwind = Some("^3.4.0".to_string());
        let ui = template("ui", &["@radix-ui/react-dialog", "react"]);
        let plain = template("plain", &["react"]);

        let generated_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let registry = TemplateRegistry::from_templates(vec![typed, ui, plain], generated_at);

        assert_eq!(registry.last_updated, "2024-03-01T12:00:00Z");
        assert_eq!(registry.templates.len(), 3);
        assert_eq!(registry.categories.typescript, vec!["acme/typed"]);
        assert_eq!(registry.categories.tailwind, vec!["acme/typed"]);
        assert_eq!(registry.categories.graphql, vec!["acme/typed"]);
        assert_eq!(registry.categories.ui_frameworks, vec!["acme/ui"]);
    }

    #[test]
    fn serializes_category_keys() {
        let generated_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let registry = TemplateRegistry::from_templates(Vec::new(), generated_at);

        let value = serde_json::to_value(&registry).unwrap();
        assert!(value["categories"]["ui-frameworks"].is_array());
        assert_eq!(value["lastUpdated"], "2024-03-01T12:00:00Z");
    }

    #[test]
    fn dev_dependencies_count_for_categories() {
        let mut template = template("dev", &[]);
        template
            .dev_dependencies
            .insert("graphql-codegen".to_string(), "1.0.0".to_string());

        assert!(is_graphql_template(&template));
        assert!(!is_ui_framework_template(&template));
    }
}
