//! Built-in template catalog
//!
//! A template is a named bundle of canonical-folder rules applied in bulk.
//! Adding a template is a data change to [`builtin_templates`].

use crate::rules::{CanonicalName, FolderKey, Rule, RuleSet};
use serde::{Deserialize, Serialize};

/// Version of the built-in catalog; bump when its contents change.
pub const CATALOG_VERSION: u32 = 1;

/// A named, reusable set of folder rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rules: RuleSet,
}

impl Template {
    pub fn new(name: impl Into<String>, description: impl Into<String>, rules: RuleSet) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            rules,
        }
    }
}

fn tokens(items: &[&str]) -> Rule {
    Rule::manual(items.iter().map(|s| s.to_string()).collect())
}

/// The immutable built-in catalog, in display order.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new(
            "React Project",
            "Components and hooks first, entry points next, styles last",
            RuleSet::from_iter([
                (
                    FolderKey::from(CanonicalName::Src),
                    tokens(&[
                        "components", "pages", "hooks", "utils", "assets", "App.jsx", "App.js",
                        "index.js", "*.jsx", "*.js", "*.css",
                    ]),
                ),
                (
                    FolderKey::from(CanonicalName::Components),
                    tokens(&["index.js", "*.jsx", "*.tsx", "*.js", "*.css"]),
                ),
            ]),
        ),
        Template::new(
            "Vue Project",
            "Views and components ahead of routing and state",
            RuleSet::from_iter([
                (
                    FolderKey::from(CanonicalName::Src),
                    tokens(&[
                        "components", "views", "router", "store", "assets", "App.vue", "main.js",
                    ]),
                ),
                (FolderKey::from(CanonicalName::Components), tokens(&["*.vue", "*.js"])),
            ]),
        ),
        Template::new(
            "Node.js Project",
            "Entry point first, then routes, controllers and models",
            RuleSet::from_iter([
                (
                    FolderKey::from(CanonicalName::Src),
                    tokens(&[
                        "index.js", "app.js", "routes", "controllers", "models", "utils", "*.js",
                    ]),
                ),
                (FolderKey::from(CanonicalName::Utils), tokens(&["index.js", "*.js"])),
            ]),
        ),
    ]
}

/// Look up a built-in template by exact name.
pub fn find_builtin(name: &str) -> Option<Template> {
    builtin_templates().into_iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique() {
        let templates = builtin_templates();
        let mut names: Vec<&str> = templates.iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), templates.len());
    }

    #[test]
    fn catalog_uses_canonical_keys_only() {
        for template in builtin_templates() {
            assert!(!template.rules.is_empty(), "{} has no rules", template.name);
            for key in template.rules.keys() {
                assert!(key.is_canonical(), "{} uses non-canonical key {}", template.name, key);
            }
        }
    }

    #[test]
    fn find_builtin_by_name() {
        assert!(find_builtin("Vue Project").is_some());
        assert!(find_builtin("vue project").is_none());
    }
}
