//! Which raw entries a listing shows

use super::DirectoryEntry;

/// Dotfiles and dot-directories that stay visible.
pub const ALLOWED_HIDDEN: &[&str] = &[
    ".babelrc",
    ".dockerignore",
    ".editorconfig",
    ".env",
    ".env.example",
    ".env.local",
    ".eslintrc",
    ".eslintrc.js",
    ".eslintrc.json",
    ".gitattributes",
    ".github",
    ".gitignore",
    ".npmrc",
    ".nvmrc",
    ".prettierrc",
    ".vscode",
];

/// Directory names produced by build tools.
pub const BUILD_OUTPUTS: &[&str] = &["dist", "build", "out", ".next", ".nuxt"];

const NODE_MODULES: &str = "node_modules";

/// Presentation policy applied to a listing before it is ordered.
///
/// - hidden names are dropped unless allow-listed
/// - build-output directories are dropped
/// - `node_modules` is dropped at the workspace root
///
/// A build output or `node_modules` that the folder's custom order lists by
/// exact name is kept.
#[derive(Debug, Clone)]
pub struct ListingFilter {
    allowed_hidden: Vec<String>,
    build_outputs: Vec<String>,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            allowed_hidden: ALLOWED_HIDDEN.iter().map(|s| s.to_string()).collect(),
            build_outputs: BUILD_OUTPUTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ListingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep an additional hidden name visible.
    pub fn allow_hidden(mut self, name: impl Into<String>) -> Self {
        self.allowed_hidden.push(name.into());
        self
    }

    pub fn keeps(&self, name: &str, is_directory: bool, at_root: bool, custom: &[String]) -> bool {
        if name.starts_with('.') && !self.allowed_hidden.iter().any(|n| n == name) {
            return false;
        }

        let listed = custom.iter().any(|t| t == name);
        if is_directory && !listed && self.build_outputs.iter().any(|n| n == name) {
            return false;
        }
        if at_root && !listed && name == NODE_MODULES {
            return false;
        }
        true
    }

    pub fn retain(
        &self,
        mut entries: Vec<DirectoryEntry>,
        at_root: bool,
        custom: &[String],
    ) -> Vec<DirectoryEntry> {
        entries.retain(|e| self.keeps(&e.name, e.is_directory, at_root, custom));
        entries
    }
}
