//! Well-known names used when locating settings on disk.

use std::path::Path;

/// Fixed directory and file names for persisted explorer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerPath {
    /// The `.explorer-order` directory at the workspace root
    WorkspaceConfigDir,
    /// The `explorer-order` directory under the platform config dir
    GlobalConfigDir,
    /// The settings blob file inside either config directory
    SettingsFile,
}

impl ExplorerPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WorkspaceConfigDir => ".explorer-order",
            Self::GlobalConfigDir => "explorer-order",
            Self::SettingsFile => "settings.json",
        }
    }
}

impl AsRef<Path> for ExplorerPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ExplorerPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ExplorerPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
