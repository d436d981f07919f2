//! Locating the settings layers on disk

use crate::store::FileBackend;
use explorer_fs::{ExplorerPath, NormalizedPath};
use std::path::PathBuf;

/// Resolves where each settings layer lives for a workspace.
///
/// 1. Global defaults (`<config_dir>/explorer-order/settings.json`)
/// 2. Workspace settings (`<workspace>/.explorer-order/settings.json`)
#[derive(Debug, Clone)]
pub struct SettingsResolver {
    /// Workspace root directory
    root: NormalizedPath,

    /// Override for the global config directory (used for testing).
    /// When `None`, the platform directory from `dirs::config_dir()` is used.
    global_config_dir_override: Option<PathBuf>,
}

impl SettingsResolver {
    /// Create a resolver for the given workspace root.
    ///
    /// Uses the platform-appropriate global config directory:
    /// - Linux: `~/.config/explorer-order/`
    /// - macOS: `~/Library/Application Support/explorer-order/`
    /// - Windows: `%APPDATA%\explorer-order\`
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            root,
            global_config_dir_override: None,
        }
    }

    /// Create a resolver with a custom global config directory.
    pub fn with_global_config_dir(root: NormalizedPath, global_config_dir: PathBuf) -> Self {
        Self {
            root,
            global_config_dir_override: Some(global_config_dir),
        }
    }

    /// Workspace root this resolver was created for.
    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join(ExplorerPath::GlobalConfigDir.as_str()))
    }

    /// Path of the writable workspace settings blob.
    pub fn workspace_settings_path(&self) -> NormalizedPath {
        self.root
            .join(ExplorerPath::WorkspaceConfigDir.as_str())
            .join(ExplorerPath::SettingsFile.as_str())
    }

    /// Path of the global settings blob, when a config dir is known.
    pub fn global_settings_path(&self) -> Option<NormalizedPath> {
        self.global_config_dir()
            .map(|dir| NormalizedPath::new(dir.join(ExplorerPath::SettingsFile.as_str())))
    }

    /// Check whether the workspace already has a settings file.
    pub fn has_workspace_settings(&self) -> bool {
        self.workspace_settings_path().is_file()
    }

    pub fn workspace_backend(&self) -> FileBackend {
        FileBackend::new(self.workspace_settings_path())
    }

    pub fn global_backend(&self) -> Option<FileBackend> {
        self.global_settings_path().map(FileBackend::new)
    }
}
