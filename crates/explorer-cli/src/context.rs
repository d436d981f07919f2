//! Workspace context detection
//!
//! Finds the workspace root from any directory so commands work from
//! anywhere inside it, the way git finds its repository.

use std::path::{Path, PathBuf};

use explorer_core::{Explorer, SettingsResolver};
use explorer_fs::{ExplorerPath, NormalizedPath};

use crate::error::{CliError, Result};

/// Workspace the CLI operates on.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    root: NormalizedPath,
    global_config_dir: Option<PathBuf>,
}

impl WorkspaceContext {
    /// Resolve the workspace for this invocation.
    ///
    /// An explicit `--workspace` wins. Otherwise walk up from `cwd` to the
    /// nearest folder holding `.explorer-order/`, falling back to `cwd`.
    pub fn resolve(
        cwd: &Path,
        workspace: Option<&Path>,
        global_config_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let root = match workspace {
            Some(dir) => {
                let dir = if dir.is_absolute() {
                    dir.to_path_buf()
                } else {
                    cwd.join(dir)
                };
                if !dir.is_dir() {
                    return Err(CliError::user(format!(
                        "Workspace is not a directory: {}",
                        dir.display()
                    )));
                }
                dunce::canonicalize(&dir)?
            }
            None => {
                let cwd = dunce::canonicalize(cwd)?;
                detect_root(&cwd).unwrap_or(cwd)
            }
        };

        tracing::debug!(root = %root.display(), "Resolved workspace");
        Ok(Self {
            root: NormalizedPath::new(root),
            global_config_dir,
        })
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn resolver(&self) -> SettingsResolver {
        match &self.global_config_dir {
            Some(dir) => SettingsResolver::with_global_config_dir(self.root.clone(), dir.clone()),
            None => SettingsResolver::new(self.root.clone()),
        }
    }

    pub fn open_explorer(&self) -> Result<Explorer> {
        Ok(Explorer::open_with(&self.resolver())?)
    }

    /// Resolve a folder argument: absolute paths are kept, anything else is
    /// taken relative to the workspace root.
    pub fn folder(&self, arg: Option<&str>) -> NormalizedPath {
        match arg {
            None | Some("") | Some(".") => self.root.clone(),
            Some(path) if Path::new(path).is_absolute() => NormalizedPath::new(path),
            Some(path) => self.root.join(path),
        }
    }

    /// Workspace-relative display form of `path`.
    pub fn display(&self, path: &NormalizedPath) -> String {
        if *path == self.root {
            return ".".to_string();
        }
        match path.as_str().strip_prefix(self.root.as_str()) {
            Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/').to_string(),
            _ => path.to_string(),
        }
    }
}

/// Walk up from `start` looking for a folder that holds `.explorer-order/`.
pub fn detect_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(ExplorerPath::WorkspaceConfigDir.as_str()).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_detect_root_walks_up() {
        let temp = TempDir::new().unwrap();
        let root = dunce::canonicalize(temp.path()).unwrap();
        fs::create_dir_all(root.join(".explorer-order")).unwrap();
        fs::create_dir_all(root.join("src/components")).unwrap();

        assert_eq!(detect_root(&root.join("src/components")), Some(root));
    }

    #[test]
    fn test_resolve_falls_back_to_cwd() {
        let temp = TempDir::new().unwrap();
        let cwd = dunce::canonicalize(temp.path()).unwrap();

        let ctx = WorkspaceContext::resolve(&cwd, None, None).unwrap();
        if detect_root(&cwd).is_none() {
            assert_eq!(ctx.root(), &NormalizedPath::new(&cwd));
        }
    }

    #[test]
    fn test_explicit_workspace_must_exist() {
        let temp = TempDir::new().unwrap();
        let err = WorkspaceContext::resolve(temp.path(), Some(Path::new("missing")), None).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_folder_arguments() {
        let ctx = WorkspaceContext {
            root: NormalizedPath::new("/ws"),
            global_config_dir: None,
        };

        assert_eq!(ctx.folder(None).as_str(), "/ws");
        assert_eq!(ctx.folder(Some(".")).as_str(), "/ws");
        assert_eq!(ctx.folder(Some("src/hooks")).as_str(), "/ws/src/hooks");
        assert_eq!(ctx.display(&NormalizedPath::new("/ws/src/hooks")), "src/hooks");
        assert_eq!(ctx.display(&NormalizedPath::new("/ws")), ".");
        assert_eq!(ctx.display(&NormalizedPath::new("/other")), "/other");
    }
}
