//! [`TestWorkspace`] builder for explorer test scenarios.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Relative location of the workspace settings blob.
pub const SETTINGS_PATH: &str = ".explorer-order/settings.json";

/// A temporary workspace directory with helpers for building a tree and
/// asserting on it afterwards.
///
/// # Example
///
/// ```rust,no_run
/// use explorer_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// ws.file("src/index.js").dir("src/components");
/// ws.assert_exists("src/index.js");
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary workspace.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root path of the workspace.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the workspace.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Create an empty file, along with any missing parent directories.
    pub fn file(&self, rel: &str) -> &Self {
        self.file_with(rel, "")
    }

    /// Create a file with `content`, along with any missing parent directories.
    pub fn file_with(&self, rel: &str, content: &str) -> &Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestWorkspace::file_with: {}: {e}", path.display()));
        self
    }

    /// Create a directory (and its parents).
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.path(rel)).unwrap();
        self
    }

    /// Create every path in `specs`; names ending in `/` become directories.
    pub fn tree(&self, specs: &[&str]) -> &Self {
        for entry in specs {
            match entry.strip_suffix('/') {
                Some(dir) => self.dir(dir),
                None => self.file(entry),
            };
        }
        self
    }

    /// Write the workspace settings blob.
    pub fn write_settings(&self, settings: &Value) -> &Self {
        let text = serde_json::to_string_pretty(settings).unwrap();
        self.file_with(SETTINGS_PATH, &text)
    }

    /// Read the workspace settings blob back as JSON.
    ///
    /// # Panics
    /// Panics if the file is missing or is not valid JSON.
    pub fn read_settings(&self) -> Value {
        let path = self.path(SETTINGS_PATH);
        let text = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("No settings written at {}", path.display()));
        serde_json::from_str(&text).unwrap()
    }

    /// Assert that `rel` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            full_path.exists(),
            "Expected path to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_not_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            !full_path.exists(),
            "Expected path NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `rel` contains `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let full_path = self.path(rel);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
