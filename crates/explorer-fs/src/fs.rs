//! Filesystem collaborator used by the ordering layer
//!
//! The ordering engine never touches `std::fs` directly: listings and stat
//! calls go through [`FileSystem`], so hosts can substitute their own
//! virtual filesystem.

use crate::{Error, NormalizedPath, Result};
use std::fs;

/// One entry of a raw directory listing, before any ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: String,
    pub is_directory: bool,
}

impl RawEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
        }
    }
}

/// Filesystem operations required by the explorer.
pub trait FileSystem {
    /// List the immediate children of `path` in no particular order.
    fn list_directory(&self, path: &NormalizedPath) -> Result<Vec<RawEntry>>;

    /// Stat `path`; errors when it cannot be inspected.
    fn is_directory(&self, path: &NormalizedPath) -> Result<bool>;

    /// Create an empty file. Fails if something already exists at `path`.
    fn create_file(&self, path: &NormalizedPath) -> Result<()>;

    /// Create a directory (and any missing parents).
    fn create_dir(&self, path: &NormalizedPath) -> Result<()>;

    /// Rename or move `from` to `to`.
    fn rename(&self, from: &NormalizedPath, to: &NormalizedPath) -> Result<()>;

    /// Remove a file, or a directory with all its contents.
    fn remove(&self, path: &NormalizedPath) -> Result<()>;

    /// Copy a file, or a directory recursively.
    fn copy(&self, from: &NormalizedPath, to: &NormalizedPath) -> Result<()>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    fn ensure_vacant(path: &NormalizedPath) -> Result<()> {
        if path.exists() {
            return Err(Error::AlreadyExists {
                path: path.to_native(),
            });
        }
        Ok(())
    }

    fn copy_tree(from: &std::path::Path, to: &std::path::Path) -> Result<()> {
        fs::create_dir_all(to).map_err(|e| Error::io(to, e))?;
        for entry in fs::read_dir(from).map_err(|e| Error::io(from, e))? {
            let entry = entry.map_err(|e| Error::io(from, e))?;
            let source = entry.path();
            let target = to.join(entry.file_name());
            let file_type = entry.file_type().map_err(|e| Error::io(&source, e))?;
            if file_type.is_dir() {
                Self::copy_tree(&source, &target)?;
            } else {
                fs::copy(&source, &target).map_err(|e| Error::io(&source, e))?;
            }
        }
        Ok(())
    }
}

impl FileSystem for LocalFs {
    fn list_directory(&self, path: &NormalizedPath) -> Result<Vec<RawEntry>> {
        let native = path.to_native();
        let reader = fs::read_dir(&native).map_err(|e| Error::io(&native, e))?;

        let mut entries = Vec::new();
        for entry in reader {
            let entry = entry.map_err(|e| Error::io(&native, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            // Follow symlinks so a link to a folder lists as a folder.
            let is_directory = entry.path().is_dir();
            entries.push(RawEntry { name, is_directory });
        }

        tracing::debug!(%path, count = entries.len(), "Listed directory");
        Ok(entries)
    }

    fn is_directory(&self, path: &NormalizedPath) -> Result<bool> {
        let native = path.to_native();
        fs::metadata(&native)
            .map(|meta| meta.is_dir())
            .map_err(|e| Error::io(&native, e))
    }

    fn create_file(&self, path: &NormalizedPath) -> Result<()> {
        Self::ensure_vacant(path)?;
        let native = path.to_native();
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&native)
            .map(|_| ())
            .map_err(|e| Error::io(&native, e))
    }

    fn create_dir(&self, path: &NormalizedPath) -> Result<()> {
        Self::ensure_vacant(path)?;
        let native = path.to_native();
        fs::create_dir_all(&native).map_err(|e| Error::io(&native, e))
    }

    fn rename(&self, from: &NormalizedPath, to: &NormalizedPath) -> Result<()> {
        Self::ensure_vacant(to)?;
        fs::rename(from.to_native(), to.to_native()).map_err(|e| Error::io(from.to_native(), e))
    }

    fn remove(&self, path: &NormalizedPath) -> Result<()> {
        let native = path.to_native();
        let removed = if self.is_directory(path)? {
            fs::remove_dir_all(&native)
        } else {
            fs::remove_file(&native)
        };
        removed.map_err(|e| Error::io(&native, e))
    }

    fn copy(&self, from: &NormalizedPath, to: &NormalizedPath) -> Result<()> {
        Self::ensure_vacant(to)?;
        if self.is_directory(from)? {
            Self::copy_tree(&from.to_native(), &to.to_native())
        } else {
            fs::copy(from.to_native(), to.to_native())
                .map(|_| ())
                .map_err(|e| Error::io(from.to_native(), e))
        }
    }
}
