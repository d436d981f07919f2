//! Normalized path handling for folder keys and listings

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::{Path, PathBuf};

/// A path normalized to forward slashes with `.`/`..` and repeated
/// separators resolved.
///
/// Folder paths are compared as strings when resolving ordering rules, so
/// `/proj/src/`, `/proj/./src` and `\proj\src` must all collapse to the same
/// value. Conversion to a platform path happens only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy();
        Self {
            inner: clean(&raw),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let joined = if self.inner.is_empty() {
            segment.to_string()
        } else if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self {
            inner: clean(&joined),
        }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        match self.inner.rfind('/') {
            Some(0) if self.inner.len() > 1 => Some(Self {
                inner: "/".to_string(),
            }),
            Some(idx) if idx > 0 => Some(Self {
                inner: self.inner[..idx].to_string(),
            }),
            _ => None,
        }
    }

    /// Get the last path component, `None` for the root or an empty path.
    pub fn file_name(&self) -> Option<&str> {
        self.inner.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Base name used for canonical-name matching; empty for the root.
    pub fn base_name(&self) -> &str {
        self.file_name().unwrap_or("")
    }

    /// True when `other` is this path or lies somewhere below it.
    pub fn contains(&self, other: &NormalizedPath) -> bool {
        other.inner == self.inner
            || other
                .inner
                .strip_prefix(&self.inner)
                .is_some_and(|rest| rest.starts_with('/') || self.inner.ends_with('/'))
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Get the extension if present. Dotfiles such as `.gitignore` have none.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }
}

/// Normalize separators and resolve `.`/`..` components lexically.
///
/// A leading `//` (UNC share) is preserved; `..` never climbs above the
/// first component.
fn clean(raw: &str) -> String {
    let slashed = raw.replace('\\', "/");
    let (prefix, rest) = if slashed.starts_with("//") && !slashed.starts_with("///") {
        ("//", &slashed[2..])
    } else if slashed.starts_with('/') {
        ("/", slashed.trim_start_matches('/'))
    } else {
        ("", slashed.as_str())
    };

    let mut parts: Vec<&str> = Vec::new();
    for component in rest.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }

    format!("{}{}", prefix, parts.join("/"))
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Serialize for NormalizedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner)
    }
}

impl<'de> Deserialize<'de> for NormalizedPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
