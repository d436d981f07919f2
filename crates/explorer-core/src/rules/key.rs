//! Folder keys: full paths or canonical short names

use explorer_fs::NormalizedPath;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Common directory base names whose rules apply project-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalName {
    Src,
    Components,
    Pages,
    Hooks,
    Utils,
    Assets,
    Views,
    Router,
    Store,
}

impl CanonicalName {
    pub const ALL: [CanonicalName; 9] = [
        Self::Src,
        Self::Components,
        Self::Pages,
        Self::Hooks,
        Self::Utils,
        Self::Assets,
        Self::Views,
        Self::Router,
        Self::Store,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Src => "src",
            Self::Components => "components",
            Self::Pages => "pages",
            Self::Hooks => "hooks",
            Self::Utils => "utils",
            Self::Assets => "assets",
            Self::Views => "views",
            Self::Router => "router",
            Self::Store => "store",
        }
    }

    /// Exact, case-sensitive lookup of a base name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key under which a rule is stored.
///
/// Persisted as a plain string. On load, a string equal to a canonical name
/// becomes [`FolderKey::Canonical`]; anything else is a [`FolderKey::Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FolderKey {
    Path(NormalizedPath),
    Canonical(CanonicalName),
}

impl FolderKey {
    /// Storage key for a folder: its canonical base name when it has one,
    /// otherwise the full path.
    pub fn for_folder(folder: &NormalizedPath) -> Self {
        match CanonicalName::parse(folder.base_name()) {
            Some(name) => Self::Canonical(name),
            None => Self::Path(folder.clone()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Path(path) => path.as_str(),
            Self::Canonical(name) => name.as_str(),
        }
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, Self::Canonical(_))
    }

    /// Fallback match used when no exact key exists: the key equals the
    /// folder's base name, or the folder path ends with the key text.
    ///
    /// The suffix test is a raw string comparison, so `src` also matches
    /// `/proj/mysrc`.
    pub fn matches_suffix(&self, folder: &NormalizedPath) -> bool {
        let key = self.as_str();
        !key.is_empty() && (key == folder.base_name() || folder.as_str().ends_with(key))
    }
}

impl From<&str> for FolderKey {
    fn from(raw: &str) -> Self {
        match CanonicalName::parse(raw) {
            Some(name) => Self::Canonical(name),
            None => Self::Path(NormalizedPath::new(raw)),
        }
    }
}

impl From<CanonicalName> for FolderKey {
    fn from(name: CanonicalName) -> Self {
        Self::Canonical(name)
    }
}

impl fmt::Display for FolderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FolderKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FolderKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}
