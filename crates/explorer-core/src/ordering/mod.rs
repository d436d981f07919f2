//! Ordering engine and listing presentation policy
//!
//! A listing flows through three stages:
//!
//! 1. [`ListingFilter`] drops hidden entries and build outputs
//! 2. [`OrderingEngine`] places custom-ordered entries first, token by token
//! 3. the rest follow in [`folders_first_then_alpha`] order
//!
//! Every stage works on [`DirectoryEntry`] values, which are rebuilt on each
//! listing and never persisted.

pub mod compare;
mod engine;
mod filter;
mod matcher;

pub use compare::{folders_first_then_alpha, locale_compare};
pub use engine::{OrderingEngine, order_entries, sort_default};
pub use filter::{ALLOWED_HIDDEN, BUILD_OUTPUTS, ListingFilter};
pub use matcher::TokenMatcher;

use explorer_fs::{NormalizedPath, RawEntry};
use serde::Serialize;

/// One entry of an ordered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    pub name: String,
    pub is_directory: bool,
    pub parent_path: NormalizedPath,
    /// Index in the ordered listing
    pub position: usize,
    /// Whether a custom-order token placed this entry
    pub custom_ordered: bool,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, is_directory: bool, parent_path: NormalizedPath) -> Self {
        Self {
            name: name.into(),
            is_directory,
            parent_path,
            position: 0,
            custom_ordered: false,
        }
    }

    pub fn from_raw(raw: RawEntry, parent_path: &NormalizedPath) -> Self {
        Self::new(raw.name, raw.is_directory, parent_path.clone())
    }

    /// Full path of the entry.
    pub fn path(&self) -> NormalizedPath {
        self.parent_path.join(&self.name)
    }
}
