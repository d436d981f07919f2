//! Rule store and ordering engine for Explorer Order
//!
//! This crate decides the display order of directory listings:
//!
//! - **Rules**: per-folder token lists keyed by full path or canonical name
//! - **Rule store**: the persisted settings blob and every rule mutation
//! - **Ordering engine**: applies a folder's rule to a raw listing
//! - **Templates**: built-in and custom rule bundles merged in bulk
//! - **Explorer**: filesystem operations that keep rules in step with disk
//!
//! # Architecture
//!
//! ```text
//!        order (CLI)
//!             |
//!       explorer-core
//!   Explorer -> OrderingEngine
//!       |            |
//!       +-> RuleStore -> SettingsBackend
//!             |
//!        explorer-fs
//! ```
//!
//! # Example
//!
//! ```ignore
//! use explorer_core::{Explorer, MoveDirection};
//! use explorer_fs::NormalizedPath;
//!
//! let root = NormalizedPath::new("/path/to/workspace");
//! let mut explorer = Explorer::open(root.clone())?;
//! let src = root.join("src");
//!
//! explorer.move_item(&src, "App.jsx", MoveDirection::Up)?;
//! for entry in explorer.list(&src) {
//!     println!("{} {}", entry.position, entry.name);
//! }
//! ```

pub mod config;
pub mod error;
pub mod explorer;
pub mod ordering;
pub mod rules;
pub mod store;
pub mod templates;

pub use config::{Settings, SettingsResolver};
pub use error::{Error, Result};
pub use explorer::{Explorer, MoveDirection, MoveOutcome};
pub use ordering::{DirectoryEntry, ListingFilter, OrderingEngine, order_entries};
pub use rules::{CanonicalName, FolderKey, PatternRule, Rule, RuleKind, RuleSet};
pub use store::{FileBackend, Flag, MemoryBackend, RuleStore, SettingsBackend};
pub use templates::{CATALOG_VERSION, Template, builtin_templates};
