//! Settings blob and its on-disk locations
//!
//! All persisted state lives in one settings blob:
//!
//! ```json
//! {
//!   "enableAutoRefresh": true,
//!   "showCustomOrderIndicator": true,
//!   "defaultFoldersFirst": true,
//!   "rules": { "src": { "order": ["index.js", "App.jsx"], "type": "manual" } },
//!   "customTemplates": []
//! }
//! ```
//!
//! Two layers are read, later ones overriding earlier ones:
//!
//! 1. **Global** - `<config_dir>/explorer-order/settings.json`, read-only
//!    defaults for the flags plus extra custom templates
//! 2. **Workspace** - `<workspace>/.explorer-order/settings.json`, the
//!    writable blob that holds the rules
//!
//! # Example
//!
//! ```ignore
//! use explorer_core::config::SettingsResolver;
//! use explorer_core::RuleStore;
//! use explorer_fs::NormalizedPath;
//!
//! let resolver = SettingsResolver::new(NormalizedPath::new("/path/to/workspace"));
//! let store = RuleStore::open(&resolver)?;
//! println!("folders first: {}", store.default_folders_first());
//! ```

mod resolver;
mod settings;

pub use resolver::SettingsResolver;
pub use settings::Settings;
