//! Rule store: the single source of truth for ordering rules
//!
//! The store is constructed explicitly and handed to whoever needs it; it
//! holds a snapshot of the settings blob, reloaded wholesale on
//! [`RuleStore::refresh`].

mod backend;
mod rule_store;

pub use backend::{FileBackend, MemoryBackend, SettingsBackend};
pub use rule_store::{Flag, RuleStore};
