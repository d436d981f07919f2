//! Persistence seam for the settings blob

use crate::config::Settings;
use crate::{Error, Result};
use explorer_fs::{ConfigStore, NormalizedPath};
use std::cell::{Cell, RefCell};

/// Where a settings layer is read from and written to.
///
/// [`RuleStore`](super::RuleStore) never touches the disk directly; every
/// load and every wholesale write goes through this trait.
pub trait SettingsBackend {
    /// Load the current blob. A missing blob loads as `Settings::default()`.
    fn load(&self) -> Result<Settings>;

    /// Replace the persisted blob. Failures surface as [`Error::ConfigWrite`].
    fn save(&self, settings: &Settings) -> Result<()>;

    /// Human-readable location for messages and logs.
    fn location(&self) -> String;
}

/// Settings stored in a file; format follows the extension.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: NormalizedPath,
    store: ConfigStore,
}

impl FileBackend {
    pub fn new(path: NormalizedPath) -> Self {
        Self {
            path,
            store: ConfigStore::new(),
        }
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }
}

impl SettingsBackend for FileBackend {
    fn load(&self) -> Result<Settings> {
        tracing::debug!(path = %self.path, "Loading settings");
        Ok(self.store.load_or_default(&self.path)?)
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        tracing::debug!(path = %self.path, rules = settings.rules.len(), "Writing settings");
        self.store
            .save(&self.path, settings)
            .map_err(|e| Error::ConfigWrite {
                location: self.location(),
                reason: e.to_string(),
            })
    }

    fn location(&self) -> String {
        self.path.to_string()
    }
}

/// In-process settings, for hosts without a writable workspace and for tests.
///
/// A read-only backend rejects every save, which models a workspace whose
/// configuration cannot be written.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    settings: RefCell<Settings>,
    read_only: Cell<bool>,
    saves: Cell<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: RefCell::new(settings),
            ..Self::default()
        }
    }

    /// Make every subsequent save fail.
    pub fn read_only(self) -> Self {
        self.read_only.set(true);
        self
    }

    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl SettingsBackend for MemoryBackend {
    fn load(&self) -> Result<Settings> {
        Ok(self.settings.borrow().clone())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if self.read_only.get() {
            return Err(Error::ConfigWrite {
                location: self.location(),
                reason: "settings are read-only".to_string(),
            });
        }
        *self.settings.borrow_mut() = settings.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
