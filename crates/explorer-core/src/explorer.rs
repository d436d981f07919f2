//! Host-facing facade over the filesystem, the rule store and the engine

use crate::config::SettingsResolver;
use crate::ordering::{DirectoryEntry, ListingFilter, OrderingEngine, sort_default};
use crate::rules::RuleKind;
use crate::store::RuleStore;
use crate::{Error, Result};
use explorer_fs::{FileSystem, LocalFs, NormalizedPath};

/// Direction of a single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// What a move request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The item is not in the current listing; nothing changed
    NotFound,
    /// The item is already first (up) or last (down); nothing changed
    AtBoundary,
    /// The item swapped places with its neighbour and the listing was saved
    /// as the folder's manual order
    Moved { from: usize, to: usize },
}

/// A workspace view: ordered listings plus the file operations that keep
/// rules in step with the disk.
pub struct Explorer<F: FileSystem = LocalFs> {
    root: NormalizedPath,
    fs: F,
    store: RuleStore,
    filter: Option<ListingFilter>,
}

impl Explorer<LocalFs> {
    /// Open the workspace at `root` on the local disk.
    pub fn open(root: NormalizedPath) -> Result<Self> {
        Self::open_with(&SettingsResolver::new(root))
    }

    /// Open the workspace described by `resolver` on the local disk.
    pub fn open_with(resolver: &SettingsResolver) -> Result<Self> {
        let store = RuleStore::open(resolver)?;
        Ok(Self::new(resolver.root().clone(), LocalFs::new(), store))
    }
}

impl<F: FileSystem> Explorer<F> {
    pub fn new(root: NormalizedPath, fs: F, store: RuleStore) -> Self {
        Self {
            root,
            fs,
            store,
            filter: Some(ListingFilter::default()),
        }
    }

    /// Replace the listing filter.
    pub fn with_filter(mut self, filter: ListingFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Show every entry, hidden files and build outputs included.
    pub fn without_filter(mut self) -> Self {
        self.filter = None;
        self
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RuleStore {
        &mut self.store
    }

    pub fn engine(&self) -> OrderingEngine<'_> {
        OrderingEngine::new(&self.store)
    }

    /// Reload settings from disk.
    pub fn refresh(&mut self) -> Result<()> {
        self.store.refresh()
    }

    /// Ordered listing of `folder`.
    ///
    /// A folder that cannot be read lists as empty.
    pub fn list(&self, folder: &NormalizedPath) -> Vec<DirectoryEntry> {
        let raw = match self.fs.list_directory(folder) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(%folder, error = %e, "Could not read directory");
                return Vec::new();
            }
        };

        let mut entries: Vec<DirectoryEntry> = raw
            .into_iter()
            .map(|entry| DirectoryEntry::from_raw(entry, folder))
            .collect();
        // Raw listings come back in disk order; settle it so wildcards
        // consume the same entries every time.
        sort_default(&mut entries, self.store.default_folders_first());

        if let Some(filter) = &self.filter {
            let custom = self.store.order_for_folder(folder);
            entries = filter.retain(entries, *folder == self.root, &custom);
        }

        self.engine().compute_order(entries, folder)
    }

    /// Swap `item` with its neighbour and save the whole listing as the
    /// folder's manual order.
    pub fn move_item(
        &mut self,
        folder: &NormalizedPath,
        item: &str,
        direction: MoveDirection,
    ) -> Result<MoveOutcome> {
        let entries = self.list(folder);
        let Some(from) = entries.iter().position(|e| e.name == item) else {
            tracing::debug!(%folder, item, "Move target not in listing");
            return Ok(MoveOutcome::NotFound);
        };

        let to = match direction {
            MoveDirection::Up => from.checked_sub(1),
            MoveDirection::Down => Some(from + 1).filter(|&i| i < entries.len()),
        };
        let Some(to) = to else {
            return Ok(MoveOutcome::AtBoundary);
        };

        let mut order: Vec<String> = entries.into_iter().map(|e| e.name).collect();
        order.swap(from, to);
        self.store
            .update_order_for_folder(folder, order, RuleKind::Manual)?;
        Ok(MoveOutcome::Moved { from, to })
    }

    /// Put `item` back at its default place within the folder's custom order.
    pub fn restore_item(&mut self, folder: &NormalizedPath, item: &str) -> Result<bool> {
        self.store.restore_item_to_default(folder, item, &self.fs)
    }

    /// Rename an entry on disk and carry its rules along.
    pub fn rename_item(
        &mut self,
        folder: &NormalizedPath,
        old: &str,
        new: &str,
    ) -> Result<NormalizedPath> {
        validate_name(old)?;
        validate_name(new)?;
        let from = folder.join(old);
        let to = folder.join(new);

        let is_dir = self.fs.is_directory(&from)?;
        self.fs.rename(&from, &to)?;
        tracing::debug!(%from, %to, "Renamed entry");

        self.store.rename_item(folder, old, new)?;
        if is_dir {
            self.store.rename_folder(&from, &to)?;
        }
        Ok(to)
    }

    /// Delete an entry on disk and drop it from the rules.
    ///
    /// Deleting a directory also forgets the full-path rules stored for it
    /// and for the folders below it.
    pub fn delete_item(&mut self, folder: &NormalizedPath, name: &str) -> Result<()> {
        validate_name(name)?;
        let path = folder.join(name);

        let is_dir = self.fs.is_directory(&path)?;
        self.fs.remove(&path)?;
        tracing::debug!(%path, "Deleted entry");

        self.store.remove_item(folder, name)?;
        if is_dir {
            self.store.forget_folder(&path)?;
        }
        Ok(())
    }

    pub fn create_file(&mut self, folder: &NormalizedPath, name: &str) -> Result<NormalizedPath> {
        validate_name(name)?;
        let path = folder.join(name);
        self.fs.create_file(&path)?;
        Ok(path)
    }

    pub fn create_folder(&mut self, folder: &NormalizedPath, name: &str) -> Result<NormalizedPath> {
        validate_name(name)?;
        let path = folder.join(name);
        self.fs.create_dir(&path)?;
        Ok(path)
    }

    /// Copy `source` into `dest_folder`.
    ///
    /// When the name is taken the copy is called `name copy`, then
    /// `name copy 2` and so on, keeping a file's extension at the end.
    pub fn copy_item(
        &mut self,
        source: &NormalizedPath,
        dest_folder: &NormalizedPath,
    ) -> Result<NormalizedPath> {
        let name = source.file_name().ok_or_else(|| Error::InvalidFolder {
            path: source.to_string(),
        })?;
        let is_dir = self.fs.is_directory(source)?;

        let mut target = dest_folder.join(name);
        let mut attempt = 1;
        while self.occupied(&target) {
            target = dest_folder.join(&copy_name(name, is_dir, attempt));
            attempt += 1;
        }

        self.fs.copy(source, &target)?;
        tracing::debug!(%source, %target, "Copied entry");
        Ok(target)
    }

    fn occupied(&self, path: &NormalizedPath) -> bool {
        self.fs.is_directory(path).is_ok()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(Error::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// `report.txt` -> `report copy.txt`, `report copy 2.txt`, ...
fn copy_name(name: &str, is_dir: bool, attempt: usize) -> String {
    let suffix = if attempt == 1 {
        " copy".to_string()
    } else {
        format!(" copy {attempt}")
    };

    match name.rfind('.') {
        Some(dot) if !is_dir && dot > 0 => format!("{}{}{}", &name[..dot], suffix, &name[dot..]),
        _ => format!("{name}{suffix}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("report.txt", false, 1, "report copy.txt")]
    #[case("report.txt", false, 2, "report copy 2.txt")]
    #[case("archive.tar.gz", false, 1, "archive.tar copy.gz")]
    #[case(".env", false, 1, ".env copy")]
    #[case("lib.d", true, 3, "lib.d copy 3")]
    fn copy_names(
        #[case] name: &str,
        #[case] is_dir: bool,
        #[case] attempt: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(copy_name(name, is_dir, attempt), expected);
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("..")]
    #[case("a/b")]
    #[case("a\\b")]
    fn rejects_bad_names(#[case] name: &str) {
        assert!(matches!(validate_name(name), Err(Error::InvalidName { .. })));
    }

    #[test]
    fn accepts_dotfiles() {
        assert!(validate_name(".gitignore").is_ok());
    }
}
