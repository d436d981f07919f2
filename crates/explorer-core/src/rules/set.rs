//! Insertion-ordered mapping from folder keys to rules

use super::key::FolderKey;
use super::rule::Rule;
use explorer_fs::NormalizedPath;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// All ordering rules, keyed by folder.
///
/// Iteration order is insertion order, which makes fallback key resolution
/// deterministic: the first suffix-matching key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: IndexMap<FolderKey, Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, key: &FolderKey) -> Option<&Rule> {
        self.rules.get(key)
    }

    pub fn get_mut(&mut self, key: &FolderKey) -> Option<&mut Rule> {
        self.rules.get_mut(key)
    }

    pub fn contains_key(&self, key: &FolderKey) -> bool {
        self.rules.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FolderKey, &Rule)> {
        self.rules.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &FolderKey> {
        self.rules.keys()
    }

    /// Insert or overwrite. An overwritten key keeps its original position.
    pub fn insert(&mut self, key: FolderKey, rule: Rule) -> Option<Rule> {
        self.rules.insert(key, rule)
    }

    /// Remove a key, preserving the relative order of the others.
    pub fn remove(&mut self, key: &FolderKey) -> Option<Rule> {
        self.rules.shift_remove(key)
    }

    /// Remove every key whose text equals `text`. Returns how many went.
    pub fn remove_text(&mut self, text: &str) -> usize {
        let before = self.rules.len();
        self.rules.retain(|key, _| key.as_str() != text);
        before - self.rules.len()
    }

    /// Resolve the key that governs `folder`.
    ///
    /// An exact match on the full path wins; otherwise the first key in
    /// insertion order that equals the base name or is a suffix of the path.
    pub fn resolve(&self, folder: &NormalizedPath) -> Option<&FolderKey> {
        self.rules
            .keys()
            .find(|key| key.as_str() == folder.as_str())
            .or_else(|| self.rules.keys().find(|key| key.matches_suffix(folder)))
    }

    /// Resolve and return the governing rule along with its key.
    pub fn resolve_rule(&self, folder: &NormalizedPath) -> Option<(&FolderKey, &Rule)> {
        let key = self.resolve(folder)?;
        self.rules.get_key_value(key)
    }

    /// Re-key full-path rules for `old` (and any folder below it) under
    /// `new`, keeping each rule's position.
    ///
    /// A re-keyed rule replaces any rule already stored under its new key.
    /// Returns how many rules moved.
    pub fn rename_paths(&mut self, old: &NormalizedPath, new: &NormalizedPath) -> usize {
        let rebased: Vec<(FolderKey, Rule, bool)> = self
            .rules
            .drain(..)
            .map(|(key, rule)| match &key {
                FolderKey::Path(path) if old.contains(path) => {
                    let rest = &path.as_str()[old.as_str().len()..];
                    let moved = NormalizedPath::new(format!("{}{}", new.as_str(), rest));
                    (FolderKey::Path(moved), rule, true)
                }
                _ => (key, rule, false),
            })
            .collect();

        let targets: HashSet<FolderKey> = rebased
            .iter()
            .filter(|(_, _, moved)| *moved)
            .map(|(key, _, _)| key.clone())
            .collect();

        for (key, rule, moved) in rebased {
            if !moved && targets.contains(&key) {
                continue;
            }
            self.rules.insert(key, rule);
        }

        targets.len()
    }

    /// Remove full-path rules for `folder` and every folder below it.
    /// Canonical keys are left alone.
    pub fn remove_paths_under(&mut self, folder: &NormalizedPath) -> usize {
        let before = self.rules.len();
        self.rules.retain(|key, _| match key {
            FolderKey::Path(path) => !folder.contains(path),
            FolderKey::Canonical(_) => true,
        });
        before - self.rules.len()
    }

    /// Merge `other` into this set; entries in `other` overwrite same keys.
    pub fn merge(&mut self, other: &RuleSet) {
        for (key, rule) in other.iter() {
            self.rules.insert(key.clone(), rule.clone());
        }
    }
}

impl FromIterator<(FolderKey, Rule)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (FolderKey, Rule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
