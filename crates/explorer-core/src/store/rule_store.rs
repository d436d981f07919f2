//! RuleStore implementation

use super::backend::SettingsBackend;
use crate::config::{Settings, SettingsResolver};
use crate::ordering::compare::compare_case_insensitive;
use crate::rules::{FolderKey, PatternRule, Rule, RuleKind, RuleSet};
use crate::templates::{Template, builtin_templates};
use crate::{Error, Result};
use explorer_fs::{FileSystem, NormalizedPath};
use std::cmp::Ordering;
use std::fmt;

/// Boolean settings exposed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    AutoRefresh,
    CustomOrderIndicator,
    FoldersFirst,
}

impl Flag {
    pub const ALL: [Flag; 3] = [Self::AutoRefresh, Self::CustomOrderIndicator, Self::FoldersFirst];

    /// Key of the flag in the settings blob.
    pub fn key(&self) -> &'static str {
        match self {
            Self::AutoRefresh => "enableAutoRefresh",
            Self::CustomOrderIndicator => "showCustomOrderIndicator",
            Self::FoldersFirst => "defaultFoldersFirst",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    fn get(&self, settings: &Settings) -> Option<bool> {
        match self {
            Self::AutoRefresh => settings.enable_auto_refresh,
            Self::CustomOrderIndicator => settings.show_custom_order_indicator,
            Self::FoldersFirst => settings.default_folders_first,
        }
    }

    fn set(&self, settings: &mut Settings, value: bool) {
        let slot = match self {
            Self::AutoRefresh => &mut settings.enable_auto_refresh,
            Self::CustomOrderIndicator => &mut settings.show_custom_order_indicator,
            Self::FoldersFirst => &mut settings.default_folders_first,
        };
        *slot = Some(value);
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Read/write access to the persisted rules and settings.
///
/// Every mutation clones the current snapshot, applies the change, writes
/// the whole blob through the backend and only then swaps the clone in. A
/// failed write leaves the snapshot untouched; a mutation that changes
/// nothing writes nothing.
pub struct RuleStore {
    backend: Box<dyn SettingsBackend>,
    global: Option<Box<dyn SettingsBackend>>,
    settings: Settings,
    global_settings: Settings,
}

impl RuleStore {
    /// Create a store over a single writable backend.
    pub fn load(backend: impl SettingsBackend + 'static) -> Result<Self> {
        Self::from_parts(Box::new(backend), None)
    }

    /// Create a store with a read-only global layer under the workspace one.
    pub fn with_global(
        backend: impl SettingsBackend + 'static,
        global: impl SettingsBackend + 'static,
    ) -> Result<Self> {
        Self::from_parts(Box::new(backend), Some(Box::new(global)))
    }

    /// Open the file-backed layers located by `resolver`.
    pub fn open(resolver: &SettingsResolver) -> Result<Self> {
        let workspace = resolver.workspace_backend();
        match resolver.global_backend() {
            Some(global) => Self::with_global(workspace, global),
            None => Self::load(workspace),
        }
    }

    fn from_parts(
        backend: Box<dyn SettingsBackend>,
        global: Option<Box<dyn SettingsBackend>>,
    ) -> Result<Self> {
        let settings = backend.load()?;
        let global_settings = match &global {
            Some(layer) => layer.load()?,
            None => Settings::default(),
        };
        tracing::debug!(
            location = %backend.location(),
            rules = settings.rules.len(),
            "Loaded rule store"
        );
        Ok(Self {
            backend,
            global,
            settings,
            global_settings,
        })
    }

    /// The writable backend.
    pub fn backend(&self) -> &dyn SettingsBackend {
        self.backend.as_ref()
    }

    /// The workspace settings snapshot.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Reload both layers, replacing the snapshot wholesale.
    pub fn refresh(&mut self) -> Result<()> {
        let settings = self.backend.load()?;
        let global_settings = match &self.global {
            Some(layer) => layer.load()?,
            None => Settings::default(),
        };
        self.settings = settings;
        self.global_settings = global_settings;
        tracing::debug!(rules = self.settings.rules.len(), "Refreshed rule store");
        Ok(())
    }

    // ---- reads ----

    /// Deep copy of the current rules.
    pub fn rules(&self) -> RuleSet {
        self.settings.rules.clone()
    }

    pub fn resolve_key(&self, folder: &NormalizedPath) -> Option<FolderKey> {
        self.settings.rules.resolve(folder).cloned()
    }

    pub fn rule_for_folder(&self, folder: &NormalizedPath) -> Option<&Rule> {
        self.settings.rules.resolve_rule(folder).map(|(_, rule)| rule)
    }

    /// Custom order that applies to `folder`; empty when none does.
    pub fn order_for_folder(&self, folder: &NormalizedPath) -> Vec<String> {
        self.rule_for_folder(folder)
            .map(Rule::effective_order)
            .unwrap_or_default()
    }

    pub fn has_custom_order(&self, folder: &NormalizedPath) -> bool {
        !self.order_for_folder(folder).is_empty()
    }

    // ---- rule mutations ----

    /// Store `order` for `folder`.
    ///
    /// A folder whose base name is canonical is stored under that short name
    /// and so applies to every folder with the same base name. An empty
    /// order without patterns removes the folder's rule instead.
    pub fn set_order_for_folder(
        &mut self,
        folder: &NormalizedPath,
        order: Vec<String>,
        kind: RuleKind,
        patterns: Option<Vec<PatternRule>>,
    ) -> Result<bool> {
        if order.is_empty() && patterns.is_none() {
            return self.reset_order_for_folder(folder);
        }

        let key = FolderKey::for_folder(folder);
        tracing::debug!(%folder, %key, tokens = order.len(), "Setting folder order");
        self.set_rule_at(key, Rule::new(order, kind, patterns))
    }

    /// Rewrite the order of the rule that governs `folder`.
    ///
    /// Unlike [`set_order_for_folder`](Self::set_order_for_folder) this keeps
    /// the key the folder currently resolves to, so a folder governed by a
    /// full-path rule stays governed by it even when its base name is
    /// canonical. Without any rule the folder's own key is used.
    pub fn update_order_for_folder(
        &mut self,
        folder: &NormalizedPath,
        order: Vec<String>,
        kind: RuleKind,
    ) -> Result<bool> {
        if order.is_empty() {
            return self.reset_order_for_folder(folder);
        }

        let key = self
            .resolve_key(folder)
            .unwrap_or_else(|| FolderKey::for_folder(folder));
        tracing::debug!(%folder, %key, tokens = order.len(), "Updating folder order");
        self.set_rule_at(key, Rule::new(order, kind, None))
    }

    /// Remove the rule stored under the folder's full path and under its
    /// base name. Returns whether anything was removed.
    pub fn reset_order_for_folder(&mut self, folder: &NormalizedPath) -> Result<bool> {
        let full = folder.as_str().to_string();
        let base = folder.base_name().to_string();
        tracing::debug!(%folder, "Resetting folder order");
        self.update(|s| {
            let mut removed = s.rules.remove_text(&full);
            if !base.is_empty() {
                removed += s.rules.remove_text(&base);
            }
            removed > 0
        })
    }

    /// Take `item` out of the folder's custom order and put it back where the
    /// default comparator places it among the remaining tokens.
    ///
    /// Directory-ness is read from `fs` at call time; names that cannot be
    /// inspected count as files. The result is stored as a manual rule.
    pub fn restore_item_to_default(
        &mut self,
        folder: &NormalizedPath,
        item: &str,
        fs: &dyn FileSystem,
    ) -> Result<bool> {
        let current = self.order_for_folder(folder);
        if !current.iter().any(|token| token == item) {
            return Ok(false);
        }

        let folders_first = self.default_folders_first();
        let is_dir = |name: &str| {
            let path = folder.join(name);
            match fs.is_directory(&path) {
                Ok(is_dir) => is_dir,
                Err(e) if e.is_not_found() => false,
                Err(e) => {
                    tracing::warn!(%path, error = %e, "Could not stat entry, treating as file");
                    false
                }
            }
        };

        let mut order: Vec<String> = current.into_iter().filter(|t| t != item).collect();
        let item_is_dir = is_dir(item);
        let at = order
            .iter()
            .position(|other| {
                compare_case_insensitive(
                    (item, item_is_dir),
                    (other.as_str(), is_dir(other.as_str())),
                    folders_first,
                )
                    == Ordering::Less
            })
            .unwrap_or(order.len());
        order.insert(at, item.to_string());

        self.update_order_for_folder(folder, order, RuleKind::Manual)
    }

    /// Replace exact tokens equal to `old` with `new` in the folder's rule.
    pub fn rename_item(&mut self, folder: &NormalizedPath, old: &str, new: &str) -> Result<bool> {
        let Some(key) = self.resolve_key(folder) else {
            return Ok(false);
        };
        self.update(|s| {
            let Some(rule) = s.rules.get_mut(&key) else {
                return false;
            };
            let mut changed = false;
            for token in rule.order.iter_mut().filter(|t| t.as_str() == old) {
                *token = new.to_string();
                changed = true;
            }
            changed
        })
    }

    /// Re-key full-path rules for a renamed folder and everything below it.
    pub fn rename_folder(&mut self, old: &NormalizedPath, new: &NormalizedPath) -> Result<usize> {
        let mut moved = 0;
        self.update(|s| {
            moved = s.rules.rename_paths(old, new);
            moved > 0
        })?;
        if moved > 0 {
            tracing::debug!(%old, %new, moved, "Re-keyed folder rules");
        }
        Ok(moved)
    }

    /// Forget the full-path rules of a deleted folder and its descendants.
    pub fn forget_folder(&mut self, folder: &NormalizedPath) -> Result<usize> {
        let mut removed = 0;
        self.update(|s| {
            removed = s.rules.remove_paths_under(folder);
            removed > 0
        })?;
        Ok(removed)
    }

    /// Drop exact tokens equal to `name`; a rule left without tokens goes too.
    pub fn remove_item(&mut self, folder: &NormalizedPath, name: &str) -> Result<bool> {
        let Some(key) = self.resolve_key(folder) else {
            return Ok(false);
        };
        self.update(|s| {
            let Some(rule) = s.rules.get_mut(&key) else {
                return false;
            };
            let before = rule.order.len();
            rule.order.retain(|t| t != name);
            if rule.order.len() == before {
                return false;
            }
            if rule.order.is_empty() && rule.patterns.is_none() {
                s.rules.remove(&key);
            }
            true
        })
    }

    // ---- templates ----

    /// Merge every rule of `template`, overwriting same keys and tagging each
    /// merged rule with the template's name.
    pub fn apply_template(&mut self, template: &Template) -> Result<bool> {
        tracing::debug!(template = %template.name, rules = template.rules.len(), "Applying template");
        self.update(|s| {
            let mut changed = false;
            for (key, rule) in template.rules.iter() {
                let tagged = Rule::new(
                    rule.order.clone(),
                    RuleKind::Template {
                        name: template.name.clone(),
                    },
                    rule.patterns.clone(),
                );
                if s.rules.get(key) != Some(&tagged) {
                    s.rules.insert(key.clone(), tagged);
                    changed = true;
                }
            }
            changed
        })
    }

    /// Look up a template by name and apply it.
    pub fn apply_template_named(&mut self, name: &str) -> Result<Template> {
        let template = self
            .find_template(name)
            .ok_or_else(|| Error::TemplateNotFound {
                name: name.to_string(),
            })?;
        self.apply_template(&template)?;
        Ok(template)
    }

    /// Built-in catalog, then global custom templates, then workspace ones.
    pub fn templates(&self) -> Vec<Template> {
        let mut templates = builtin_templates();
        templates.extend(self.global_settings.custom_templates.iter().cloned());
        templates.extend(self.settings.custom_templates.iter().cloned());
        templates
    }

    pub fn find_template(&self, name: &str) -> Option<Template> {
        self.templates().into_iter().find(|t| t.name == name)
    }

    /// Save a custom template in the workspace blob, replacing any with the
    /// same name.
    pub fn add_custom_template(&mut self, template: Template) -> Result<bool> {
        self.update(|s| {
            match s.custom_templates.iter_mut().find(|t| t.name == template.name) {
                Some(existing) if *existing == template => false,
                Some(existing) => {
                    *existing = template;
                    true
                }
                None => {
                    s.custom_templates.push(template);
                    true
                }
            }
        })
    }

    // ---- settings ----

    /// Workspace value, else global value, else `true`.
    pub fn flag(&self, flag: Flag) -> bool {
        flag.get(&self.settings)
            .or_else(|| flag.get(&self.global_settings))
            .unwrap_or(true)
    }

    pub fn set_flag(&mut self, flag: Flag, value: bool) -> Result<bool> {
        self.update(|s| {
            if flag.get(s) == Some(value) {
                return false;
            }
            flag.set(s, value);
            true
        })
    }

    pub fn auto_refresh_enabled(&self) -> bool {
        self.flag(Flag::AutoRefresh)
    }

    pub fn show_custom_order_indicator(&self) -> bool {
        self.flag(Flag::CustomOrderIndicator)
    }

    pub fn default_folders_first(&self) -> bool {
        self.flag(Flag::FoldersFirst)
    }

    fn set_rule_at(&mut self, key: FolderKey, rule: Rule) -> Result<bool> {
        self.update(|s| {
            if s.rules.get(&key) == Some(&rule) {
                return false;
            }
            s.rules.insert(key, rule);
            true
        })
    }

    fn update<F>(&mut self, mutate: F) -> Result<bool>
    where
        F: FnOnce(&mut Settings) -> bool,
    {
        let mut next = self.settings.clone();
        if !mutate(&mut next) {
            return Ok(false);
        }
        self.backend.save(&next)?;
        self.settings = next;
        Ok(true)
    }
}

impl fmt::Debug for RuleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleStore")
            .field("location", &self.backend.location())
            .field("rules", &self.settings.rules.len())
            .field("has_global", &self.global.is_some())
            .finish()
    }
}
