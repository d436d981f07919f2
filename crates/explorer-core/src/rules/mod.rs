//! Ordering rules and the keyed rule set
//!
//! A rule is stored either under a full folder path or under one of a fixed
//! set of canonical folder names. Canonical keys apply to every folder with
//! that base name unless a full-path rule for the folder exists.

mod key;
mod rule;
mod set;

pub use key::{CanonicalName, FolderKey};
pub use rule::{PatternRule, Rule, RuleKind};
pub use set::RuleSet;
