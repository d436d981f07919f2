//! The persisted settings blob

use crate::rules::RuleSet;
use crate::templates::Template;
use serde::{Deserialize, Serialize};

/// One layer of persisted settings.
///
/// Flags are optional so that an unset workspace flag falls through to the
/// global layer and then to the built-in default (`true`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_auto_refresh: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_custom_order_indicator: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_folders_first: Option<bool>,

    #[serde(default)]
    pub rules: RuleSet,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_templates: Vec<Template>,
}
