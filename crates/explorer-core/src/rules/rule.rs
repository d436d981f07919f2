//! Rule type: an ordered token list plus how it was produced

use serde::{Deserialize, Serialize};

/// How a rule came to exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RuleKind {
    /// Set explicitly by the user
    #[default]
    Manual,
    /// Ordered by `patterns` instead of `order`
    Pattern,
    /// Merged in from a template
    Template { name: String },
}

impl RuleKind {
    /// Tag written to the `type` field of the persisted rule.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Pattern => "pattern",
            Self::Template { .. } => "template",
        }
    }
}

/// One priority-ranked glob used by pattern rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    pub pattern: String,
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An ordering rule for one folder key.
///
/// `order` holds exact entry names or `*` wildcards; its sequence is the
/// intended display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RuleRepr", into = "RuleRepr")]
pub struct Rule {
    pub order: Vec<String>,
    pub kind: RuleKind,
    pub patterns: Option<Vec<PatternRule>>,
}

impl Rule {
    pub fn new(order: Vec<String>, kind: RuleKind, patterns: Option<Vec<PatternRule>>) -> Self {
        Self {
            order,
            kind,
            patterns,
        }
    }

    pub fn manual(order: Vec<String>) -> Self {
        Self::new(order, RuleKind::Manual, None)
    }

    /// Name of the template this rule was merged from, if any.
    pub fn template_name(&self) -> Option<&str> {
        match &self.kind {
            RuleKind::Template { name } => Some(name),
            _ => None,
        }
    }

    /// Tokens the ordering engine should apply for this rule.
    pub fn effective_order(&self) -> Vec<String> {
        match self.kind {
            RuleKind::Pattern => self.expand_patterns(),
            _ => self.order.clone(),
        }
    }

    /// Expansion of `patterns` into an order.
    ///
    /// How priorities should interact with each other and with the
    /// folders-first policy has not been decided, so pattern rules currently
    /// contribute no custom order and their folder falls back to the default
    /// sort.
    pub fn expand_patterns(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Flat on-disk shape: `{ "order": [...], "type": "...", "templateName": "..." }`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuleRepr {
    #[serde(default)]
    order: Vec<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    template_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    patterns: Option<Vec<PatternRule>>,
}

impl From<RuleRepr> for Rule {
    fn from(repr: RuleRepr) -> Self {
        let kind = match repr.kind.as_deref() {
            Some("pattern") => RuleKind::Pattern,
            Some("template") => RuleKind::Template {
                name: repr.template_name.unwrap_or_default(),
            },
            _ => RuleKind::Manual,
        };
        Self {
            order: repr.order,
            kind,
            patterns: repr.patterns,
        }
    }
}

impl From<Rule> for RuleRepr {
    fn from(rule: Rule) -> Self {
        let kind = Some(rule.kind.tag().to_string());
        let template_name = match rule.kind {
            RuleKind::Template { name } => Some(name),
            _ => None,
        };
        Self {
            order: rule.order,
            kind,
            template_name,
            patterns: rule.patterns,
        }
    }
}
