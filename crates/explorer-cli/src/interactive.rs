//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based confirmation and selection.

use dialoguer::{Confirm, Select};
use explorer_core::Template;

use crate::error::Result;

/// Ask a yes/no question, defaulting to no.
pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}

/// Let the user pick one of `templates`. Returns `None` when there is
/// nothing to pick or the prompt is dismissed.
pub fn select_template(templates: &[Template]) -> Result<Option<Template>> {
    if templates.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = templates
        .iter()
        .map(|t| format!("{} - {}", t.name, t.description))
        .collect();
    let choice = Select::new()
        .with_prompt("Template")
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(choice.map(|i| templates[i].clone()))
}
