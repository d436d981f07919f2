//! Listing commands for folders and stored rules

use colored::Colorize;
use explorer_core::RuleKind;

use crate::context::WorkspaceContext;
use crate::error::Result;

/// Run the list command
pub fn run_list(ctx: &WorkspaceContext, folder: Option<&str>, json: bool) -> Result<()> {
    let folder = match folder {
        Some(arg) => super::existing_folder(ctx, arg)?,
        None => ctx.root().clone(),
    };
    let explorer = ctx.open_explorer()?;
    let entries = explorer.list(&folder);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let show_marker = explorer.store().show_custom_order_indicator();
    println!("{}", ctx.display(&folder).bold());
    if entries.is_empty() {
        println!("  {}", "(empty)".dimmed());
        return Ok(());
    }

    for entry in &entries {
        let marker = if show_marker && entry.custom_ordered {
            "*".yellow().bold().to_string()
        } else {
            " ".to_string()
        };
        if entry.is_directory {
            println!("{} {}/", marker, entry.name.blue().bold());
        } else {
            println!("{} {}", marker, entry.name);
        }
    }

    Ok(())
}

/// Run the rules command
pub fn run_rules(ctx: &WorkspaceContext, json: bool) -> Result<()> {
    let explorer = ctx.open_explorer()?;
    let rules = explorer.store().rules();

    if json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    println!("{}", "Folder Rules".bold());
    println!();

    if rules.is_empty() {
        println!("  {} (use {} to add)", "None".dimmed(), "order set".cyan());
        return Ok(());
    }

    for (key, rule) in rules.iter() {
        let label = if key.is_canonical() {
            format!("{} {}", key.as_str().green(), "(any folder)".dimmed())
        } else {
            key.as_str().green().to_string()
        };
        let source = match &rule.kind {
            RuleKind::Template { name } => format!("template: {}", name),
            kind => kind.tag().to_string(),
        };
        println!("  {} [{}]", label, source.dimmed());
        println!("    {}", rule.effective_order().join(", "));
    }

    println!();
    println!("{} {} rules stored.", "Total:".dimmed(), rules.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_context;
    use tempfile::TempDir;

    #[test]
    fn test_list_runs_on_empty_workspace() {
        let temp = TempDir::new().unwrap();
        let ctx = test_context(temp.path());

        assert!(run_list(&ctx, None, false).is_ok());
        assert!(run_list(&ctx, None, true).is_ok());
    }

    #[test]
    fn test_list_rejects_missing_folder() {
        let temp = TempDir::new().unwrap();
        let ctx = test_context(temp.path());

        let err = run_list(&ctx, Some("missing"), false).unwrap_err();
        assert!(err.to_string().contains("Not a directory"));
    }

    #[test]
    fn test_rules_runs_without_settings() {
        let temp = TempDir::new().unwrap();
        let ctx = test_context(temp.path());

        assert!(run_rules(&ctx, false).is_ok());
        assert!(!temp.path().join(".explorer-order").exists());
    }
}
