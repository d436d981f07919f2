//! Template listing and application

use colored::Colorize;
use explorer_core::Template;

use crate::context::WorkspaceContext;
use crate::error::{CliError, Result};
use crate::interactive;

/// Run the templates command
pub fn run_templates(ctx: &WorkspaceContext) -> Result<()> {
    let explorer = ctx.open_explorer()?;
    let templates = explorer.store().templates();

    println!("{}", "Available Templates".bold());
    println!();

    for template in &templates {
        println!("  {:<18} {}", template.name.green(), template.description);
        for (key, rule) in template.rules.iter() {
            println!(
                "    {:<14} {}",
                key.as_str().cyan(),
                rule.order.join(", ").dimmed()
            );
        }
    }

    println!();
    println!(
        "{} {} templates available. Use {} to apply one.",
        "Total:".dimmed(),
        templates.len(),
        "order apply-template <name>".cyan()
    );
    Ok(())
}

/// Run the apply-template command
pub fn run_apply_template(ctx: &WorkspaceContext, name: Option<&str>, yes: bool) -> Result<()> {
    let mut explorer = ctx.open_explorer()?;

    let template = match name {
        Some(name) => explorer.store().find_template(name).ok_or_else(|| {
            CliError::user(format!(
                "Unknown template '{}'. Run {} to see the available ones.",
                name,
                "order templates".cyan()
            ))
        })?,
        None => match interactive::select_template(&explorer.store().templates())? {
            Some(template) => template,
            None => {
                println!("{} No template applied.", "OK".green().bold());
                return Ok(());
            }
        },
    };

    let overwritten = overwritten_folders(&explorer, &template);
    if !overwritten.is_empty() {
        println!(
            "{} Replaces existing rules for: {}",
            "WARN".yellow().bold(),
            overwritten.join(", ")
        );
        if !yes && !interactive::confirm("Apply anyway?")? {
            println!("{} No template applied.", "OK".green().bold());
            return Ok(());
        }
    }

    println!("{} Applying template {}", "=>".blue().bold(), template.name.cyan());
    if explorer.store_mut().apply_template(&template)? {
        println!(
            "{} {} folder rules merged.",
            "OK".green().bold(),
            template.rules.len()
        );
    } else {
        println!("{} Template already applied.", "OK".green().bold());
    }
    Ok(())
}

/// Keys the template would replace with a different rule.
fn overwritten_folders(explorer: &explorer_core::Explorer, template: &Template) -> Vec<String> {
    let current = explorer.store().rules();
    template
        .rules
        .iter()
        .filter(|(key, rule)| {
            current
                .get(key)
                .is_some_and(|existing| existing.order != rule.order)
        })
        .map(|(key, _)| key.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_context;
    use explorer_core::RuleKind;
    use tempfile::TempDir;

    #[test]
    fn test_templates_runs() {
        let temp = TempDir::new().unwrap();
        let ctx = test_context(temp.path());

        assert!(run_templates(&ctx).is_ok());
    }

    #[test]
    fn test_apply_named_template() {
        let temp = TempDir::new().unwrap();
        let ctx = test_context(temp.path());

        run_apply_template(&ctx, Some("Vue Project"), true).unwrap();

        let explorer = ctx.open_explorer().unwrap();
        let components = ctx.folder(Some("src/components"));
        let rule = explorer.store().rule_for_folder(&components).unwrap();
        assert_eq!(
            rule.kind,
            RuleKind::Template {
                name: "Vue Project".into()
            }
        );
    }

    #[test]
    fn test_apply_unknown_template_fails() {
        let temp = TempDir::new().unwrap();
        let ctx = test_context(temp.path());

        let err = run_apply_template(&ctx, Some("Rails"), true).unwrap_err();
        assert!(err.to_string().contains("Unknown template"));
    }
}
