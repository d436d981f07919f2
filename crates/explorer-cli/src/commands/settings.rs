//! Show and change the boolean settings

use colored::Colorize;
use explorer_core::Flag;

use crate::context::WorkspaceContext;
use crate::error::{CliError, Result};

/// Run the settings command
pub fn run_settings(ctx: &WorkspaceContext, key: Option<&str>, value: Option<bool>) -> Result<()> {
    let mut explorer = ctx.open_explorer()?;

    let Some(key) = key else {
        println!("{}", "Settings".bold());
        println!();
        for flag in Flag::ALL {
            println!("  {:<26} {}", flag.key().green(), explorer.store().flag(flag));
        }
        let templates = &explorer.store().settings().custom_templates;
        println!("  {:<26} {}", "customTemplates".green(), templates.len());
        return Ok(());
    };

    let flag = Flag::parse(key).ok_or_else(|| {
        let known: Vec<&str> = Flag::ALL.iter().map(Flag::key).collect();
        CliError::user(format!("Unknown setting '{}'. Known settings: {}", key, known.join(", ")))
    })?;

    match value {
        None => println!("{}", explorer.store().flag(flag)),
        Some(value) => {
            if explorer.store_mut().set_flag(flag, value)? {
                println!("{} {} set to {}.", "OK".green().bold(), flag.key().cyan(), value);
            } else {
                println!("{} {} is already {}.", "OK".green().bold(), flag.key().cyan(), value);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_context;
    use tempfile::TempDir;

    #[test]
    fn test_settings_show_all() {
        let temp = TempDir::new().unwrap();
        let ctx = test_context(temp.path());

        assert!(run_settings(&ctx, None, None).is_ok());
    }

    #[test]
    fn test_settings_change_persists() {
        let temp = TempDir::new().unwrap();
        let ctx = test_context(temp.path());

        run_settings(&ctx, Some("defaultFoldersFirst"), Some(false)).unwrap();

        let explorer = ctx.open_explorer().unwrap();
        assert!(!explorer.store().default_folders_first());
    }

    #[test]
    fn test_settings_unknown_key() {
        let temp = TempDir::new().unwrap();
        let ctx = test_context(temp.path());

        let err = run_settings(&ctx, Some("sortMode"), None).unwrap_err();
        assert!(err.to_string().contains("Known settings"));
    }
}
