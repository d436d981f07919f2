//! File operation commands that keep the stored rules in step with disk

use colored::Colorize;

use crate::context::WorkspaceContext;
use crate::error::{CliError, Result};
use crate::interactive;

/// Run the rename command
pub fn run_rename(ctx: &WorkspaceContext, folder: &str, old: &str, new: &str) -> Result<()> {
    let folder = super::existing_folder(ctx, folder)?;
    let mut explorer = ctx.open_explorer()?;

    let renamed = explorer.rename_item(&folder, old, new)?;
    println!(
        "{} Renamed {} to {}.",
        "OK".green().bold(),
        old.cyan(),
        ctx.display(&renamed).cyan()
    );
    Ok(())
}

/// Run the delete command
pub fn run_delete(ctx: &WorkspaceContext, folder: &str, item: &str, yes: bool) -> Result<()> {
    let folder = super::existing_folder(ctx, folder)?;
    let target = folder.join(item);
    if !target.exists() {
        return Err(CliError::user(format!("Nothing named {} in {}", item, ctx.display(&folder))));
    }

    if !yes && !interactive::confirm(&format!("Delete {}?", ctx.display(&target)))? {
        println!("{} Nothing deleted.", "OK".green().bold());
        return Ok(());
    }

    ctx.open_explorer()?.delete_item(&folder, item)?;
    println!("{} Deleted {}.", "OK".green().bold(), ctx.display(&target).cyan());
    Ok(())
}

/// Run the new-file command
pub fn run_new_file(ctx: &WorkspaceContext, folder: &str, name: &str) -> Result<()> {
    let folder = super::existing_folder(ctx, folder)?;
    let created = ctx.open_explorer()?.create_file(&folder, name)?;
    println!("{} Created {}.", "OK".green().bold(), ctx.display(&created).cyan());
    Ok(())
}

/// Run the new-folder command
pub fn run_new_folder(ctx: &WorkspaceContext, folder: &str, name: &str) -> Result<()> {
    let folder = super::existing_folder(ctx, folder)?;
    let created = ctx.open_explorer()?.create_folder(&folder, name)?;
    println!("{} Created {}/.", "OK".green().bold(), ctx.display(&created).cyan());
    Ok(())
}

/// Run the copy command
pub fn run_copy(ctx: &WorkspaceContext, source: &str, dest_folder: &str) -> Result<()> {
    let source_path = ctx.folder(Some(source));
    if !source_path.exists() {
        return Err(CliError::user(format!("No such file or folder: {}", source)));
    }
    let dest = super::existing_folder(ctx, dest_folder)?;

    let copied = ctx.open_explorer()?.copy_item(&source_path, &dest)?;
    println!(
        "{} Copied {} to {}.",
        "OK".green().bold(),
        source.cyan(),
        ctx.display(&copied).cyan()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_context;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_copy_and_delete() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();
        let ctx = test_context(temp.path());

        run_new_file(&ctx, "docs", "notes.md").unwrap();
        run_new_folder(&ctx, "docs", "drafts").unwrap();
        run_copy(&ctx, "docs/notes.md", "docs").unwrap();
        assert!(temp.path().join("docs/notes copy.md").is_file());

        run_delete(&ctx, "docs", "drafts", true).unwrap();
        assert!(!temp.path().join("docs/drafts").exists());
    }

    #[test]
    fn test_rename_moves_rule_token() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/old.md"), "").unwrap();
        let ctx = test_context(temp.path());
        let docs = ctx.folder(Some("docs"));
        ctx.open_explorer()
            .unwrap()
            .store_mut()
            .set_order_for_folder(&docs, vec!["old.md".into()], explorer_core::RuleKind::Manual, None)
            .unwrap();

        run_rename(&ctx, "docs", "old.md", "new.md").unwrap();

        let explorer = ctx.open_explorer().unwrap();
        assert_eq!(explorer.store().order_for_folder(&docs), vec!["new.md"]);
    }

    #[test]
    fn test_delete_missing_entry_fails() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();
        let ctx = test_context(temp.path());

        assert!(run_delete(&ctx, "docs", "ghost.md", true).is_err());
    }
}
