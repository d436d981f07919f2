//! Custom order editing commands
//!
//! Each command loads the workspace settings, applies one change and saves
//! only when something actually changed.

use colored::Colorize;
use explorer_core::{FolderKey, MoveDirection, MoveOutcome, RuleKind};

use crate::cli::KindArg;
use crate::context::WorkspaceContext;
use crate::error::Result;

/// Run the set command
pub fn run_set(
    ctx: &WorkspaceContext,
    folder: &str,
    items: Vec<String>,
    kind: KindArg,
) -> Result<()> {
    let folder = ctx.folder(Some(folder));
    let key = FolderKey::for_folder(&folder);
    let kind = match kind {
        KindArg::Manual => RuleKind::Manual,
        KindArg::Pattern => RuleKind::Pattern,
    };

    println!("{} Setting order for {}", "=>".blue().bold(), ctx.display(&folder).cyan());
    if key.is_canonical() {
        println!(
            "   {} this order is shared by every folder named {}",
            "note:".dimmed(),
            key.as_str().cyan()
        );
    }

    let clearing = items.is_empty();
    let changed = ctx
        .open_explorer()?
        .store_mut()
        .set_order_for_folder(&folder, items, kind, None)?;

    match (changed, clearing) {
        (false, _) => println!("{} Order unchanged.", "OK".green().bold()),
        (true, true) => println!("{} Order removed.", "OK".green().bold()),
        (true, false) => println!("{} Order saved.", "OK".green().bold()),
    }
    Ok(())
}

/// Run the reset command
pub fn run_reset(ctx: &WorkspaceContext, folder: &str) -> Result<()> {
    let folder = ctx.folder(Some(folder));
    let mut explorer = ctx.open_explorer()?;

    if explorer.store_mut().reset_order_for_folder(&folder)? {
        println!(
            "{} Custom order for {} removed.",
            "OK".green().bold(),
            ctx.display(&folder).cyan()
        );
    } else {
        println!(
            "{} {} has no custom order.",
            "OK".green().bold(),
            ctx.display(&folder).cyan()
        );
    }
    Ok(())
}

/// Run the restore command
pub fn run_restore(ctx: &WorkspaceContext, folder: &str, item: &str) -> Result<()> {
    let folder = super::existing_folder(ctx, folder)?;
    let mut explorer = ctx.open_explorer()?;

    if explorer.restore_item(&folder, item)? {
        println!("{} {} restored to its default place.", "OK".green().bold(), item.cyan());
    } else {
        println!(
            "{} {} is not in the custom order of {}.",
            "WARN".yellow().bold(),
            item.cyan(),
            ctx.display(&folder)
        );
    }
    Ok(())
}

/// Run the move-up and move-down commands
pub fn run_move(
    ctx: &WorkspaceContext,
    folder: &str,
    item: &str,
    direction: MoveDirection,
) -> Result<()> {
    let folder = super::existing_folder(ctx, folder)?;
    let mut explorer = ctx.open_explorer()?;

    match explorer.move_item(&folder, item, direction)? {
        MoveOutcome::Moved { from, to } => println!(
            "{} Moved {} from position {} to {}.",
            "OK".green().bold(),
            item.cyan(),
            from + 1,
            to + 1
        ),
        MoveOutcome::AtBoundary => println!(
            "{} {} is already at the {}.",
            "OK".green().bold(),
            item.cyan(),
            match direction {
                MoveDirection::Up => "top",
                MoveDirection::Down => "bottom",
            }
        ),
        MoveOutcome::NotFound => println!(
            "{} {} is not listed in {}.",
            "WARN".yellow().bold(),
            item.cyan(),
            ctx.display(&folder)
        ),
    }
    Ok(())
}
