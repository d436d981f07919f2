//! Explorer Order CLI
//!
//! Lists folders in their custom display order and edits the per-folder
//! rules stored in `.explorer-order/settings.json`.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use context::WorkspaceContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        println!("{} Explorer Order CLI", "order".green().bold());
        println!();
        println!("Run {} for available commands.", "order --help".cyan());
        return Ok(());
    };

    if let Commands::Completions { shell } = command {
        clap_complete::generate(shell, &mut Cli::command(), "order", &mut std::io::stdout());
        return Ok(());
    }

    let cwd = std::env::current_dir()?;
    let ctx = WorkspaceContext::resolve(&cwd, cli.workspace.as_deref(), cli.config_dir)?;
    execute_command(&ctx, command)
}

/// Log to stderr so stdout stays clean for `--json` output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(ctx: &WorkspaceContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::List { folder, json } => commands::run_list(ctx, folder.as_deref(), json),
        Commands::Set { folder, items, kind } => commands::run_set(ctx, &folder, items, kind),
        Commands::Reset { folder } => commands::run_reset(ctx, &folder),
        Commands::Restore { folder, item } => commands::run_restore(ctx, &folder, &item),
        Commands::MoveUp { folder, item } => {
            commands::run_move(ctx, &folder, &item, explorer_core::MoveDirection::Up)
        }
        Commands::MoveDown { folder, item } => {
            commands::run_move(ctx, &folder, &item, explorer_core::MoveDirection::Down)
        }
        Commands::Rename { folder, old, new } => commands::run_rename(ctx, &folder, &old, &new),
        Commands::Delete { folder, item, yes } => commands::run_delete(ctx, &folder, &item, yes),
        Commands::NewFile { folder, name } => commands::run_new_file(ctx, &folder, &name),
        Commands::NewFolder { folder, name } => commands::run_new_folder(ctx, &folder, &name),
        Commands::Copy {
            source,
            dest_folder,
        } => commands::run_copy(ctx, &source, &dest_folder),
        Commands::Templates => commands::run_templates(ctx),
        Commands::ApplyTemplate { name, yes } => {
            commands::run_apply_template(ctx, name.as_deref(), yes)
        }
        Commands::Rules { json } => commands::run_rules(ctx, json),
        Commands::Settings { key, value } => commands::run_settings(ctx, key.as_deref(), value),
        // Handled before the workspace is resolved.
        Commands::Completions { .. } => Ok(()),
    }
}
