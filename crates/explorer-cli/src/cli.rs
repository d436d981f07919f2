//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Explorer Order - Custom display order for directory listings
#[derive(Parser, Debug)]
#[command(name = "order")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace root (defaults to the nearest folder holding
    /// .explorer-order/, else the current directory)
    #[arg(short, long, global = true, env = "EXPLORER_ORDER_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Directory holding the global settings.json
    #[arg(long, global = true, env = "EXPLORER_ORDER_CONFIG_DIR", hide = true)]
    pub config_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// How a `set` order should be interpreted
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindArg {
    /// Tokens are applied in order
    #[default]
    Manual,
    /// Ordered by patterns (reserved; currently falls back to the default sort)
    Pattern,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List a folder in display order
    ///
    /// Examples:
    ///   order list            # Workspace root
    ///   order list src        # A folder relative to the workspace
    ///   order list src --json # Machine-readable entries
    List {
        /// Folder to list (relative to the workspace, or absolute)
        folder: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Set the custom order of a folder
    ///
    /// Tokens are entry names or `*` wildcards. Setting no tokens removes
    /// the folder's rule. Folders named src, components, pages, hooks, utils,
    /// assets, views, router or store share one rule project-wide.
    ///
    /// Examples:
    ///   order set src index.js App.jsx '*.css'
    Set {
        /// Folder to order
        folder: String,

        /// Tokens in display order
        items: Vec<String>,

        /// Rule kind
        #[arg(long, value_enum, default_value_t = KindArg::Manual)]
        kind: KindArg,
    },

    /// Remove the custom order of a folder
    Reset {
        /// Folder to reset
        folder: String,
    },

    /// Move one item back to its default place in the custom order
    Restore {
        /// Folder holding the item
        folder: String,

        /// Item name
        item: String,
    },

    /// Move an item one place up
    MoveUp {
        /// Folder holding the item
        folder: String,

        /// Item name
        item: String,
    },

    /// Move an item one place down
    MoveDown {
        /// Folder holding the item
        folder: String,

        /// Item name
        item: String,
    },

    /// Rename an entry and update the rules that mention it
    Rename {
        /// Folder holding the entry
        folder: String,

        /// Current name
        old: String,

        /// New name
        new: String,
    },

    /// Delete an entry and drop it from the rules
    Delete {
        /// Folder holding the entry
        folder: String,

        /// Entry name
        item: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Create an empty file
    NewFile {
        /// Folder to create it in
        folder: String,

        /// File name
        name: String,
    },

    /// Create a folder
    NewFolder {
        /// Folder to create it in
        folder: String,

        /// Folder name
        name: String,
    },

    /// Copy an entry into a folder, picking a free "copy" name if needed
    Copy {
        /// Entry to copy
        source: String,

        /// Destination folder
        dest_folder: String,
    },

    /// List available templates
    Templates,

    /// Merge a template's rules into the workspace
    ///
    /// Without a name, pick one interactively.
    ApplyTemplate {
        /// Template name (e.g. "React Project")
        name: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show stored rules
    Rules {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show or change settings
    ///
    /// Examples:
    ///   order settings                            # Show all
    ///   order settings defaultFoldersFirst        # Show one
    ///   order settings defaultFoldersFirst false  # Change one
    Settings {
        /// Setting key
        key: Option<String>,

        /// New value
        #[arg(action = clap::ArgAction::Set)]
        value: Option<bool>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
