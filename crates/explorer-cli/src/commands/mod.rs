//! Command implementations for explorer-cli

pub mod files;
pub mod list;
pub mod order;
pub mod settings;
pub mod templates;

pub use files::{run_copy, run_delete, run_new_file, run_new_folder, run_rename};
pub use list::{run_list, run_rules};
pub use order::{run_move, run_reset, run_restore, run_set};
pub use settings::run_settings;
pub use templates::{run_apply_template, run_templates};

use explorer_fs::NormalizedPath;

use crate::context::WorkspaceContext;
use crate::error::{CliError, Result};

/// Resolve a folder argument that must name an existing directory.
pub(crate) fn existing_folder(ctx: &WorkspaceContext, arg: &str) -> Result<NormalizedPath> {
    let folder = ctx.folder(Some(arg));
    if !folder.is_dir() {
        return Err(CliError::user(format!("Not a directory: {}", arg)));
    }
    Ok(folder)
}

#[cfg(test)]
pub(crate) fn test_context(root: &std::path::Path) -> WorkspaceContext {
    WorkspaceContext::resolve(root, Some(root), Some(root.join(".global")))
        .expect("workspace should resolve")
}
