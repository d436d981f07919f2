//! Error types for explorer-core

/// Result type for explorer-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in explorer-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The persistence layer rejected a settings update
    #[error("Failed to write settings to {location}: {reason}")]
    ConfigWrite { location: String, reason: String },

    /// No built-in or custom template carries this name
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// A folder operation was given a path without a usable name
    #[error("Invalid folder path: {path}")]
    InvalidFolder { path: String },

    /// An entry name that is empty or contains a path separator
    #[error("Invalid entry name: {name:?}")]
    InvalidName { name: String },

    /// Filesystem error from explorer-fs
    #[error(transparent)]
    Fs(#[from] explorer_fs::Error),
}
