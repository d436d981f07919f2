//! Filesystem abstraction for Explorer Order
//!
//! Provides normalized path handling, atomic settings I/O and the
//! [`FileSystem`] collaborator the ordering layer lists directories through.

pub mod config;
pub mod constants;
pub mod error;
pub mod fs;
pub mod io;
pub mod path;

pub use config::{ConfigFormat, ConfigStore};
pub use constants::ExplorerPath;
pub use error::{Error, Result};
pub use fs::{FileSystem, LocalFs, RawEntry};
pub use path::NormalizedPath;
