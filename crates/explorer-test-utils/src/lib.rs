//! Shared test utilities for the Explorer Order workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each grow their own temp-directory helpers. It is a dev-dependency only
//! and never published.
//!
//! # Modules
//!
//! - [`workspace`] — [`TestWorkspace`](workspace::TestWorkspace) builder for
//!   on-disk workspaces
//! - [`layouts`] — ready-made project trees

pub mod layouts;
pub mod workspace;

pub use workspace::TestWorkspace;
