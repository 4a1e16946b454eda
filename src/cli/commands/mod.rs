//! CLI command handlers for `helium`.
//!
//! This module provides handlers for the CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod init;
pub mod report;
