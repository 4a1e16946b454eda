//! Shared library for `helium`
//! Contains the configuration layer and the report generation core used by the CLI

pub mod config;
pub mod core;
