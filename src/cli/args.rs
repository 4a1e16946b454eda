//! CLI argument definitions for `helium`

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use helium::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `pattern`, `output`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the quality report.
    ///
    /// Discovers source files, collects maintainability and complexity
    /// metrics, fills the report template and renders it to PDF.
    Report {
        /// Output PDF path (overrides the configured `output`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report template SVG path (overrides the configured `template`)
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,

        /// SVG-to-PDF converter command (overrides the configured `converter`)
        #[arg(long, value_name = "PROGRAM")]
        converter: Option<String>,

        /// Analyze complexity over all discovered files instead of only the
        /// least maintainable ones
        #[arg(long)]
        separate_metrics: bool,
    },
    /// Create a `.heliumrc` configuration file interactively.
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "helium",
    about = "Visual code quality reports from maintainability and complexity metrics",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to the configuration file (defaults to ./.heliumrc)
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert report-command flags into config overrides
    ///
    /// Returns `ConfigOverrides` with values from CLI flags, where `None`
    /// means no override. Non-report subcommands yield no overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        match &self.command {
            Command::Report {
                output,
                template,
                converter,
                separate_metrics,
            } => ConfigOverrides {
                output: output.as_ref().map(|p| p.to_string_lossy().to_string()),
                template: template.as_ref().map(|p| p.to_string_lossy().to_string()),
                converter: converter.clone(),
                separate_metrics: separate_metrics.then_some(true),
            },
            _ => ConfigOverrides::default(),
        }
    }
}
