//! Configuration module for `helium`
//!
//! Project configuration lives in a `.heliumrc` TOML file next to the code
//! being analyzed. It drives file discovery, the two analyzer invocations,
//! template/output locations and logging. The core never mutates
//! configuration mid-run; the CLI loads it once at startup and hands an
//! immutable copy to the assembly driver.

use crate::core::error::{HeliumError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the configuration file, relative to the project.
pub const CONFIG_LOCATION: &str = "./.heliumrc";

/// Compiled-in default configuration.
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultHeliumrc.toml");

fn default_name() -> String {
    "Unnamed project".to_string()
}

fn default_pattern() -> String {
    "./**/*.py".to_string()
}

fn default_template() -> String {
    "./report_template.svg".to_string()
}

fn default_output() -> String {
    "./helium.pdf".to_string()
}

fn default_min_grade() -> String {
    "A".to_string()
}

fn default_max_grade() -> String {
    "F".to_string()
}

const fn default_true() -> bool {
    true
}

/// Project-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name shown in the report header
    #[serde(default = "default_name")]
    pub name: String,
    /// Glob pattern selecting the files to analyze
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Analyze complexity over all discovered files instead of only the
    /// worst-maintainability files
    #[serde(default)]
    pub separate_metrics: bool,
    /// Paths removed from the discovered file set
    #[serde(default)]
    pub excludes: Vec<String>,
    /// Report template SVG path
    #[serde(default = "default_template")]
    pub template: String,
    /// Output PDF path
    #[serde(default = "default_output")]
    pub output: String,
    /// Custom SVG-to-PDF converter command (empty = auto-detect)
    #[serde(default)]
    pub converter: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            pattern: default_pattern(),
            separate_metrics: false,
            excludes: Vec::new(),
            template: default_template(),
            output: default_output(),
            converter: String::new(),
        }
    }
}

/// Maintainability analyzer settings, passed through to the metrics service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiConfig {
    /// Exclusion patterns forwarded to the analyzer
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Ignored directories forwarded to the analyzer
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Count multiline strings as comments
    #[serde(default = "default_true")]
    pub multi: bool,
    /// Minimum grade to report
    #[serde(default = "default_min_grade")]
    pub min: String,
    /// Maximum grade to report
    #[serde(default = "default_max_grade")]
    pub max: String,
}

impl Default for MiConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            ignore: Vec::new(),
            multi: true,
            min: default_min_grade(),
            max: default_max_grade(),
        }
    }
}

/// Complexity analyzer settings, passed through to the metrics service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CcConfig {
    /// Exclusion patterns forwarded to the analyzer
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Ignored directories forwarded to the analyzer
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Ignore assert statements when counting branches
    #[serde(default = "default_true")]
    pub no_assert: bool,
    /// Report closures alongside top-level functions
    #[serde(default = "default_true")]
    pub show_closures: bool,
    /// Minimum grade to report
    #[serde(default = "default_min_grade")]
    pub min: String,
    /// Maximum grade to report
    #[serde(default = "default_max_grade")]
    pub max: String,
    /// Result ordering hint forwarded to the analyzer (empty = default)
    #[serde(default)]
    pub order: String,
}

impl Default for CcConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            ignore: Vec::new(),
            no_assert: true,
            show_closures: true,
            min: default_min_grade(),
            max: default_max_grade(),
            order: String::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Project settings
    #[serde(default)]
    pub project: ProjectConfig,
    /// Maintainability analyzer settings
    #[serde(default)]
    pub mi: MiConfig,
    /// Complexity analyzer settings
    #[serde(default)]
    pub cc: CcConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Runtime overrides collected from CLI flags; `None` means no override.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override the report output path
    pub output: Option<String>,
    /// Override the template path
    pub template: Option<String>,
    /// Override the SVG converter command
    pub converter: Option<String>,
    /// Force complexity analysis over all discovered files
    pub separate_metrics: Option<bool>,
}

impl Config {
    /// Initialize config from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Initialize config from the compiled-in defaults
    ///
    /// # Panics
    /// Panics if the compiled-in defaults TOML cannot be parsed
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load config from a `.heliumrc` file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            HeliumError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
            .map_err(|e| HeliumError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Save config to a `.heliumrc` file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| HeliumError::Config(format!("cannot serialize configuration: {e}")))?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Apply CLI overrides to the loaded configuration
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(output) = &overrides.output {
            self.project.output.clone_from(output);
        }
        if let Some(template) = &overrides.template {
            self.project.template.clone_from(template);
        }
        if let Some(converter) = &overrides.converter {
            self.project.converter.clone_from(converter);
        }
        if let Some(separate) = overrides.separate_metrics {
            self.project.separate_metrics = separate;
        }
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.project.name.clone()),
            "pattern" => Some(self.project.pattern.clone()),
            "separate_metrics" => Some(self.project.separate_metrics.to_string()),
            "template" => Some(self.project.template.clone()),
            "output" => Some(self.project.output.clone()),
            "converter" => Some(self.project.converter.clone()),
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "name" => self.project.name = value.to_string(),
            "pattern" => self.project.pattern = value.to_string(),
            "separate_metrics" => {
                self.project.separate_metrics = value.parse::<bool>().map_err(|_| {
                    format!("Invalid boolean value for 'separate_metrics': '{value}'")
                })?;
            }
            "template" => self.project.template = value.to_string(),
            "output" => self.project.output = value.to_string(),
            "converter" => self.project.converter = value.to_string(),
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> std::result::Result<(), String> {
        match key {
            "name" => self.project.name.clone_from(&defaults.project.name),
            "pattern" => self.project.pattern.clone_from(&defaults.project.pattern),
            "separate_metrics" => {
                self.project.separate_metrics = defaults.project.separate_metrics;
            }
            "template" => self.project.template.clone_from(&defaults.project.template),
            "output" => self.project.output.clone_from(&defaults.project.output),
            "converter" => self
                .project
                .converter
                .clone_from(&defaults.project.converter),
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete a `.heliumrc` file (reset all configuration to defaults)
    ///
    /// # Errors
    /// Returns an error if the config file cannot be deleted
    pub fn reset(path: &Path) -> std::result::Result<(), std::io::Error> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Resolve the configuration file path: an explicit CLI path, or the
    /// default project-local location.
    #[must_use]
    pub fn resolve_path(cli_path: Option<&Path>) -> PathBuf {
        cli_path.map_or_else(|| PathBuf::from(CONFIG_LOCATION), Path::to_path_buf)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[project]")?;
        writeln!(f, "  name = \"{}\"", self.project.name)?;
        writeln!(f, "  pattern = \"{}\"", self.project.pattern)?;
        writeln!(f, "  separate_metrics = {}", self.project.separate_metrics)?;
        writeln!(f, "  excludes = {:?}", self.project.excludes)?;
        writeln!(f, "  template = \"{}\"", self.project.template)?;
        writeln!(f, "  output = \"{}\"", self.project.output)?;
        writeln!(f, "  converter = \"{}\"", self.project.converter)?;

        writeln!(f, "\n[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        Ok(())
    }
}
