//! Radon-backed metrics provider
//!
//! Invokes the external `radon` analyzer as a subprocess with JSON output
//! and parses the results into the core's record types. Radon computes the
//! maintainability index (graded A-C by radon itself) and per-node
//! cyclomatic complexity (graded locally, see
//! [`crate::core::grading::grade_complexity`]).

use crate::config::{CcConfig, Config, MiConfig};
use crate::core::error::{HeliumError, Result};
use crate::core::metrics::{CodeNode, ComplexityResults, MetricsProvider, MiRecord};
use crate::core::grading::Grade;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::Command;

/// Name of the analyzer executable looked up on `PATH`.
const RADON_PROGRAM: &str = "radon";

/// Per-file maintainability output: either a report or an analysis error.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MiOutcome {
    /// Successful analysis.
    Report {
        /// Maintainability index score.
        mi: f64,
        /// Radon-assigned grade.
        rank: Grade,
    },
    /// Radon could not analyze the file (e.g. a syntax error).
    Failed {
        /// Radon's error message.
        error: String,
    },
}

/// Per-file complexity output: either a node list or an analysis error.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CcOutcome {
    /// Successful analysis.
    Nodes(Vec<CodeNode>),
    /// Radon could not analyze the file.
    Failed {
        /// Radon's error message.
        error: String,
    },
}

/// Metrics provider backed by the external `radon` analyzer.
pub struct RadonProvider {
    mi: MiConfig,
    cc: CcConfig,
}

impl RadonProvider {
    /// Create a provider from the two analyzer configuration tables.
    #[must_use]
    pub const fn new(mi: MiConfig, cc: CcConfig) -> Self {
        Self { mi, cc }
    }

    /// Create a provider from a loaded project configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.mi.clone(), config.cc.clone())
    }

    /// Locate the analyzer executable.
    fn analyzer() -> Result<PathBuf> {
        which::which(RADON_PROGRAM).map_err(|_| {
            HeliumError::Metrics(format!(
                "'{RADON_PROGRAM}' not found on PATH (install it with `pip install radon`)"
            ))
        })
    }

    /// Run one analyzer subcommand over `files` and return its stdout.
    fn run(subcommand_args: &[String], files: &[PathBuf]) -> Result<String> {
        let program = Self::analyzer()?;
        let output = Command::new(&program)
            .args(subcommand_args)
            .args(files)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HeliumError::Metrics(format!(
                "{RADON_PROGRAM} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Argument vector for `radon mi`.
    fn mi_args(&self) -> Vec<String> {
        let mut args = vec!["mi".to_string(), "--json".to_string()];
        if !self.mi.exclude.is_empty() {
            args.push("--exclude".to_string());
            args.push(self.mi.exclude.join(","));
        }
        if !self.mi.ignore.is_empty() {
            args.push("--ignore".to_string());
            args.push(self.mi.ignore.join(","));
        }
        if self.mi.multi {
            args.push("--multi".to_string());
        }
        args.push("--min".to_string());
        args.push(self.mi.min.clone());
        args.push("--max".to_string());
        args.push(self.mi.max.clone());
        args
    }

    /// Argument vector for `radon cc`.
    fn cc_args(&self) -> Vec<String> {
        let mut args = vec!["cc".to_string(), "--json".to_string()];
        if !self.cc.exclude.is_empty() {
            args.push("--exclude".to_string());
            args.push(self.cc.exclude.join(","));
        }
        if !self.cc.ignore.is_empty() {
            args.push("--ignore".to_string());
            args.push(self.cc.ignore.join(","));
        }
        if self.cc.no_assert {
            args.push("--no-assert".to_string());
        }
        if self.cc.show_closures {
            args.push("--show-closures".to_string());
        }
        args.push("--min".to_string());
        args.push(self.cc.min.clone());
        args.push("--max".to_string());
        args.push(self.cc.max.clone());
        if !self.cc.order.is_empty() {
            args.push("--order".to_string());
            args.push(self.cc.order.clone());
        }
        args
    }

    /// Parse `radon mi --json` output into maintainability records.
    ///
    /// Files radon could not analyze are logged and skipped; the downstream
    /// minimum-count check decides whether enough results remain.
    fn parse_mi(json: &str) -> Result<Vec<MiRecord>> {
        let parsed: BTreeMap<String, MiOutcome> = serde_json::from_str(json)
            .map_err(|e| HeliumError::Metrics(format!("unexpected mi output: {e}")))?;

        let mut records = Vec::with_capacity(parsed.len());
        for (path, outcome) in parsed {
            match outcome {
                MiOutcome::Report { mi, rank } => records.push(MiRecord {
                    path,
                    score: mi,
                    grade: rank,
                }),
                MiOutcome::Failed { error } => {
                    logger::warn!("Skipping {path}: {error}");
                }
            }
        }
        Ok(records)
    }

    /// Parse `radon cc --json` output into per-file node lists.
    fn parse_cc(json: &str) -> Result<ComplexityResults> {
        let parsed: BTreeMap<String, CcOutcome> = serde_json::from_str(json)
            .map_err(|e| HeliumError::Metrics(format!("unexpected cc output: {e}")))?;

        let mut results = Vec::with_capacity(parsed.len());
        for (path, outcome) in parsed {
            match outcome {
                CcOutcome::Nodes(nodes) => results.push((path, nodes)),
                CcOutcome::Failed { error } => {
                    logger::warn!("Skipping {path}: {error}");
                }
            }
        }
        Ok(results)
    }
}

impl MetricsProvider for RadonProvider {
    fn maintainability(&self, files: &[PathBuf]) -> Result<Vec<MiRecord>> {
        logger::info!("Collecting maintainability index for {} files", files.len());
        let stdout = Self::run(&self.mi_args(), files)?;
        Self::parse_mi(&stdout)
    }

    fn complexity(&self, files: &[PathBuf]) -> Result<ComplexityResults> {
        logger::info!("Collecting cyclomatic complexity for {} files", files.len());
        let stdout = Self::run(&self.cc_args(), files)?;
        Self::parse_cc(&stdout)
    }
}
