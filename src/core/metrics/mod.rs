//! Metrics service contract
//!
//! Defines the uniform record types the ranking pipeline consumes and the
//! [`MetricsProvider`] seam behind which the external analyzer lives. The
//! core treats metrics computation as a black box: it never computes a
//! maintainability index or a complexity score itself.

pub mod radon;

pub use radon::RadonProvider;

use crate::core::error::Result;
use crate::core::grading::Grade;
use serde::Deserialize;
use std::path::PathBuf;

/// Maintainability result for a single analyzed file.
///
/// The grade arrives pre-computed from the metrics service (`A`-`C` only)
/// and is not regraded here.
#[derive(Debug, Clone, PartialEq)]
pub struct MiRecord {
    /// Path of the analyzed file, as reported by the service.
    pub path: String,
    /// Maintainability index score.
    pub score: f64,
    /// Service-assigned grade.
    pub grade: Grade,
}

/// Cyclomatic complexity result for a single function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CcRecord {
    /// Path of the file containing the function.
    pub path: String,
    /// Name of the function.
    pub function: String,
    /// Cyclomatic complexity score.
    pub complexity: u32,
    /// Locally derived grade (the service does not grade complexity).
    pub grade: Grade,
}

/// A syntactic unit reported by the complexity analyzer.
///
/// Only leaf callable units (`Function`) carry scores the report uses;
/// containers and anything unrecognized are filtered out during ranking.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CodeNode {
    /// A leaf callable unit; the only node kind that is graded and reported.
    Function {
        /// Function name.
        name: String,
        /// Cyclomatic complexity score.
        complexity: u32,
    },
    /// A method inside a class; scored by the analyzer but not reported.
    Method {
        /// Method name.
        name: String,
        /// Cyclomatic complexity score.
        complexity: u32,
    },
    /// A class container.
    Class {
        /// Class name.
        name: String,
    },
    /// Any other node kind the analyzer may emit.
    #[serde(other)]
    Other,
}

/// Per-file complexity output: one entry per analyzed file, carrying the
/// heterogeneous node list the analyzer produced for it.
pub type ComplexityResults = Vec<(String, Vec<CodeNode>)>;

/// The metrics-service seam.
///
/// Implementations invoke an external analyzer over the given files and
/// return structured measurements; they perform no ranking or grading of
/// their own (maintainability grades excepted, which the service itself
/// assigns).
pub trait MetricsProvider {
    /// Collect the maintainability index for each file.
    ///
    /// # Errors
    /// Returns an error if the analyzer cannot be invoked or its output
    /// cannot be parsed.
    fn maintainability(&self, files: &[PathBuf]) -> Result<Vec<MiRecord>>;

    /// Collect per-node cyclomatic complexity for each file.
    ///
    /// # Errors
    /// Returns an error if the analyzer cannot be invoked or its output
    /// cannot be parsed.
    fn complexity(&self, files: &[PathBuf]) -> Result<ComplexityResults>;
}
