//! Error taxonomy for report generation
//!
//! Every failure is fail-fast: there are no retries and no partial-success
//! mode. The CLI maps any error surfacing from the core to exit status 1.

use crate::core::grading::Grade;
use thiserror::Error;

/// Convenience alias used throughout the core.
pub type Result<T> = std::result::Result<T, HeliumError>;

/// Errors produced while generating a report.
#[derive(Debug, Error)]
pub enum HeliumError {
    /// Fewer ranked records than the fixed display count for a metric.
    /// The run aborts without producing a partial artifact.
    #[error("not enough {metric} results to generate report (minimum {required} required, found {found})")]
    InsufficientData {
        /// Human-readable metric name (e.g. "maintainability").
        metric: &'static str,
        /// Minimum number of records the template layout requires.
        required: usize,
        /// Number of records actually available.
        found: usize,
    },

    /// A grade outside the closed enumeration reached a colour lookup.
    /// Indicates the metrics service violated its contract.
    #[error("no highlight colour defined for maintainability grade {0}")]
    UnknownGrade(Grade),

    /// Document read/write failure; propagates untouched.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The configured file discovery pattern is not a valid glob.
    #[error("invalid file pattern '{pattern}': {source}")]
    Pattern {
        /// The offending glob pattern.
        pattern: String,
        /// The underlying parse error.
        source: glob::PatternError,
    },

    /// A substitution pattern failed to compile.
    #[error("invalid substitution pattern '{pattern}': {message}")]
    Substitution {
        /// The offending pattern text.
        pattern: String,
        /// The underlying regex error, rendered.
        message: String,
    },

    /// Configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The external metrics analyzer failed or produced unusable output.
    #[error("metrics collection failed: {0}")]
    Metrics(String),

    /// The external document converter failed.
    #[error("report rendering failed: {0}")]
    Render(String),
}
