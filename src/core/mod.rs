//! Core module: metrics collection, ranking, grading and report assembly

pub mod discovery;
pub mod error;
pub mod grading;
pub mod metrics;
pub mod ranking;
pub mod report;

/// Returns the current version of the `helium` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
