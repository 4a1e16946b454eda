//! Result ranking pipeline
//!
//! Turns raw, unordered metrics-service output into the two fixed-size
//! "worst" lists the report template displays: the three least maintainable
//! files and the eight most complex functions. A partially filled report is
//! considered worse than no report, so too few records is a hard error.

use crate::core::error::{HeliumError, Result};
use crate::core::grading::grade_complexity;
use crate::core::metrics::{CcRecord, CodeNode, ComplexityResults, MiRecord};

/// Number of maintainability index results the template displays.
pub const DISPLAYED_MI_RESULTS: usize = 3;

/// Number of cyclomatic complexity results the template displays.
pub const DISPLAYED_CC_RESULTS: usize = 8;

/// Select the worst [`DISPLAYED_MI_RESULTS`] maintainability records.
///
/// Sorted ascending by score (lower maintainability sorts first); the sort
/// is stable, so equal scores keep their input order.
///
/// # Errors
/// Returns [`HeliumError::InsufficientData`] when fewer than
/// [`DISPLAYED_MI_RESULTS`] records are available.
pub fn rank_maintainability(mut records: Vec<MiRecord>) -> Result<Vec<MiRecord>> {
    if records.len() < DISPLAYED_MI_RESULTS {
        return Err(HeliumError::InsufficientData {
            metric: "maintainability",
            required: DISPLAYED_MI_RESULTS,
            found: records.len(),
        });
    }

    records.sort_by(|a, b| a.score.total_cmp(&b.score));
    records.truncate(DISPLAYED_MI_RESULTS);
    Ok(records)
}

/// Select the worst [`DISPLAYED_CC_RESULTS`] complexity records.
///
/// Flattens the per-file node lists into one record per function, grading
/// each locally. Container nodes (classes, methods, modules) are filtered
/// out; only leaf callable units are graded and reported. Sorted descending
/// by complexity (higher sorts first), stable across ties.
///
/// # Errors
/// Returns [`HeliumError::InsufficientData`] when fewer than
/// [`DISPLAYED_CC_RESULTS`] function records are available.
pub fn rank_complexity(results: ComplexityResults) -> Result<Vec<CcRecord>> {
    let mut records: Vec<CcRecord> = results
        .into_iter()
        .flat_map(|(path, nodes)| {
            nodes
                .into_iter()
                .filter_map(move |node| match node {
                    CodeNode::Function { name, complexity } => Some(CcRecord {
                        path: path.clone(),
                        function: name,
                        complexity,
                        grade: grade_complexity(complexity),
                    }),
                    _ => None,
                })
                .collect::<Vec<_>>()
        })
        .collect();

    if records.len() < DISPLAYED_CC_RESULTS {
        return Err(HeliumError::InsufficientData {
            metric: "cyclomatic complexity",
            required: DISPLAYED_CC_RESULTS,
            found: records.len(),
        });
    }

    records.sort_by(|a, b| b.complexity.cmp(&a.complexity));
    records.truncate(DISPLAYED_CC_RESULTS);
    Ok(records)
}
