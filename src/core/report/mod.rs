//! Report assembly driver
//!
//! Sequences a full report run: materialize a fresh working copy of the
//! template, fill the header tokens, rank both metrics, substitute each
//! ranked result and its derived highlight colour into the document, then
//! hand the finished document to the rendering collaborator. The working
//! document is a single mutable resource owned here for the run's duration
//! and discarded once the artifact exists.

pub mod render;
pub mod template;

pub use render::{DocumentRenderer, SvgRenderer};

use crate::config::Config;
use crate::core::error::Result;
use crate::core::grading::{complexity_color, maintainability_color};
use crate::core::metrics::MetricsProvider;
use crate::core::ranking::{self, DISPLAYED_MI_RESULTS};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Timestamp format for the report header.
const REPORT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Generate the quality report for the discovered `files`.
///
/// Runs top to bottom with no partial-success mode: the first unrecoverable
/// error aborts the run before any artifact is produced. Returns the path
/// of the rendered PDF.
///
/// # Errors
/// Propagates insufficient-data, I/O, metrics, lookup and render errors
/// untouched; see [`crate::core::error::HeliumError`].
pub fn generate(
    config: &Config,
    files: &[PathBuf],
    provider: &dyn MetricsProvider,
    renderer: &dyn DocumentRenderer,
) -> Result<PathBuf> {
    // Fresh working copy of the template; dropped (and deleted) on return.
    let working = tempfile::Builder::new()
        .prefix("helium-report-")
        .suffix(".svg")
        .tempfile()?;
    let document = working.path();
    template::materialize(&config.project.template, document)?;

    // Report-level header tokens.
    let report_date = Local::now().format(REPORT_DATE_FORMAT).to_string();
    template::fill_tokens(
        document,
        &[
            ("proj_name", config.project.name.as_str()),
            ("report_date", report_date.as_str()),
        ],
        false,
    )?;

    // Worst maintainability slots.
    let worst_mi = ranking::rank_maintainability(provider.maintainability(files)?)?;
    for (i, record) in worst_mi.iter().enumerate() {
        let slot = i + 1;
        template::fill_tokens(
            document,
            &[
                (format!("m{slot}"), record.grade.to_string()),
                (format!("mq{slot}"), format!("{:.2}", record.score)),
                (format!("mf_{slot}"), record.path.clone()),
            ],
            false,
        )?;
        template::replace_literals(
            document,
            &[(
                template::color_marker(slot),
                maintainability_color(record.grade)?.to_string(),
            )],
        )?;
    }

    // Complexity targets: all discovered files, or only the worst
    // maintainability files, per configuration.
    let cc_targets: Vec<PathBuf> = if config.project.separate_metrics {
        files.to_vec()
    } else {
        worst_mi.iter().map(|r| PathBuf::from(&r.path)).collect()
    };

    // Worst complexity slots, numbered contiguously after the
    // maintainability slots in the colour-marker index space.
    let worst_cc = ranking::rank_complexity(provider.complexity(&cc_targets)?)?;
    for (i, record) in worst_cc.iter().enumerate() {
        let slot = i + 1;
        template::fill_tokens(
            document,
            &[
                (format!("cc{slot}"), record.grade.to_string()),
                (format!("ccq{slot}"), record.complexity.to_string()),
                (format!("ccn{slot}"), record.function.clone()),
                (format!("ccf{slot}"), basename_only(&record.path)),
            ],
            false,
        )?;
        template::replace_literals(
            document,
            &[(
                template::color_marker(slot + DISPLAYED_MI_RESULTS),
                complexity_color(record.grade).to_string(),
            )],
        )?;
    }

    // Hand off to the rendering collaborator.
    let output = PathBuf::from(&config.project.output);
    renderer.render(document, &output)?;
    Ok(output)
}

/// Base name of a file path, discarding the directory portion.
fn basename_only(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map_or_else(|| path.to_string(), |name| name.to_string_lossy().into_owned())
}
