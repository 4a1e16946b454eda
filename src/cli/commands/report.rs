//! Report command handler
//!
//! Drives a full report run: discover files, collect metrics through the
//! radon provider, assemble the report document and render it to PDF.
//! Any failure terminates the process with exit status 1 and a diagnostic.

use helium::config::Config;
use helium::core::discovery::discover_files;
use helium::core::error::Result;
use helium::core::metrics::RadonProvider;
use helium::core::report::{self, SvgRenderer};
use logger::{error, info};
use std::path::{Path, PathBuf};

/// Run the report command.
pub fn run(config_path: &Path, config: &Config) {
    if !config_path.exists() {
        eprintln!(
            "✗ No {} found. Run `helium init` to create one.",
            config_path.display()
        );
        std::process::exit(1);
    }

    match generate_report(config) {
        Ok(output) => {
            println!("✓ Report generated: {}", output.display());
            info!("Report exported to: {}", output.display());
        }
        Err(e) => {
            error!("Report generation failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn generate_report(config: &Config) -> Result<PathBuf> {
    let files = discover_files(&config.project.pattern, &config.project.excludes)?;
    info!(
        "Analyzing {} files for project '{}'",
        files.len(),
        config.project.name
    );

    let provider = RadonProvider::from_config(config);
    let renderer = if config.project.converter.is_empty() {
        SvgRenderer::new()
    } else {
        SvgRenderer::with_converter(&config.project.converter)
    };

    report::generate(config, &files, &provider, &renderer)
}
