//! SVG-to-PDF rendering via an external converter
//!
//! The filled working document is handed to an external rasterizer to
//! produce the distributable PDF. Known converters are auto-detected on
//! `PATH`; a custom converter command can be supplied through configuration
//! or the CLI.

use crate::core::error::{HeliumError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Converter executables probed in order of preference.
const CONVERTER_CANDIDATES: [&str; 3] = ["rsvg-convert", "inkscape", "cairosvg"];

/// Trait for document rasterizers.
pub trait DocumentRenderer {
    /// Convert the filled document at `document` into a PDF at `output`.
    ///
    /// # Errors
    /// Returns an error if no converter is available or the conversion
    /// fails.
    fn render(&self, document: &Path, output: &Path) -> Result<()>;
}

/// SVG-to-PDF renderer backed by an external converter command.
pub struct SvgRenderer {
    /// Optional custom converter command
    converter: Option<String>,
}

impl SvgRenderer {
    /// Create a renderer that auto-detects an installed converter.
    #[must_use]
    pub const fn new() -> Self {
        Self { converter: None }
    }

    /// Create a renderer with a custom converter command.
    #[must_use]
    pub fn with_converter(converter: &str) -> Self {
        Self {
            converter: Some(converter.to_owned()),
        }
    }

    /// Detect an available converter on `PATH`.
    fn detect_converter() -> Option<String> {
        CONVERTER_CANDIDATES
            .iter()
            .find(|candidate| which::which(candidate).is_ok())
            .map(|candidate| (*candidate).to_string())
    }

    /// Argument vector for a given converter program.
    ///
    /// Known converters get their native flag shapes; anything else is
    /// assumed to take `INPUT -o OUTPUT`.
    fn converter_args(program: &str, svg: &Path, pdf: &Path) -> Vec<String> {
        let name = Path::new(program)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(program);

        match name {
            "rsvg-convert" => vec![
                "--format".to_string(),
                "pdf".to_string(),
                "--output".to_string(),
                pdf.display().to_string(),
                svg.display().to_string(),
            ],
            "inkscape" => vec![
                svg.display().to_string(),
                "--export-type=pdf".to_string(),
                format!("--export-filename={}", pdf.display()),
            ],
            _ => vec![
                svg.display().to_string(),
                "-o".to_string(),
                pdf.display().to_string(),
            ],
        }
    }

    /// Run the converter and verify it produced the output file.
    fn convert(program: &str, svg: &Path, pdf: &Path) -> Result<()> {
        let output = Command::new(program)
            .args(Self::converter_args(program, svg, pdf))
            .stdin(Stdio::null())
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HeliumError::Render(format!(
                "{program} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        if !pdf.is_file() {
            return Err(HeliumError::Render(format!(
                "{program} reported success but produced no output at {}",
                pdf.display()
            )));
        }

        Ok(())
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for SvgRenderer {
    fn render(&self, document: &Path, output: &Path) -> Result<()> {
        // Use custom converter if provided
        if let Some(converter) = &self.converter {
            return Self::convert(converter, document, output);
        }

        // Try to auto-detect an installed converter
        if let Some(converter) = Self::detect_converter() {
            logger::debug!("Using SVG converter: {converter}");
            return Self::convert(&converter, document, output);
        }

        Err(HeliumError::Render(
            "no SVG converter found.\n\
            \n\
            To render PDF reports, install one of:\n\
            \n\
            • rsvg-convert:   sudo apt install librsvg2-bin\n\
            • inkscape:       sudo apt install inkscape\n\
            • cairosvg:       pip install cairosvg\n\
            \n\
            Alternatively, set a custom converter:\n\
              helium config set converter /path/to/converter\n"
                .to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn known_converters_get_native_flag_shapes() {
        let svg = PathBuf::from("in.svg");
        let pdf = PathBuf::from("out.pdf");

        let args = SvgRenderer::converter_args("rsvg-convert", &svg, &pdf);
        assert_eq!(args, vec!["--format", "pdf", "--output", "out.pdf", "in.svg"]);

        let args = SvgRenderer::converter_args("/usr/bin/inkscape", &svg, &pdf);
        assert_eq!(
            args,
            vec!["in.svg", "--export-type=pdf", "--export-filename=out.pdf"]
        );

        let args = SvgRenderer::converter_args("cairosvg", &svg, &pdf);
        assert_eq!(args, vec!["in.svg", "-o", "out.pdf"]);
    }

    #[test]
    fn missing_converter_command_is_a_render_error() {
        let renderer = SvgRenderer::with_converter("definitely-not-a-real-converter");
        let err = renderer
            .render(Path::new("in.svg"), Path::new("out.pdf"))
            .unwrap_err();
        // Spawning a nonexistent program surfaces as an I/O failure.
        assert!(matches!(
            err,
            crate::core::error::HeliumError::Io(_) | crate::core::error::HeliumError::Render(_)
        ));
    }
}
