//! Token substitution engine
//!
//! Rewrites the working document in place by replacing bracketed
//! placeholders (`{{ name }}`, or `<!-- {{ name }} -->` for the
//! comment-wrapped variant) with literal values, and by replacing reserved
//! colour markers with computed highlight colours.
//!
//! Placeholders are never required to be filled: a template may contain
//! more slots than a run populates, and a slot whose pattern matches
//! nothing simply stays as authored. The reverse is also unchecked — if a
//! template under-provisions slots, the extra results produce no visible
//! effect and no error (a known gap, kept as-is).

use crate::core::error::{HeliumError, Result};
use regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;

/// Embedded default report page, used when no template file is found.
const DEFAULT_TEMPLATE: &str = include_str!("../../../assets/report_template.svg");

/// File name of the user-level fallback template under the config directory.
const USER_TEMPLATE_NAME: &str = "report_template.svg";

/// Build the match pattern for one named placeholder.
///
/// Arbitrary whitespace around the name is tolerated. With `commented`,
/// the token must additionally be wrapped in a document comment, which
/// lets a template keep a slot human-visible in its source but invisible
/// to the renderer until filled.
fn token_pattern(name: &str, commented: bool) -> String {
    let name = regex::escape(name);
    if commented {
        format!(r"<!--\s*\{{\{{\s*{name}\s*\}}\}}\s*-->")
    } else {
        format!(r"\{{\{{\s*{name}\s*\}}\}}")
    }
}

/// Compile one substitution pattern.
fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| HeliumError::Substitution {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Apply a set of compiled substitutions to the document, line by line,
/// then rewrite the whole file.
///
/// Replacement values are inserted verbatim (`NoExpand`), so characters
/// that would otherwise read as capture references (`$1`) stay literal.
fn rewrite(path: &Path, subs: &[(Regex, &str)]) -> Result<()> {
    let content = fs::read_to_string(path)?;

    let mut buffer = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        let mut processed = line.to_string();
        for (pattern, value) in subs {
            processed = pattern
                .replace_all(&processed, NoExpand(value))
                .into_owned();
        }
        buffer.push_str(&processed);
    }

    fs::write(path, buffer)?;
    Ok(())
}

/// Replace every occurrence of the named placeholders with their values.
///
/// # Errors
/// Returns [`HeliumError::Substitution`] if a pattern does not compile and
/// [`HeliumError::Io`] if the document cannot be read or written.
pub fn fill_tokens<N, V>(path: &Path, pairs: &[(N, V)], commented: bool) -> Result<()>
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    let mut subs = Vec::with_capacity(pairs.len());
    for (name, value) in pairs {
        subs.push((
            compile(&token_pattern(name.as_ref(), commented))?,
            value.as_ref(),
        ));
    }
    rewrite(path, &subs)
}

/// Replace exact literal patterns (reserved colour codes) with their values.
///
/// Same rewrite mechanics as [`fill_tokens`], but the patterns are used as
/// given rather than placeholder-wrapped.
///
/// # Errors
/// Returns [`HeliumError::Substitution`] if a pattern does not compile and
/// [`HeliumError::Io`] if the document cannot be read or written.
pub fn replace_literals<P, V>(path: &Path, pairs: &[(P, V)]) -> Result<()>
where
    P: AsRef<str>,
    V: AsRef<str>,
{
    let mut subs = Vec::with_capacity(pairs.len());
    for (pattern, value) in pairs {
        subs.push((compile(pattern.as_ref())?, value.as_ref()));
    }
    rewrite(path, &subs)
}

/// Reserved colour marker for colourable region `index`.
///
/// Blue and red channels are pinned to `255`; the green channel encodes the
/// slot index as a 2-digit hex byte, so one static template can pre-declare
/// up to 255 distinct colourable regions without per-slot named tokens.
/// Callers index slots from 1; marker `#ff00ff` is never assigned.
#[must_use]
pub fn color_marker(index: usize) -> String {
    debug_assert!((1..=255).contains(&index), "slot index out of marker range");
    format!("#ff{index:02x}ff")
}

/// Materialize a fresh working copy of the report template at `dest`.
///
/// Resolution order: the configured template path, then a user-level
/// template under the platform config directory, then the embedded default.
///
/// # Errors
/// Returns [`HeliumError::Io`] if the chosen template cannot be copied or
/// the destination cannot be written.
pub fn materialize(template_path: &str, dest: &Path) -> Result<()> {
    let configured = Path::new(template_path);
    if configured.is_file() {
        fs::copy(configured, dest)?;
        return Ok(());
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_template = config_dir.join("helium").join(USER_TEMPLATE_NAME);
        if user_template.is_file() {
            logger::info!("Using user template: {}", user_template.display());
            fs::copy(user_template, dest)?;
            return Ok(());
        }
    }

    logger::info!("No template file found; using the embedded default page");
    fs::write(dest, DEFAULT_TEMPLATE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_pattern_tolerates_whitespace() {
        let re = Regex::new(&token_pattern("proj_name", false)).unwrap();
        assert!(re.is_match("{{proj_name}}"));
        assert!(re.is_match("{{ proj_name }}"));
        assert!(re.is_match("{{   proj_name}}"));
        assert!(!re.is_match("{{ proj_names }}"));
    }

    #[test]
    fn commented_pattern_requires_comment_wrapper() {
        let re = Regex::new(&token_pattern("footnote", true)).unwrap();
        assert!(re.is_match("<!-- {{ footnote }} -->"));
        assert!(re.is_match("<!--{{footnote}}-->"));
        assert!(!re.is_match("{{ footnote }}"));
    }

    #[test]
    fn color_marker_encodes_index_in_green_channel() {
        assert_eq!(color_marker(1), "#ff01ff");
        assert_eq!(color_marker(4), "#ff04ff");
        assert_eq!(color_marker(11), "#ff0bff");
        assert_eq!(color_marker(255), "#ffffff");
    }
}
