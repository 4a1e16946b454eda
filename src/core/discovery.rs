//! Source file discovery
//!
//! Expands the configured glob pattern recursively and removes any paths on
//! the exclusion list. Thin filesystem plumbing; everything interesting
//! happens downstream.

use crate::core::error::{HeliumError, Result};
use std::path::{Path, PathBuf};

/// Discover the source files matching `pattern`, minus `excludes`.
///
/// Excluded entries are compared as paths, so `./a.py` and `a.py` refer to
/// the same file.
///
/// # Errors
/// Returns [`HeliumError::Pattern`] if the glob pattern is malformed and
/// [`HeliumError::Io`] if a matched path cannot be read.
pub fn discover_files(pattern: &str, excludes: &[String]) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|source| HeliumError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let excluded: Vec<PathBuf> = excludes.iter().map(normalize).collect();

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(glob::GlobError::into_error)?;
        if !excluded.contains(&normalize(&path)) {
            files.push(path);
        }
    }

    logger::debug!("Discovered {} files for pattern '{pattern}'", files.len());
    Ok(files)
}

/// Strip a leading `./` so exclusion comparison is insensitive to it.
fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    path.strip_prefix(".").map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn discovers_matching_files_recursively() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::create_dir(dir.path().join("pkg")).unwrap();
        fs::write(dir.path().join("a.py"), "x = 1\n").unwrap();
        fs::write(dir.path().join("pkg").join("b.py"), "y = 2\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not code\n").unwrap();

        let pattern = format!("{}/**/*.py", dir.path().display());
        let files = discover_files(&pattern, &[]).expect("discovery");

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "py"));
    }

    #[test]
    fn excluded_paths_are_removed() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("keep.py"), "").unwrap();
        fs::write(dir.path().join("skip.py"), "").unwrap();

        let pattern = format!("{}/*.py", dir.path().display());
        let exclude = dir.path().join("skip.py").display().to_string();
        let files = discover_files(&pattern, &[exclude]).expect("discovery");

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.py"));
    }

    #[test]
    fn malformed_pattern_is_reported() {
        let err = discover_files("***", &[]).unwrap_err();
        assert!(matches!(err, HeliumError::Pattern { .. }));
    }
}
