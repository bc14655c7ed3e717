//! Edge file discovery.
//!
//! Lists the `.edge` files directly inside one directory. Subdirectories are
//! never entered and the configured output file is always left out, so a
//! previous result is not folded back into a new one.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use tracing::{debug, warn};

use crate::core::config::EDGE_SUFFIX;
use crate::core::errors::{CombineError, Result};

/// One discovered input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeFile {
    /// Full path to the file
    pub path: PathBuf,
    /// File name used for ordering and reports
    pub name: String,
}

impl EdgeFile {
    /// Build an entry from a path, taking the name from its last component.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

fn edge_matcher() -> Result<GlobMatcher> {
    Glob::new(&format!("*{EDGE_SUFFIX}"))
        .map(|glob| glob.compile_matcher())
        .map_err(|e| CombineError::config(format!("Invalid edge file pattern: {e}")))
}

/// Discover edge files in `directory`, excluding `output_name`.
///
/// The result is sorted by file name. Fails with
/// [`CombineError::NoInputsFound`] when nothing matches.
pub fn discover_edge_files(directory: &Path, output_name: &str) -> Result<Vec<EdgeFile>> {
    let matcher = edge_matcher()?;
    let entries = fs::read_dir(directory).map_err(|e| {
        CombineError::io(
            format!("Failed to list directory: {}", directory.display()),
            e,
        )
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            CombineError::io(
                format!("Failed to read directory entry in {}", directory.display()),
                e,
            )
        })?;
        let file = EdgeFile::new(entry.path());

        if !matcher.is_match(&file.name) || file.name == output_name {
            continue;
        }
        if !entry.path().is_file() {
            warn!("Skipping non-file entry {}", file.path.display());
            continue;
        }

        debug!("Discovered edge file {}", file.path.display());
        files.push(file);
    }

    if files.is_empty() {
        return Err(CombineError::no_inputs(directory, format!("*{EDGE_SUFFIX}")));
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "1\n").unwrap();
    }

    #[test]
    fn finds_only_edge_files_and_skips_output() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.edge", "a.edge", "total.edge", "notes.txt", "c.edge.bak"] {
            touch(dir.path(), name);
        }

        let files = discover_edge_files(dir.path(), "total.edge").unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.edge", "b.edge"]);
    }

    #[test]
    fn does_not_recurse() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested.edge");
        fs::create_dir(&nested).unwrap();
        touch(&nested, "inner.edge");
        touch(dir.path(), "top.edge");

        let files = discover_edge_files(dir.path(), "total.edge").unwrap();
        assert_eq!(files, vec![EdgeFile::new(dir.path().join("top.edge"))]);
    }

    #[test]
    fn empty_directory_is_no_inputs() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "total.edge");

        let err = discover_edge_files(dir.path(), "total.edge").unwrap_err();
        assert!(matches!(err, CombineError::NoInputsFound { .. }));
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_edge_files(&dir.path().join("absent"), "total.edge").unwrap_err();
        assert!(matches!(err, CombineError::Io { .. }));
    }
}
