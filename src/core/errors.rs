//! Error types for the edgecombine-rs library.
//!
//! Every stage of the combine pipeline reports failures through
//! [`CombineError`]. Errors are fatal for the run: nothing is retried and no
//! partial output is produced past the failing stage.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main result type for edgecombine operations.
pub type Result<T> = std::result::Result<T, CombineError>;

/// Error type for all combine operations.
#[derive(Error, Debug)]
pub enum CombineError {
    /// Discovery found no candidate input files
    #[error("No {pattern} files found in {}", directory.display())]
    NoInputsFound {
        /// Directory that was searched
        directory: PathBuf,
        /// File pattern inputs must match
        pattern: String,
    },

    /// An input file does not hold a square matrix
    #[error("{} is not square: {rows} row(s) but {columns} column(s) on line {line}", file.display())]
    NonSquareMatrix {
        /// Offending input file
        file: PathBuf,
        /// Number of non-blank rows in the file
        rows: usize,
        /// Column count that disagrees with the row count
        columns: usize,
        /// 1-based line number of the disagreeing row (0 when the file has no rows)
        line: usize,
    },

    /// A token could not be read as a floating-point number
    #[error("Parse error in {} at line {line}, column {column}: invalid number '{token}' ({message})", file.display())]
    Parse {
        /// File containing the token
        file: PathBuf,
        /// 1-based line number
        line: usize,
        /// 1-based token position within the line
        column: usize,
        /// The rejected token
        token: String,
        /// Parser message
        message: String,
    },

    /// Conflicting or unknown configuration values
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// The combined matrix could not be written
    #[error("Failed to write output {}: {source}", path.display())]
    OutputWrite {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading an input directory or file failed
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl CombineError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a "no inputs found" error for a directory
    pub fn no_inputs(directory: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self::NoInputsFound {
            directory: directory.into(),
            pattern: pattern.into(),
        }
    }

    /// Create an output write error
    pub fn output_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// The input file this error is attributed to, if any.
    pub fn file(&self) -> Option<&Path> {
        match self {
            Self::NonSquareMatrix { file, .. } | Self::Parse { file, .. } => Some(file),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for CombineError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config(format!("YAML configuration could not be read: {err}"))
    }
}
