//! Configuration types for the combine pipeline.
//!
//! A single [`CombineConfig`] value carries everything a run needs: the
//! source directory, the output file name, the numeric precision and the
//! ordering mode. Nothing is read from ambient state.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::{CombineError, Result};

/// File name suffix identifying matrix inputs.
pub const EDGE_SUFFIX: &str = ".edge";

/// Output file name used when none is configured.
pub const DEFAULT_OUTPUT_NAME: &str = "total.edge";

/// Decimal places written when none is configured.
pub const DEFAULT_PRECISION: usize = 5;

/// Largest precision the formatter accepts.
pub const MAX_PRECISION: usize = u16::MAX as usize;

/// User-facing ordering selector.
///
/// Each mode resolves to one deterministic [`OrderingPolicy`]. `Directory`
/// never follows the raw filesystem enumeration order; it is name order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OrderingMode {
    /// Default mode, sorted by file name
    #[default]
    Directory,
    /// Explicit alphabetical sort by file name
    Alphabetical,
    /// Largest matrix first, ties in name order
    Size,
}

/// Deterministic ordering policy applied before assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingPolicy {
    /// Lexicographic by file name, ascending
    NameOrder,
    /// Matrix dimension descending, name order among equals
    SizeDescending,
}

impl OrderingMode {
    /// All selectable modes.
    pub const ALL: [OrderingMode; 3] = [Self::Directory, Self::Alphabetical, Self::Size];

    /// Resolve the mode to the policy that actually orders files.
    pub fn policy(self) -> OrderingPolicy {
        match self {
            Self::Directory | Self::Alphabetical => OrderingPolicy::NameOrder,
            Self::Size => OrderingPolicy::SizeDescending,
        }
    }

    /// Human-readable description used in reports.
    pub fn description(self) -> &'static str {
        match self {
            Self::Directory => "directory order",
            Self::Alphabetical => "alphabetical order",
            Self::Size => "size (largest first)",
        }
    }

    /// Build a mode from mutually exclusive command-line flags.
    ///
    /// No flag selects [`OrderingMode::Directory`]. Setting both flags is a
    /// configuration error.
    pub fn from_flags(alphabetical: bool, size: bool) -> Result<Self> {
        match (alphabetical, size) {
            (true, true) => Err(CombineError::config_field(
                "--alphabetical and --size are mutually exclusive",
                "ordering",
            )),
            (true, false) => Ok(Self::Alphabetical),
            (false, true) => Ok(Self::Size),
            (false, false) => Ok(Self::Directory),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::Alphabetical => "alphabetical",
            Self::Size => "size",
        }
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderingMode {
    type Err = CombineError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "directory" | "name" => Ok(Self::Directory),
            "alphabetical" => Ok(Self::Alphabetical),
            "size" => Ok(Self::Size),
            other => {
                let expected: Vec<&str> = Self::ALL.iter().map(|mode| mode.label()).collect();
                Err(CombineError::config_field(
                    format!(
                        "Unknown ordering mode '{other}' (expected one of: {})",
                        expected.join(", ")
                    ),
                    "ordering",
                ))
            }
        }
    }
}

impl TryFrom<String> for OrderingMode {
    type Error = CombineError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<OrderingMode> for String {
    fn from(mode: OrderingMode) -> Self {
        mode.label().to_string()
    }
}

/// Explicit configuration for one combine run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombineConfig {
    /// Directory holding the `.edge` inputs; the output is written here too
    pub source_dir: PathBuf,

    /// Output file name, excluded from discovery
    pub output_name: String,

    /// Digits written after the decimal point
    pub precision: usize,

    /// Block ordering mode
    pub ordering: OrderingMode,
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            precision: DEFAULT_PRECISION,
            ordering: OrderingMode::default(),
        }
    }
}

impl CombineConfig {
    /// Configuration for `source_dir` with every other field at its default.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            ..Self::default()
        }
    }

    /// Set the output file name
    pub fn with_output_name(mut self, output_name: impl Into<String>) -> Self {
        self.output_name = output_name.into();
        self
    }

    /// Set the output precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set the ordering mode
    pub fn with_ordering(mut self, ordering: OrderingMode) -> Self {
        self.ordering = ordering;
        self
    }

    /// Path the combined matrix is written to.
    pub fn output_path(&self) -> PathBuf {
        self.source_dir.join(&self.output_name)
    }

    /// Validate the configuration before any file is touched.
    ///
    /// The output name must be a bare file name inside `source_dir`, so
    /// discovery can always recognise and skip a previous result.
    pub fn validate(&self) -> Result<()> {
        if self.output_name.trim().is_empty() {
            return Err(CombineError::config_field(
                "Output name must not be empty",
                "output_name",
            ));
        }

        let mut components = Path::new(&self.output_name).components();
        let is_bare_name = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(name)), None) if name == self.output_name.as_str()
        );
        if !is_bare_name {
            return Err(CombineError::config_field(
                format!(
                    "Output name '{}' must be a plain file name without directories",
                    self.output_name
                ),
                "output_name",
            ));
        }

        if self.precision > MAX_PRECISION {
            return Err(CombineError::config_field(
                format!("Precision must be at most {MAX_PRECISION}, got {}", self.precision),
                "precision",
            ));
        }
        Ok(())
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CombineError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        serde_yaml::from_str(&content).map_err(Into::into)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(|e| {
            CombineError::io(format!("Failed to write config file: {}", path.display()), e)
        })
    }
}
