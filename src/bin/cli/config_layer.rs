//! Configuration Layer Management
//!
//! Builds the run configuration from three layers, lowest priority first:
//! built-in defaults, a YAML configuration file, and command-line flags.

use anyhow::Context;
use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use edgecombine_rs::{CombineConfig, OrderingMode};

/// Configuration files picked up from the working directory when `--config`
/// is not given.
const IMPLICIT_CONFIG_FILES: [&str; 2] = [".edgecombine.yml", ".edgecombine.yaml"];

/// Merge command-line overrides into a configuration
pub trait ApplyCliOverrides {
    /// Apply every flag the user actually passed
    fn apply_cli_overrides(&mut self, cli: &Cli, ordering: Option<OrderingMode>);
}

impl ApplyCliOverrides for CombineConfig {
    fn apply_cli_overrides(&mut self, cli: &Cli, ordering: Option<OrderingMode>) {
        if let Some(output) = &cli.output {
            self.output_name = output.clone();
        }
        if let Some(precision) = cli.precision {
            self.precision = precision;
        }
        if let Some(ordering) = ordering {
            self.ordering = ordering;
        }
    }
}

/// Ordering chosen on the command line, if any.
///
/// Checked before the configuration file or any input is opened.
fn ordering_from_flags(cli: &Cli) -> anyhow::Result<Option<OrderingMode>> {
    if !cli.alphabetical && !cli.size {
        return Ok(None);
    }
    Ok(Some(OrderingMode::from_flags(cli.alphabetical, cli.size)?))
}

fn config_file_path(cli: &Cli) -> Option<PathBuf> {
    cli.config.clone().or_else(|| {
        IMPLICIT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
    })
}

fn resolve_folder(folder: &Path) -> anyhow::Result<PathBuf> {
    folder
        .canonicalize()
        .with_context(|| format!("Cannot resolve folder {}", folder.display()))
}

/// Build the layered configuration for one run
pub fn build_layered_config(cli: &Cli) -> anyhow::Result<CombineConfig> {
    let ordering = ordering_from_flags(cli)?;

    let mut config = match config_file_path(cli) {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            CombineConfig::from_yaml_file(&path).with_context(|| {
                format!("Failed to load configuration from {}", path.display())
            })?
        }
        None => CombineConfig::default(),
    };

    config.apply_cli_overrides(cli, ordering);
    config.source_dir = resolve_folder(&cli.folder)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use edgecombine_rs::CombineError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("edgecombine").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("combine.yml");
        std::fs::write(&config_path, "output_name: from_file.edge\nprecision: 2\nordering: size\n")
            .unwrap();

        let folder = dir.path().to_str().unwrap();
        let config_arg = config_path.to_str().unwrap();
        let cli = parse(&[folder, "--config", config_arg, "-p", "7", "-a"]);

        let config = build_layered_config(&cli).unwrap();
        assert_eq!(config.output_name, "from_file.edge");
        assert_eq!(config.precision, 7);
        assert_eq!(config.ordering, OrderingMode::Alphabetical);
        assert_eq!(config.source_dir, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn conflicting_flags_fail_before_reading_config() {
        let cli = parse(&["/does/not/exist", "--config", "/does/not/exist.yml", "-a", "-s"]);

        let err = build_layered_config(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CombineError>(),
            Some(CombineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn empty_output_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().to_str().unwrap();
        let cli = parse(&[folder, "-o", ""]);

        assert!(build_layered_config(&cli).is_err());
    }
}
