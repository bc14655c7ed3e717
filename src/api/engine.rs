//! Combine engine: the pipeline entry point.

use ndarray::Array2;
use tracing::info;

use crate::api::results::{BlockEntry, CombineReport};
use crate::core::config::CombineConfig;
use crate::core::errors::Result;
use crate::core::pipeline::{block_diagonal, block_offsets, discover_edge_files, order_files};
use crate::io::edge_reader::load_matrix;
use crate::io::edge_writer::write_matrix;

/// Runs discovery, ordering, loading, assembly and serialization for one
/// configuration.
#[derive(Debug, Clone)]
pub struct CombineEngine {
    config: CombineConfig,
}

impl CombineEngine {
    /// Create an engine, rejecting invalid configuration before any I/O.
    pub fn new(config: CombineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration this engine runs with.
    pub fn config(&self) -> &CombineConfig {
        &self.config
    }

    /// Build the combined matrix without writing it.
    ///
    /// Returns the matrix together with a report whose `output_path` is where
    /// [`CombineEngine::run`] would write it.
    pub fn assemble(&self) -> Result<(Array2<f64>, CombineReport)> {
        let config = &self.config;
        let ordering = config.ordering;
        info!(
            "Combining edge files in {} ({})",
            config.source_dir.display(),
            ordering.description()
        );

        let discovered = discover_edge_files(&config.source_dir, &config.output_name)?;
        let ordered = order_files(discovered, ordering.policy())?;

        let matrices = ordered
            .iter()
            .map(|file| load_matrix(&file.path))
            .collect::<Result<Vec<_>>>()?;
        let combined = block_diagonal(&matrices);

        let dimensions: Vec<usize> = matrices.iter().map(|m| m.nrows()).collect();
        let blocks = ordered
            .into_iter()
            .zip(dimensions.iter().zip(block_offsets(&dimensions)))
            .map(|(file, (&dimension, offset))| BlockEntry {
                name: file.name,
                path: file.path,
                dimension,
                offset,
            })
            .collect();

        let report = CombineReport {
            ordering,
            ordering_description: ordering.description().to_string(),
            blocks,
            dimension: combined.nrows(),
            precision: config.precision,
            output_path: config.output_path(),
        };
        Ok((combined, report))
    }

    /// Combine and write the result, returning what was combined.
    pub fn run(&self) -> Result<CombineReport> {
        let (combined, report) = self.assemble()?;
        write_matrix(&combined, &report.output_path, report.precision)?;
        Ok(report)
    }
}

/// Combine the edge files described by `config` into one block-diagonal file.
pub fn combine_edge_folder(config: &CombineConfig) -> Result<CombineReport> {
    CombineEngine::new(config.clone())?.run()
}
