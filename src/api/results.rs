//! Summary of a completed combine run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::config::OrderingMode;

/// One input block in the combined matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEntry {
    /// File name of the input
    pub name: String,
    /// Path the input was read from
    pub path: PathBuf,
    /// Dimension of the input matrix
    pub dimension: usize,
    /// First row and column of the block in the combined matrix
    pub offset: usize,
}

/// What a run combined and where it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombineReport {
    /// Ordering mode that was applied
    pub ordering: OrderingMode,
    /// Human-readable ordering description
    pub ordering_description: String,
    /// Inputs in block order
    pub blocks: Vec<BlockEntry>,
    /// Dimension of the combined square matrix
    pub dimension: usize,
    /// Decimal places written
    pub precision: usize,
    /// Output file path
    pub output_path: PathBuf,
}

impl CombineReport {
    /// Number of combined input files.
    pub fn files_combined(&self) -> usize {
        self.blocks.len()
    }

    /// Combined matrix shape as `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.dimension, self.dimension)
    }

    /// Input names in block order.
    pub fn block_names(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.name.as_str()).collect()
    }
}
