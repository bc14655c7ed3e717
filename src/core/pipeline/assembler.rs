//! Block-diagonal assembly.

use ndarray::{s, Array2};

/// Combine square blocks into one block-diagonal matrix.
///
/// Block `k` lands at rows and columns `[offset_k, offset_k + dim_k)` where
/// `offset_k` is the sum of the preceding block dimensions. Every cell outside
/// the blocks is `0.0`. Values are copied, never recomputed.
pub fn block_diagonal(blocks: &[Array2<f64>]) -> Array2<f64> {
    let dimension: usize = blocks.iter().map(|b| b.nrows()).sum();
    let mut combined = Array2::zeros((dimension, dimension));

    let mut offset = 0;
    for block in blocks {
        let size = block.nrows();
        combined
            .slice_mut(s![offset..offset + size, offset..offset + size])
            .assign(block);
        offset += size;
    }

    combined
}

/// Starting offset of each block along the diagonal.
pub fn block_offsets(dimensions: &[usize]) -> Vec<usize> {
    dimensions
        .iter()
        .scan(0, |offset, &dimension| {
            let start = *offset;
            *offset += dimension;
            Some(start)
        })
        .collect()
}
