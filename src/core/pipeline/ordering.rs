//! Block ordering policies.
//!
//! The order produced here is used 1:1 as the block order of the combined
//! matrix, so every policy is total and deterministic for a given input set.

use std::cmp::Ordering;

use tracing::debug;

use super::discovery::EdgeFile;
use crate::core::config::OrderingPolicy;
use crate::core::errors::Result;
use crate::io::edge_reader::edge_size;

/// Sort key of one file under an ordering policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<'a> {
    /// File name
    pub name: &'a str,
    /// Matrix dimension, only consulted by size-based policies
    pub dimension: usize,
}

impl OrderingPolicy {
    /// Whether the policy needs matrix dimensions to compare files.
    pub fn needs_dimensions(self) -> bool {
        matches!(self, Self::SizeDescending)
    }

    /// Compare two files. Name order breaks every tie so the result never
    /// depends on the incoming sequence.
    pub fn compare(self, a: &SortKey<'_>, b: &SortKey<'_>) -> Ordering {
        match self {
            Self::NameOrder => a.name.cmp(b.name),
            Self::SizeDescending => b
                .dimension
                .cmp(&a.dimension)
                .then_with(|| a.name.cmp(b.name)),
        }
    }
}

/// Order discovered files under `policy`.
///
/// Size-based policies read each file's dimension with [`edge_size`], which
/// counts rows exactly the way the loader does.
pub fn order_files(files: Vec<EdgeFile>, policy: OrderingPolicy) -> Result<Vec<EdgeFile>> {
    let mut keyed = files
        .into_iter()
        .map(|file| {
            let dimension = if policy.needs_dimensions() {
                edge_size(&file.path)?
            } else {
                0
            };
            Ok((dimension, file))
        })
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|(da, a), (db, b)| {
        policy.compare(
            &SortKey {
                name: &a.name,
                dimension: *da,
            },
            &SortKey {
                name: &b.name,
                dimension: *db,
            },
        )
    });

    debug!(
        "Ordered {} file(s) under {:?}: {:?}",
        keyed.len(),
        policy,
        keyed.iter().map(|(_, f)| f.name.as_str()).collect::<Vec<_>>()
    );

    Ok(keyed.into_iter().map(|(_, file)| file).collect())
}
