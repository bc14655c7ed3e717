//! Combine pipeline stages: discovery, ordering and assembly.
//!
//! Reading and writing edge files lives in [`crate::io`].

pub mod assembler;
pub mod discovery;
pub mod ordering;

pub use assembler::{block_diagonal, block_offsets};
pub use discovery::{discover_edge_files, EdgeFile};
pub use ordering::{order_files, SortKey};
