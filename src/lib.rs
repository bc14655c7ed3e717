//! # Edgecombine-RS: Block-Diagonal Assembly of Edge Matrices
//!
//! Combines a folder of square adjacency matrices, one `.edge` text file per
//! graph, into a single block-diagonal matrix. Each input occupies its own
//! diagonal block and every off-block entry is zero.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     API Layer (engine)                   │
//! ├──────────────────────────────────────────────────────────┤
//! │  Core Pipeline           │  I/O                          │
//! │ • Discovery              │ • Edge reader (loader)        │
//! │ • Ordering policies      │ • Edge writer (serializer)    │
//! │ • Block-diagonal assembly│                               │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgecombine_rs::{combine_edge_folder, CombineConfig, OrderingMode};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CombineConfig::new("./graphs")
//!         .with_precision(8)
//!         .with_ordering(OrderingMode::Size);
//!
//!     let report = combine_edge_folder(&config)?;
//!     println!(
//!         "Combined {} files into {}",
//!         report.files_combined(),
//!         report.output_path.display()
//!     );
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core pipeline modules
pub mod core {
    //! Configuration, errors and the combine pipeline stages.

    pub mod config;
    pub mod errors;
    pub mod pipeline;
}

// Edge file reading and writing
pub mod io {
    //! Reading and writing `.edge` matrix files.

    pub mod edge_reader;
    pub mod edge_writer;
}

// Public API and engine interface
pub mod api {
    //! High-level API and engine interface.

    pub mod engine;
    pub mod results;
}

// Re-export primary types for convenience
pub use api::engine::{combine_edge_folder, CombineEngine};
pub use api::results::{BlockEntry, CombineReport};
pub use crate::core::config::{CombineConfig, OrderingMode, OrderingPolicy};
pub use crate::core::errors::{CombineError, Result};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
