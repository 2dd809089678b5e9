//! # chromatch-color
//!
//! Color space conversions and statistical color transfer.
//!
//! - **Conversion graph** - direct edges between Rgb, Lms, Lab and Hsl
//! - **Chains** - explicit multi-hop paths through the graph
//! - **Statistics** - per-channel mean and population standard deviation
//! - **Transfer** - remaps a target image onto source statistics
//! - **Merge** - complete Lab and Hsl pipelines over B,G,R byte buffers
//!
//! # Architecture
//!
//! ```text
//!               chromatch-color
//!                      |
//!        +-------------+-------------+
//!        |                           |
//!  chromatch-math              chromatch-core
//!  (Mat3, Vec3)       (PixelImage, BgrBuffer, codec)
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use chromatch_color::{run_pipeline, Pipeline};
//! use chromatch_core::BgrBuffer;
//!
//! let source = BgrBuffer::new(vec![10, 200, 30, 90, 40, 250], 2, 1).unwrap();
//! let target = BgrBuffer::new(vec![5, 5, 120, 240, 60, 0], 2, 1).unwrap();
//!
//! let out = run_pipeline(Pipeline::Hsl, &source, &target, None).unwrap();
//! assert_eq!(out.data().len(), 6);
//! ```
//!
//! # Dependencies
//!
//! - [`rayon`] - Parallel pixel maps and reductions
//! - [`serde`] - [`TransferOptions`] presets
//! - [`tracing`] - Pipeline diagnostics
//! - [`thiserror`] - [`ColorError`]
//!
//! # Used By
//!
//! - `chromatch-cli` - Command line front end
//! - `chromatch-bench` - Benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod chain;
pub mod convert;
mod error;
pub mod hsl;
pub mod matrices;
pub mod merge;
pub mod stats;
pub mod transfer;

pub use chain::Chain;
pub use convert::{convert, convert_chain, edge, has_edge, EdgeFn};
pub use error::{ColorError, ColorResult};
pub use merge::{merge, run_pipeline, MergeOutput, Pipeline, TransferOptions};
pub use stats::ChannelStats;
pub use transfer::{contrast_ratio, transfer};

/// Prelude for convenient imports.
///
/// ```rust
/// use chromatch_color::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        convert, convert_chain, merge, run_pipeline, transfer, Chain, ChannelStats, ColorError,
        ColorResult, MergeOutput, Pipeline, TransferOptions,
    };
    pub use chromatch_core::{BgrBuffer, ColorSpaceTag, PixelImage};
}
