//! # sciutil
//!
//! A library for aligning scientific data series by nearest match, plus the
//! time and numeric helpers that usually surround that job.
//!
//! Instruments rarely sample on the same clock. To compare two data sets you
//! typically need, for every sample of one, the index of the closest sample
//! of the other. `sciutil` answers that question for numeric and timestamp
//! series with a simple, documented contract: absolute distance, first index
//! wins ties.
//!
//! ## Features
//!
//! - **Nearest-index lookup**: one value or many, numbers or timestamps
//! - **Sorted index**: O(log N) lookups for large series with identical results
//! - **Time conversions**: unix seconds, MATLAB datenum, mean instant, interpolation over time
//! - **Numeric helpers**: linear interpolation, quaternion rotation, cell-edge grids
//! - **Series files**: TSV/CSV readers with gzip support
//!
//! ## Example
//!
//! ```rust
//! use sciutil::{locate, Located, Query};
//!
//! let altitudes = [5.0, 3.0, 3.0, 8.0];
//!
//! // Ties resolve to the first index
//! assert_eq!(locate(&altitudes, &Query::One(3.0)).unwrap(), Located::One(1));
//!
//! // Sequence queries keep their order
//! let indices = locate(&altitudes, &Query::Many(vec![7.9, 4.2])).unwrap();
//! assert_eq!(indices, Located::Many(vec![3, 0]));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Value kinds, series, query and result shapes
//! - [`matching`]: Nearest-match locator and sorted index
//! - [`time`]: Time conversions, time-series helpers, stopwatch
//! - [`numeric`]: Interpolation, rotation, grids
//! - [`parsing`]: Series file readers
//! - [`utils`]: Validation limits and filesystem helpers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod numeric;
pub mod parsing;
pub mod time;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::query::{Located, Query};
pub use crate::core::types::{Series, Value, ValueKind};
pub use matching::{
    locate, locate_series, nearest_index, nearest_indices, Distance, LocateError, Locator,
    LocatorConfig, ScanStrategy, SortedIndex,
};
