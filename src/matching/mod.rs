//! Nearest-match lookup over numeric and timestamp series.
//!
//! This module provides:
//!
//! - [`locate`], [`nearest_index`], [`nearest_indices`]: linear-scan lookup
//! - [`SortedIndex`]: sort-once, binary-search lookup for large inputs
//! - [`Locator`]: picks a strategy from a [`LocatorConfig`]
//! - [`Distance`]: the closeness measure each value kind supplies
//!
//! ## Algorithm
//!
//! For each query value every reference entry is visited in index order and
//! the one with the smallest distance wins. On equal distances the **first**
//! index wins. [`SortedIndex`] preserves that tie-break by collapsing equal
//! values to the lowest original index.
//!
//! | Kind | Distance |
//! |------|----------|
//! | `f64`, `f32`, `i64` | absolute difference |
//! | `DateTime<Tz>`, `NaiveDateTime` | absolute elapsed seconds |
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use sciutil::matching::nearest_index;
//!
//! let t0 = Utc.with_ymd_and_hms(2019, 4, 7, 0, 0, 0).unwrap();
//! let reference = [t0, t0 + TimeDelta::seconds(60), t0 + TimeDelta::seconds(120)];
//!
//! let i = nearest_index(&reference, &(t0 + TimeDelta::seconds(50))).unwrap();
//! assert_eq!(i, 1);
//! ```

pub mod distance;
pub mod locator;
pub mod series;
pub mod sorted;

pub use distance::Distance;
pub use locator::{
    locate, nearest_index, nearest_indices, LocateError, Locator, LocatorConfig, ScanStrategy,
};
pub use series::locate_series;
pub use sorted::SortedIndex;
