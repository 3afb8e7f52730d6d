//! Readers for reference and query series.
//!
//! This module provides:
//!
//! - **Delimited text files**: one value per line, taken from a chosen column
//!   of a tab- or comma-separated file, optionally gzip compressed
//! - **Single values**: numbers, RFC 3339 timestamps, naive date-times (UTC)
//!   and bare dates
//!
//! ## Example
//!
//! ```rust
//! use sciutil::parsing::series::{parse_series_text, SeriesFormat};
//! use sciutil::ValueKind;
//!
//! let text = "time\n2019-04-07T00:00:00Z\n2019-04-07T00:01:00Z\n";
//! let series = parse_series_text(text, &SeriesFormat::default()).unwrap();
//! assert_eq!(series.kind(), ValueKind::Timestamp);
//! assert_eq!(series.len(), 2);
//! ```
//!
//! ## Accepted value layouts
//!
//! | Layout | Example | Kind |
//! |--------|---------|------|
//! | number | `1554599194.25` | numeric |
//! | RFC 3339 | `2019-04-07T01:06:34+00:00` | timestamp |
//! | naive date-time | `2019-04-07 01:06:34.250` | timestamp (UTC) |
//! | date | `2019-04-07` | timestamp (midnight UTC) |

pub mod series;
pub mod value;

pub use series::ParseError;
