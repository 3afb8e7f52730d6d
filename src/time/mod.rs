//! Time conversions and time-series helpers.
//!
//! - [`convert`]: UTC datetime, unix seconds and MATLAB datenum conversions
//! - [`series`]: mean instant and linear interpolation over time
//! - [`stopwatch`]: runtime measurement reported through `tracing`
//!
//! All instants are `chrono::DateTime<Utc>`.
//!
//! ## Datenum
//!
//! MATLAB datenums count days from year 0 (day 1 is 0000-01-01), so the unix
//! epoch falls on datenum 719529.
//!
//! ```rust
//! use sciutil::time::{datenum_to_datetime, datetime_to_unix};
//!
//! let t = datenum_to_datetime(719_529.5).unwrap();
//! assert_eq!(datetime_to_unix(&t), 43_200);
//! ```

pub mod convert;
pub mod series;
pub mod stopwatch;

pub use convert::{
    datenum_to_datetime, datetime_to_datenum, datetime_to_unix, datetimes_to_unix,
    unix_to_datetime, unix_to_datetimes, TimeError, DATENUM_UNIX_EPOCH,
};
pub use series::{interp_datetimes, mean_datetime};
pub use stopwatch::Stopwatch;
