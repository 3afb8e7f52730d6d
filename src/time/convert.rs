use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::numeric::interp::InterpError;

/// MATLAB datenum of 1970-01-01T00:00:00Z
pub const DATENUM_UNIX_EPOCH: f64 = 719_529.0;

const SECONDS_PER_DAY: f64 = 86_400.0;
const MICROS_PER_SECOND: f64 = 1_000_000.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    #[error("Time value is not finite: {0}")]
    NonFinite(f64),

    #[error("Time value out of representable range: {0}")]
    OutOfRange(f64),

    #[error(transparent)]
    Interp(#[from] InterpError),
}

/// Whole unix seconds of `t`; the sub-second part is dropped
#[must_use]
pub fn datetime_to_unix(t: &DateTime<Utc>) -> i64 {
    t.timestamp()
}

#[must_use]
pub fn datetimes_to_unix(times: &[DateTime<Utc>]) -> Vec<i64> {
    times.iter().map(datetime_to_unix).collect()
}

/// UTC instant for a (possibly fractional) unix time, rounded to the microsecond
///
/// # Errors
///
/// Returns `TimeError::NonFinite` for NaN or infinite input and
/// `TimeError::OutOfRange` if the instant cannot be represented.
pub fn unix_to_datetime(seconds: f64) -> Result<DateTime<Utc>, TimeError> {
    if !seconds.is_finite() {
        return Err(TimeError::NonFinite(seconds));
    }

    let micros = (seconds * MICROS_PER_SECOND).round();
    #[allow(clippy::cast_precision_loss)]
    let limit = i64::MAX as f64;
    if micros.abs() >= limit {
        return Err(TimeError::OutOfRange(seconds));
    }

    #[allow(clippy::cast_possible_truncation)] // Range checked above
    let micros = micros as i64;
    DateTime::from_timestamp_micros(micros).ok_or(TimeError::OutOfRange(seconds))
}

/// Convert every unix time in `seconds`
///
/// # Errors
///
/// Fails on the first value [`unix_to_datetime`] rejects.
pub fn unix_to_datetimes(seconds: &[f64]) -> Result<Vec<DateTime<Utc>>, TimeError> {
    seconds.iter().map(|&s| unix_to_datetime(s)).collect()
}

/// UTC instant for a MATLAB datenum (days since year 0, fractional days kept)
///
/// # Errors
///
/// Returns `TimeError::NonFinite` or `TimeError::OutOfRange` as for
/// [`unix_to_datetime`].
pub fn datenum_to_datetime(datenum: f64) -> Result<DateTime<Utc>, TimeError> {
    if !datenum.is_finite() {
        return Err(TimeError::NonFinite(datenum));
    }
    unix_to_datetime((datenum - DATENUM_UNIX_EPOCH) * SECONDS_PER_DAY)
        .map_err(|_| TimeError::OutOfRange(datenum))
}

/// MATLAB datenum of `t`
#[must_use]
pub fn datetime_to_datenum(t: &DateTime<Utc>) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let micros = t.timestamp_micros() as f64;
    DATENUM_UNIX_EPOCH + micros / (SECONDS_PER_DAY * MICROS_PER_SECOND)
}
