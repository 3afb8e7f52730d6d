use chrono::{DateTime, TimeDelta, Utc};

use crate::numeric::interp::interp;
use crate::time::convert::TimeError;

/// Mean instant of `times`
///
/// `None` for an empty slice. Averaging is done on microsecond timestamps so
/// long series do not lose precision.
#[must_use]
pub fn mean_datetime(times: &[DateTime<Utc>]) -> Option<DateTime<Utc>> {
    match times {
        [] => None,
        [only] => Some(*only),
        _ => {
            let total: i128 = times.iter().map(|t| i128::from(t.timestamp_micros())).sum();
            let count = i128::try_from(times.len()).ok()?;
            let mean = i64::try_from(total.div_euclid(count)).ok()?;
            DateTime::from_timestamp_micros(mean)
        }
    }
}

/// Linearly interpolate `values`, sampled at `times`, onto `new_times`.
///
/// Time is measured in elapsed seconds; outside the sampled span the nearest
/// end value is used.
///
/// # Errors
///
/// Returns `TimeError::Interp` if `times` is empty, differs in length from
/// `values`, or is not in non-decreasing order.
pub fn interp_datetimes(
    new_times: &[DateTime<Utc>],
    times: &[DateTime<Utc>],
    values: &[f64],
) -> Result<Vec<f64>, TimeError> {
    let Some(origin) = times.first().copied() else {
        return Ok(interp(&[], &[], values)?);
    };

    let xp: Vec<f64> = times.iter().map(|t| seconds_since(origin, *t)).collect();
    let x: Vec<f64> = new_times.iter().map(|t| seconds_since(origin, *t)).collect();
    Ok(interp(&x, &xp, values)?)
}

/// Signed seconds from `origin` to `t`
fn seconds_since(origin: DateTime<Utc>, t: DateTime<Utc>) -> f64 {
    let delta: TimeDelta = t.signed_duration_since(origin);
    #[allow(clippy::cast_precision_loss)]
    let whole = delta.num_seconds() as f64;
    whole + f64::from(delta.subsec_nanos()) * 1e-9
}
