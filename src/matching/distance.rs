use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone};

/// Closeness between two values of the same kind
///
/// Implementations must be symmetric and return a non-negative value, or NaN
/// when the distance is undefined (e.g. a NaN operand).
pub trait Distance {
    fn distance(&self, other: &Self) -> f64;
}

impl Distance for f64 {
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        (self - other).abs()
    }
}

impl Distance for f32 {
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        (f64::from(*self) - f64::from(*other)).abs()
    }
}

impl Distance for i64 {
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        {
            self.abs_diff(*other) as f64
        }
    }
}

impl<Tz: TimeZone> Distance for DateTime<Tz> {
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        elapsed_seconds(self.clone().signed_duration_since(other.clone()))
    }
}

impl Distance for NaiveDateTime {
    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        elapsed_seconds(self.signed_duration_since(*other))
    }
}

/// Absolute length of a time delta in seconds, including the sub-second part
#[must_use]
pub fn elapsed_seconds(delta: TimeDelta) -> f64 {
    let delta = delta.abs();
    #[allow(clippy::cast_precision_loss)]
    let whole = delta.num_seconds() as f64;
    whole + f64::from(delta.subsec_nanos()) * 1e-9
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_numeric_distance() {
        assert!((3.0_f64.distance(&5.5) - 2.5).abs() < 1e-12);
        assert!((5.5_f64.distance(&3.0) - 2.5).abs() < 1e-12);
        assert!(f64::NAN.distance(&1.0).is_nan());
        assert!((2.0_f32.distance(&-1.0) - 3.0).abs() < 1e-12);
        assert!((i64::MIN.distance(&0) - 9.223_372_036_854_776e18).abs() < 1.0);
    }

    #[test]
    fn test_timestamp_distance() {
        let t0 = Utc.with_ymd_and_hms(2019, 4, 7, 1, 6, 34).unwrap();
        let t1 = t0 + TimeDelta::milliseconds(90_500);
        assert!((t0.distance(&t1) - 90.5).abs() < 1e-9);
        assert!((t1.distance(&t0) - 90.5).abs() < 1e-9);
        assert_eq!(t0.distance(&t0), 0.0);

        let n0 = t0.naive_utc();
        let n1 = t1.naive_utc();
        assert!((n0.distance(&n1) - 90.5).abs() < 1e-9);
    }

    #[test]
    fn test_elapsed_seconds_negative() {
        let delta = TimeDelta::milliseconds(-1_250);
        assert!((elapsed_seconds(delta) - 1.25).abs() < 1e-12);
    }
}
