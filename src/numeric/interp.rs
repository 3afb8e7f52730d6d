use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpError {
    #[error("No sample points to interpolate from")]
    Empty,

    #[error("Sample points and values differ in length: {points} points, {values} values")]
    LengthMismatch { points: usize, values: usize },

    #[error("Sample points must be non-decreasing (violated at index {index})")]
    NotIncreasing { index: usize },
}

/// Piecewise-linear interpolation of `fp` sampled at `xp`, evaluated at each of `x`.
///
/// Values left of the first sample point take the first value; values right
/// of the last take the last value. A NaN in `x` yields NaN.
///
/// # Errors
///
/// Returns `InterpError::Empty` if `xp` is empty, `InterpError::LengthMismatch`
/// if `xp` and `fp` differ in length, or `InterpError::NotIncreasing` if `xp`
/// decreases anywhere (or contains NaN).
///
/// # Examples
///
/// ```
/// use sciutil::numeric::interp::interp;
///
/// let y = interp(&[-1.0, 0.5, 3.0], &[0.0, 1.0, 2.0], &[10.0, 20.0, 40.0]).unwrap();
/// assert_eq!(y, vec![10.0, 15.0, 40.0]);
/// ```
pub fn interp(x: &[f64], xp: &[f64], fp: &[f64]) -> Result<Vec<f64>, InterpError> {
    validate_samples(xp, fp)?;
    Ok(x.iter().map(|&v| interp_one(v, xp, fp)).collect())
}

fn validate_samples(xp: &[f64], fp: &[f64]) -> Result<(), InterpError> {
    if xp.is_empty() {
        return Err(InterpError::Empty);
    }
    if xp.len() != fp.len() {
        return Err(InterpError::LengthMismatch {
            points: xp.len(),
            values: fp.len(),
        });
    }
    // Negated comparison also catches NaN
    if let Some(i) = xp.windows(2).position(|w| !(w[1] >= w[0])) {
        return Err(InterpError::NotIncreasing { index: i + 1 });
    }
    Ok(())
}

fn interp_one(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }

    // Number of sample points at or left of x
    let right = xp.partition_point(|&p| p <= x);
    if right == 0 {
        return fp[0];
    }
    if right == xp.len() {
        return fp[xp.len() - 1];
    }

    let left = right - 1;
    let (x0, x1) = (xp[left], xp[right]);
    let slope = (fp[right] - fp[left]) / (x1 - x0);
    fp[left] + slope * (x - x0)
}
