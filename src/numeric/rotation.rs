/// Rotate `v` by the unit quaternion `q = [a, b, c, d]` (scalar part first).
///
/// Computes `q * v * q⁻¹` in expanded form; `q` is assumed to be normalised.
#[must_use]
pub fn rotate_by_quaternion(q: [f64; 4], v: [f64; 3]) -> [f64; 3] {
    let [a, b, c, d] = q;
    let [v1, v2, v3] = v;

    let ab = a * b;
    let ac = a * c;
    let ad = a * d;
    let bb = -b * b;
    let bc = b * c;
    let bd = b * d;
    let cc = -c * c;
    let cd = c * d;
    let dd = -d * d;

    [
        2.0 * ((cc + dd) * v1 + (bc - ad) * v2 + (ac + bd) * v3) + v1,
        2.0 * ((ad + bc) * v1 + (bb + dd) * v2 + (cd - ab) * v3) + v2,
        2.0 * ((bd - ac) * v1 + (ab + cd) * v2 + (bb + cc) * v3) + v3,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: [f64; 3], expected: [f64; 3]) {
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_identity() {
        let v = [1.0, -2.0, 3.5];
        assert_close(rotate_by_quaternion([1.0, 0.0, 0.0, 0.0], v), v);
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let half = std::f64::consts::FRAC_PI_4;
        let q = [half.cos(), 0.0, 0.0, half.sin()];
        assert_close(rotate_by_quaternion(q, [1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
        assert_close(rotate_by_quaternion(q, [0.0, 0.0, 2.0]), [0.0, 0.0, 2.0]);
    }

    #[test]
    fn test_half_turn_about_x() {
        let q = [0.0, 1.0, 0.0, 0.0];
        assert_close(rotate_by_quaternion(q, [1.0, 2.0, 3.0]), [1.0, -2.0, -3.0]);
    }
}
