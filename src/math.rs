//! Scalar helpers

/// Real roots of `a x^2 + b x + c = 0`
///
/// Roots are computed with the numerically stable pair of formulas
/// (the second root uses `2c / (-b -+ d)`) so the smaller root keeps its
/// precision when `b^2 >> 4ac`.
///
/// - `a == 0` reduces to the linear equation, both roots are `-c / b`
/// - `a == 0 && b == 0` has no solution and returns `None`
/// - a negative discriminant returns `None`
///
///     use sraster::quadratic;
///
///     let (x0, x1) = quadratic(1.0, -3.0, 2.0).unwrap();
///     assert_eq!((x0.min(x1), x0.max(x1)), (1.0, 2.0));
///     assert_eq!(quadratic(0.0, 2.0, -4.0), Some((2.0, 2.0)));
///     assert_eq!(quadratic(0.0, 0.0, 1.0), None);
///     assert_eq!(quadratic(1.0, 0.0, 1.0), None);
///
pub fn quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a == 0.0 {
        if b == 0.0 {
            return None;
        }
        let x = -c / b;
        return Some((x, x));
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let d = disc.sqrt();
    // -b -+ d is only zero when b == 0 and c == 0
    if b >= 0.0 {
        let q = -b - d;
        if q == 0.0 {
            return Some((0.0, 0.0));
        }
        Some((q / (2.0 * a), (2.0 * c) / q))
    } else {
        let q = -b + d;
        Some(((2.0 * c) / q, q / (2.0 * a)))
    }
}

/// Convert an f64 [0,1] component to a u8 [0,255] component
///
/// Values are clamped and gamma encoded with an exponent of `1/2.2`
pub fn gamma_u8(v: f64) -> u8 {
    let v = if v.is_nan() { 0.0 } else { v.max(0.0).min(1.0) };
    (v.powf(1.0 / 2.2) * 255.0) as u8
}
