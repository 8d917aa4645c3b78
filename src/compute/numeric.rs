//! Rounding and angle normalization helpers shared by the primitives.

use std::f64::consts::{PI, TAU};

/// Round `value` to `precision` decimal places.
///
/// ```
/// use geogrid::compute::numeric::round_to;
///
/// assert_eq!(round_to(1.23456, 2), 1.23);
/// assert_eq!(round_to(-0.005, 2), -0.01);
/// ```
pub fn round_to(value: f64, precision: u32) -> f64 {
    let ratio = 10f64.powi(precision as i32);
    (value * ratio).round() / ratio
}

/// Map a bearing in radians from `[-π, π]` (the range of `atan2`) into `[0, 2π)`.
#[inline]
pub fn normalize_bearing(theta: f64) -> f64 {
    (theta + TAU) % TAU
}

/// Map a longitude in radians into `[-π, π]`.
#[inline]
pub fn wrap_longitude_rad(lon: f64) -> f64 {
    (lon + 3.0 * PI).rem_euclid(TAU) - PI
}

/// Reduce an angle in radians modulo 2π into `[0, 2π)`.
#[inline]
pub fn reduce_angle(angle: f64) -> f64 {
    let reduced = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if reduced >= TAU { 0.0 } else { reduced }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 0), 3.0);
        assert_eq!(round_to(3.14159, 3), 3.142);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_normalize_bearing() {
        assert_eq!(normalize_bearing(0.0), 0.0);
        assert!((normalize_bearing(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
        assert!((normalize_bearing(PI) - PI).abs() < 1e-12);
        assert!(normalize_bearing(-1e-18) < TAU);
    }

    #[test]
    fn test_wrap_longitude() {
        for lon in [-720.0_f64, -190.0, -180.0, 0.0, 179.9, 180.0, 181.0, 540.0] {
            let wrapped = wrap_longitude_rad(lon.to_radians()).to_degrees();
            assert!((-180.0..=180.0).contains(&wrapped), "{} -> {}", lon, wrapped);
        }
        assert!((wrap_longitude_rad(181f64.to_radians()).to_degrees() - -179.0).abs() < 1e-9);
        assert!((wrap_longitude_rad(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_reduce_angle() {
        assert!((reduce_angle(3.0 * PI) - PI).abs() < 1e-12);
        assert!((reduce_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
        assert!(reduce_angle(-1e-300) < TAU);
    }
}
