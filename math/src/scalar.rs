use std::f64::consts::PI;


/// Tolerance of every kernel level scalar comparison.
pub const EPSILON: f64 = f64::EPSILON;

const DEG: f64 = 180.0 / PI;
const RAD: f64 = PI / 180.0;

/// `|a - b| < EPSILON`. Non-finite operands never compare equal.
#[inline]
pub fn equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[inline]
pub fn radians(deg: f64) -> f64 {
    deg * RAD
}

#[inline]
pub fn degrees(rad: f64) -> f64 {
    rad * DEG
}
