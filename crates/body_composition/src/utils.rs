//! Small numeric helpers shared across the engine.

/// Round to `digits` decimal places using scaled-integer arithmetic.
/// Half-way cases round away from zero; NaN and infinities pass through
/// unchanged so degenerate protocol inputs stay visible in the result.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
