//! Rotation limit handling

use wirebend_core::ROTATION_LIMIT_DEGREES;

/// Split `delta` into equal steps no larger than the rotation limit.
///
/// Returns `[delta]` when it is already within the limit, otherwise
/// `ceil(|delta| / limit)` steps carrying the sign of `delta`.
pub fn divide_rotation(delta: f64) -> Vec<f64> {
    let magnitude = delta.abs();
    if !magnitude.is_finite() || magnitude <= ROTATION_LIMIT_DEGREES {
        return vec![delta];
    }
    let steps = (magnitude / ROTATION_LIMIT_DEGREES).ceil() as usize;
    let step = delta / steps as f64;
    vec![step; steps]
}

/// True when a single bend of `angle` exceeds the rotation limit.
pub fn exceeds_limit(angle: f64) -> bool {
    angle.abs() > ROTATION_LIMIT_DEGREES
}
