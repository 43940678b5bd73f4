//! Numeric policy for emitted instructions
//!
//! Distances are reported in drawing units with three decimals, angles in
//! degrees with two decimals. Anything at or below the negligible thresholds
//! is never emitted.

/// Maximum heading change the bending head performs in a single bend, in degrees.
pub const ROTATION_LIMIT_DEGREES: f64 = 65.0;

/// Displacements at or below this length produce no advance.
pub const NEGLIGIBLE_DISTANCE: f64 = 0.001;

/// Heading changes at or below this magnitude produce no bend.
pub const NEGLIGIBLE_ANGLE: f64 = 0.001;

/// Number of equal chords used to trace a full circle.
pub const CIRCLE_SEGMENTS: usize = 24;

/// Round a distance to three decimals, half away from zero.
pub fn round_distance(value: f64) -> f64 {
    round_to(value, 3)
}

/// Round an angle to two decimals, half away from zero.
pub fn round_angle(value: f64) -> f64 {
    round_to(value, 2)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // keep -0.0 out of the output
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Wrap an angle in degrees into `[-180, 180]`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
