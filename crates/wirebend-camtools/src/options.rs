use serde::{Deserialize, Serialize};

/// Switches controlling how entities are turned into actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Trace the closing edge of closed polylines back to the first vertex.
    pub close_polygons: bool,
    /// Begin at the midpoint of the longest straight segment.
    pub start_at_longest_segment: bool,
    /// Report infeasible bends instead of failing the conversion.
    ///
    /// Only bends over the rotation limit are infeasible, and those exist
    /// only when `respect_rotation_limit` is off.
    pub ignore_angle_checks: bool,
    /// Split bends larger than the rotation limit into equal steps.
    pub respect_rotation_limit: bool,
    /// Wrap heading deltas into [-180, 180] before emitting bends.
    pub normalize_heading: bool,
    /// Append a cut even when no material was advanced.
    pub always_cut: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            close_polygons: true,
            start_at_longest_segment: true,
            ignore_angle_checks: false,
            respect_rotation_limit: true,
            normalize_heading: true,
            always_cut: true,
        }
    }
}

impl ConversionOptions {
    /// Plain tracing: raw heading deltas, no start placement, no limit, and a
    /// cut only after material was advanced.
    pub fn direct_trace() -> Self {
        Self {
            close_polygons: true,
            start_at_longest_segment: false,
            ignore_angle_checks: true,
            respect_rotation_limit: false,
            normalize_heading: false,
            always_cut: false,
        }
    }
}
