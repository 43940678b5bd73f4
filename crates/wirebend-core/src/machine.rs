//! Machine state tracked while a drawing is converted

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Position and heading of the bending head.
///
/// One state is owned by each conversion run. The heading is stored in
/// degrees and is not wrapped; wrapping happens on the deltas derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MachineState {
    pub position: Point,
    pub heading: f64,
}

impl MachineState {
    pub fn new(position: Point, heading: f64) -> Self {
        Self { position, heading }
    }

    /// Raw heading change needed to face `target`, before any wrapping.
    pub fn heading_delta_to(&self, target: &Point) -> f64 {
        self.position.bearing_to(target) - self.heading
    }

    /// Move to `target` while facing `heading`.
    pub fn move_to(&mut self, target: Point, heading: f64) {
        self.position = target;
        self.heading = heading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_origin() {
        let state = MachineState::default();
        assert_eq!(state.position, Point::ORIGIN);
        assert_eq!(state.heading, 0.0);
    }

    #[test]
    fn test_heading_delta() {
        let state = MachineState::new(Point::new(10.0, 10.0), 180.0);
        let delta = state.heading_delta_to(&Point::new(10.0, 0.0));
        assert_eq!(delta, -270.0);
    }
}
