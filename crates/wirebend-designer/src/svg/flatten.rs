//! Curve flattening strategies
//!
//! Curves in path data are reduced to straight runs before they reach the
//! sequence generator. The default strategy keeps only the chord to the
//! curve's end point.

use lyon::geom::{point, CubicBezierSegment};
use wirebend_core::Point;

/// Cubic Bézier curve in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCurve {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicCurve {
    /// Degree-elevate a quadratic curve.
    pub fn from_quadratic(from: Point, ctrl: Point, to: Point) -> Self {
        let two_thirds = 2.0 / 3.0;
        Self {
            from,
            ctrl1: Point::new(
                from.x + two_thirds * (ctrl.x - from.x),
                from.y + two_thirds * (ctrl.y - from.y),
            ),
            ctrl2: Point::new(
                to.x + two_thirds * (ctrl.x - to.x),
                to.y + two_thirds * (ctrl.y - to.y),
            ),
            to,
        }
    }
}

/// Turns a curve into a polyline.
pub trait CurveFlattener: std::fmt::Debug + Send + Sync {
    /// Points following `curve.from`, ending at `curve.to`.
    fn flatten(&self, curve: &CubicCurve) -> Vec<Point>;
}

/// Replaces the curve by the chord to its end point.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChordFlattener;

impl CurveFlattener for ChordFlattener {
    fn flatten(&self, curve: &CubicCurve) -> Vec<Point> {
        vec![curve.to]
    }
}

/// Subdivides the curve until every chord is within `tolerance` of it.
#[derive(Debug, Clone, Copy)]
pub struct SubdividingFlattener {
    pub tolerance: f64,
}

impl SubdividingFlattener {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Default for SubdividingFlattener {
    fn default() -> Self {
        Self { tolerance: 0.1 }
    }
}

impl CurveFlattener for SubdividingFlattener {
    fn flatten(&self, curve: &CubicCurve) -> Vec<Point> {
        if !(self.tolerance > 0.0) {
            return vec![curve.to];
        }

        let segment = CubicBezierSegment {
            from: point(curve.from.x, curve.from.y),
            ctrl1: point(curve.ctrl1.x, curve.ctrl1.y),
            ctrl2: point(curve.ctrl2.x, curve.ctrl2.y),
            to: point(curve.to.x, curve.to.y),
        };

        let mut points: Vec<Point> = segment
            .flattened(self.tolerance)
            .map(|p| Point::new(p.x, p.y))
            .collect();

        // the last flattened point is the curve end; pin it exactly
        match points.last_mut() {
            Some(last) => *last = curve.to,
            None => points.push(curve.to),
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter_arc() -> CubicCurve {
        // approximates a quarter circle of radius 10
        let k = 0.552_284_75 * 10.0;
        CubicCurve {
            from: Point::new(10.0, 0.0),
            ctrl1: Point::new(10.0, k),
            ctrl2: Point::new(k, 10.0),
            to: Point::new(0.0, 10.0),
        }
    }

    #[test]
    fn test_chord_flattener_keeps_end_point_only() {
        assert_eq!(ChordFlattener.flatten(&quarter_arc()), vec![Point::new(0.0, 10.0)]);
    }

    #[test]
    fn test_subdividing_flattener_stays_near_circle() {
        let points = SubdividingFlattener::new(0.05).flatten(&quarter_arc());
        assert!(points.len() > 2);
        assert_eq!(*points.last().unwrap(), Point::new(0.0, 10.0));
        for p in &points {
            let radius = p.x.hypot(p.y);
            assert!((radius - 10.0).abs() < 0.1, "radius {radius} off circle");
        }
    }

    #[test]
    fn test_non_positive_tolerance_falls_back_to_chord() {
        let points = SubdividingFlattener::new(0.0).flatten(&quarter_arc());
        assert_eq!(points, vec![Point::new(0.0, 10.0)]);
    }

    #[test]
    fn test_quadratic_elevation_keeps_endpoints() {
        let cubic = CubicCurve::from_quadratic(
            Point::new(0.0, 0.0),
            Point::new(3.0, 3.0),
            Point::new(6.0, 0.0),
        );
        assert_eq!(cubic.from, Point::new(0.0, 0.0));
        assert_eq!(cubic.to, Point::new(6.0, 0.0));
        assert!((cubic.ctrl1.x - 2.0).abs() < 1e-12);
        assert!((cubic.ctrl1.y - 2.0).abs() < 1e-12);
        assert!((cubic.ctrl2.x - 4.0).abs() < 1e-12);
    }
}
