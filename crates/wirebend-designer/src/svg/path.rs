//! Path data interpreter
//!
//! Walks the commands of an SVG `d` attribute and collects straight-line
//! subpaths in absolute coordinates.

use svgtypes::{PathParser, PathSegment};
use tracing::debug;
use wirebend_core::{Entity, LineSegment, Point, Polyline};

use super::flatten::{CubicCurve, CurveFlattener};
use crate::error::{ImportError, ImportResult};

/// Straight-line subpath produced from path data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Subpath {
    pub vertices: Vec<Point>,
    pub closed: bool,
}

impl Subpath {
    fn starting_at(point: Point) -> Self {
        Self {
            vertices: vec![point],
            closed: false,
        }
    }

    fn push(&mut self, point: Point) {
        if self.vertices.last() != Some(&point) {
            self.vertices.push(point);
        }
    }

    fn close(&mut self) {
        if self.vertices.len() > 1 && self.vertices.first() == self.vertices.last() {
            self.vertices.pop();
        }
        self.closed = true;
    }

    /// An open two-vertex subpath is a line; anything else is a polyline.
    pub fn into_entity(self) -> Entity {
        if !self.closed && self.vertices.len() == 2 {
            Entity::Line(LineSegment::new(self.vertices[0], self.vertices[1]))
        } else {
            Entity::Polyline(Polyline::new(self.vertices, self.closed))
        }
    }
}

/// Interpret path data into subpaths.
///
/// Parsing is all-or-nothing: a syntax error anywhere in `d` fails the
/// whole path.
pub fn interpret_path(d: &str, flattener: &dyn CurveFlattener) -> ImportResult<Vec<Subpath>> {
    let segments = PathParser::from(d)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ImportError::MalformedPath(format!("{e} in \"{}\"", d.trim())))?;

    let mut builder = PathBuilder::new(flattener);
    for segment in segments {
        builder.apply(segment);
    }
    let subpaths = builder.finish();
    debug!("Path yielded {} subpath(s)", subpaths.len());
    Ok(subpaths)
}

struct PathBuilder<'a> {
    flattener: &'a dyn CurveFlattener,
    cursor: Point,
    subpath_start: Point,
    current: Option<Subpath>,
    done: Vec<Subpath>,
    // reflection sources for S and T
    last_cubic_ctrl: Option<Point>,
    last_quad_ctrl: Option<Point>,
}

impl<'a> PathBuilder<'a> {
    fn new(flattener: &'a dyn CurveFlattener) -> Self {
        Self {
            flattener,
            cursor: Point::ORIGIN,
            subpath_start: Point::ORIGIN,
            current: None,
            done: Vec::new(),
            last_cubic_ctrl: None,
            last_quad_ctrl: None,
        }
    }

    fn absolute(&self, abs: bool, x: f64, y: f64) -> Point {
        if abs {
            Point::new(x, y)
        } else {
            Point::new(self.cursor.x + x, self.cursor.y + y)
        }
    }

    fn reflect(&self, ctrl: Option<Point>) -> Point {
        match ctrl {
            Some(c) => Point::new(2.0 * self.cursor.x - c.x, 2.0 * self.cursor.y - c.y),
            None => self.cursor,
        }
    }

    fn flush(&mut self) {
        if let Some(subpath) = self.current.take() {
            self.done.push(subpath);
        }
    }

    fn line_to(&mut self, target: Point) {
        let start = self.cursor;
        self.current
            .get_or_insert_with(|| Subpath::starting_at(start))
            .push(target);
        self.cursor = target;
    }

    fn curve_to(&mut self, curve: CubicCurve) {
        let start = self.cursor;
        let points = self.flattener.flatten(&curve);
        let subpath = self
            .current
            .get_or_insert_with(|| Subpath::starting_at(start));
        for point in points {
            subpath.push(point);
        }
        self.cursor = curve.to;
    }

    fn apply(&mut self, segment: PathSegment) {
        let mut cubic_ctrl = None;
        let mut quad_ctrl = None;

        match segment {
            PathSegment::MoveTo { abs, x, y } => {
                let target = self.absolute(abs, x, y);
                self.flush();
                self.current = Some(Subpath::starting_at(target));
                self.subpath_start = target;
                self.cursor = target;
            }
            PathSegment::LineTo { abs, x, y } => {
                let target = self.absolute(abs, x, y);
                self.line_to(target);
            }
            PathSegment::HorizontalLineTo { abs, x } => {
                let x = if abs { x } else { self.cursor.x + x };
                self.line_to(Point::new(x, self.cursor.y));
            }
            PathSegment::VerticalLineTo { abs, y } => {
                let y = if abs { y } else { self.cursor.y + y };
                self.line_to(Point::new(self.cursor.x, y));
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let ctrl1 = self.absolute(abs, x1, y1);
                let ctrl2 = self.absolute(abs, x2, y2);
                let to = self.absolute(abs, x, y);
                self.curve_to(CubicCurve {
                    from: self.cursor,
                    ctrl1,
                    ctrl2,
                    to,
                });
                cubic_ctrl = Some(ctrl2);
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let ctrl1 = self.reflect(self.last_cubic_ctrl);
                let ctrl2 = self.absolute(abs, x2, y2);
                let to = self.absolute(abs, x, y);
                self.curve_to(CubicCurve {
                    from: self.cursor,
                    ctrl1,
                    ctrl2,
                    to,
                });
                cubic_ctrl = Some(ctrl2);
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                let ctrl = self.absolute(abs, x1, y1);
                let to = self.absolute(abs, x, y);
                self.curve_to(CubicCurve::from_quadratic(self.cursor, ctrl, to));
                quad_ctrl = Some(ctrl);
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                let ctrl = self.reflect(self.last_quad_ctrl);
                let to = self.absolute(abs, x, y);
                self.curve_to(CubicCurve::from_quadratic(self.cursor, ctrl, to));
                quad_ctrl = Some(ctrl);
            }
            PathSegment::EllipticalArc { abs, x, y, .. } => {
                let target = self.absolute(abs, x, y);
                self.line_to(target);
            }
            PathSegment::ClosePath { .. } => {
                if let Some(mut subpath) = self.current.take() {
                    subpath.close();
                    self.done.push(subpath);
                }
                self.cursor = self.subpath_start;
            }
        }

        self.last_cubic_ctrl = cubic_ctrl;
        self.last_quad_ctrl = quad_ctrl;
    }

    fn finish(mut self) -> Vec<Subpath> {
        self.flush();
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::flatten::{ChordFlattener, SubdividingFlattener};

    fn run(d: &str) -> Vec<Subpath> {
        interpret_path(d, &ChordFlattener).unwrap()
    }

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_absolute_lines() {
        let subpaths = run("M 0 0 L 10 0 L 10 10");
        assert_eq!(subpaths.len(), 1);
        assert_eq!(subpaths[0].vertices, pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]));
        assert!(!subpaths[0].closed);
    }

    #[test]
    fn test_relative_and_axis_commands() {
        let subpaths = run("m 1 1 l 2 0 v 3 h -2 V 1");
        assert_eq!(
            subpaths[0].vertices,
            pts(&[(1.0, 1.0), (3.0, 1.0), (3.0, 4.0), (1.0, 4.0), (1.0, 1.0)])
        );
    }

    #[test]
    fn test_close_drops_repeated_start() {
        let subpaths = run("M0 0 L10 0 L10 10 L0 10 L0 0 Z");
        assert_eq!(subpaths[0].vertices.len(), 4);
        assert!(subpaths[0].closed);
    }

    #[test]
    fn test_move_starts_new_subpath() {
        let subpaths = run("M0 0 L1 0 M5 5 L6 5 L6 6");
        assert_eq!(subpaths.len(), 2);
        assert_eq!(subpaths[1].vertices[0], Point::new(5.0, 5.0));
    }

    #[test]
    fn test_drawing_after_close_restarts_at_subpath_start() {
        let subpaths = run("M0 0 L4 0 L4 4 Z L 0 8");
        assert_eq!(subpaths.len(), 2);
        assert_eq!(subpaths[1].vertices, pts(&[(0.0, 0.0), (0.0, 8.0)]));
    }

    #[test]
    fn test_duplicate_vertices_are_dropped() {
        let subpaths = run("M0 0 L0 0 L5 0 L5 0");
        assert_eq!(subpaths[0].vertices, pts(&[(0.0, 0.0), (5.0, 0.0)]));
    }

    #[test]
    fn test_curves_are_chord_approximated() {
        let subpaths = run("M0 0 C 0 5 5 10 10 10 S 20 5 20 0 Q 25 -5 30 0 T 40 0 A 5 5 0 0 1 50 0");
        assert_eq!(
            subpaths[0].vertices,
            pts(&[
                (0.0, 0.0),
                (10.0, 10.0),
                (20.0, 0.0),
                (30.0, 0.0),
                (40.0, 0.0),
                (50.0, 0.0)
            ])
        );
    }

    #[test]
    fn test_subdividing_flattener_adds_vertices() {
        let subpaths = interpret_path("M0 0 C 0 10 10 10 10 0", &SubdividingFlattener::new(0.01)).unwrap();
        assert!(subpaths[0].vertices.len() > 3);
        assert_eq!(*subpaths[0].vertices.last().unwrap(), Point::new(10.0, 0.0));
    }

    #[test]
    fn test_malformed_path_fails_whole_path() {
        let err = interpret_path("M0 0 L10 0 L oops", &ChordFlattener).unwrap_err();
        assert!(matches!(err, ImportError::MalformedPath(_)));
    }

    #[test]
    fn test_into_entity() {
        let line = Subpath {
            vertices: pts(&[(0.0, 0.0), (1.0, 0.0)]),
            closed: false,
        };
        assert!(matches!(line.into_entity(), Entity::Line(_)));

        let lone = Subpath {
            vertices: pts(&[(3.0, 3.0)]),
            closed: false,
        };
        match lone.into_entity() {
            Entity::Polyline(p) => assert_eq!(p.vertices.len(), 1),
            other => panic!("unexpected {other:?}"),
        }

        let closed_pair = Subpath {
            vertices: pts(&[(0.0, 0.0), (1.0, 0.0)]),
            closed: true,
        };
        assert!(matches!(closed_pair.into_entity(), Entity::Polyline(p) if p.closed));
    }

    #[test]
    fn test_empty_path_yields_nothing() {
        assert!(run("").is_empty());
    }
}
