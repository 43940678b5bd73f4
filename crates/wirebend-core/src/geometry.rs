//! Geometry primitives
//!
//! Straight-line geometry shared by the SVG interpreter, the DXF codec and the
//! sequence generator. Angles follow the `atan2` convention in degrees.

use serde::{Deserialize, Serialize};

use crate::units::NEGLIGIBLE_DISTANCE;

/// A point in drawing coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Bearing from `self` towards `other` in degrees, in `(-180, 180]`.
    pub fn bearing_to(&self, other: &Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// True when the two points are closer than the negligible distance.
    pub fn approx_eq(&self, other: &Point) -> bool {
        self.distance_to(other) <= NEGLIGIBLE_DISTANCE
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn bearing(&self) -> f64 {
        self.start.bearing_to(&self.end)
    }

    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }
}

/// An ordered run of vertices, optionally closed back to the first vertex.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    pub vertices: Vec<Point>,
    pub closed: bool,
}

impl Polyline {
    pub fn new(vertices: Vec<Point>, closed: bool) -> Self {
        Self { vertices, closed }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Every edge in traversal order, including the implicit closing edge
    /// of a closed polyline with at least two vertices.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
        let open_edges = self
            .vertices
            .windows(2)
            .map(|pair| LineSegment::new(pair[0], pair[1]));
        let closing = match (self.closed, self.vertices.first(), self.vertices.last()) {
            (true, Some(first), Some(last)) if self.vertices.len() >= 2 => {
                Some(LineSegment::new(*last, *first))
            }
            _ => None,
        };
        open_edges.chain(closing)
    }

    /// Rotate the vertex cycle so that `index` becomes the first vertex.
    ///
    /// Only meaningful for closed polylines; the traced outline is unchanged.
    pub fn rotated(&self, index: usize) -> Polyline {
        if self.vertices.is_empty() {
            return self.clone();
        }
        let mut vertices = self.vertices.clone();
        vertices.rotate_left(index % self.vertices.len());
        Polyline::new(vertices, self.closed)
    }
}

/// A full circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Point on the circle at `degrees`, measured from the +X axis.
    pub fn point_at(&self, degrees: f64) -> Point {
        let radians = degrees.to_radians();
        Point::new(
            self.center.x + self.radius * radians.cos(),
            self.center.y + self.radius * radians.sin(),
        )
    }
}

/// Drawing entity exchanged between the interpreter, the codec and the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entity {
    Line(LineSegment),
    Polyline(Polyline),
    Circle(Circle),
}

impl Entity {
    /// Record tag used by the interchange format.
    pub fn type_name(&self) -> &'static str {
        match self {
            Entity::Line(_) => "LINE",
            Entity::Polyline(_) => "LWPOLYLINE",
            Entity::Circle(_) => "CIRCLE",
        }
    }

    /// Straight edges of the entity; circles have none.
    pub fn straight_edges(&self) -> Vec<LineSegment> {
        match self {
            Entity::Line(line) => vec![*line],
            Entity::Polyline(polyline) => polyline.edges().collect(),
            Entity::Circle(_) => Vec::new(),
        }
    }
}

impl From<LineSegment> for Entity {
    fn from(line: LineSegment) -> Self {
        Entity::Line(line)
    }
}

impl From<Polyline> for Entity {
    fn from(polyline: Polyline) -> Self {
        Entity::Polyline(polyline)
    }
}

impl From<Circle> for Entity {
    fn from(circle: Circle) -> Self {
        Entity::Circle(circle)
    }
}
