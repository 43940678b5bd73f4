//! SVG to entity interpreter
//!
//! Visits every drawing element of an [`SvgDocument`] in document order and
//! produces an [`SvgTrace`]. Elements whose path data cannot be parsed are
//! kept in the trace as [`TraceItem::Malformed`] so later stages can report
//! them in place.

use std::sync::Arc;

use tracing::{debug, info, warn};
use wirebend_core::{Circle, Entity, Point};

use super::document::{CircleElement, ElementVisitor, LineElement, RectElement, SvgDocument};
use super::flatten::{ChordFlattener, CurveFlattener};
use super::path::interpret_path;
use super::shapes::{line_path, parse_points, points_path, rect_path};
use crate::error::ImportResult;

/// One step of an interpreted drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceItem {
    Entity(Entity),
    /// An element whose geometry could not be parsed.
    Malformed {
        element: &'static str,
        details: String,
    },
}

/// Ordered interpreter output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SvgTrace {
    pub items: Vec<TraceItem>,
}

impl SvgTrace {
    /// Entities only, with malformed elements left out.
    pub fn entities(&self) -> Vec<Entity> {
        self.items
            .iter()
            .filter_map(|item| match item {
                TraceItem::Entity(entity) => Some(entity.clone()),
                TraceItem::Malformed { .. } => None,
            })
            .collect()
    }

    pub fn malformed_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, TraceItem::Malformed { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Converts SVG documents into drawing entities.
#[derive(Debug, Clone)]
pub struct SvgInterpreter {
    flattener: Arc<dyn CurveFlattener>,
}

impl Default for SvgInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgInterpreter {
    /// Interpreter using chord approximation for curves.
    pub fn new() -> Self {
        Self {
            flattener: Arc::new(ChordFlattener),
        }
    }

    pub fn with_flattener(flattener: Arc<dyn CurveFlattener>) -> Self {
        Self { flattener }
    }

    /// Parse and interpret SVG text.
    pub fn interpret_str(&self, svg: &str) -> ImportResult<SvgTrace> {
        let document = SvgDocument::parse(svg)?;
        Ok(self.interpret(&document))
    }

    pub fn interpret(&self, document: &SvgDocument) -> SvgTrace {
        let mut collector = TraceCollector {
            flattener: self.flattener.as_ref(),
            trace: SvgTrace::default(),
        };
        document.accept(&mut collector);

        let trace = collector.trace;
        info!(
            "Interpreted SVG: {} item(s), {} malformed",
            trace.items.len(),
            trace.malformed_count()
        );
        trace
    }
}

struct TraceCollector<'a> {
    flattener: &'a dyn CurveFlattener,
    trace: SvgTrace,
}

impl TraceCollector<'_> {
    fn trace_path_data(&mut self, element: &'static str, d: &str) {
        match interpret_path(d, self.flattener) {
            Ok(subpaths) => {
                self.trace.items.extend(
                    subpaths
                        .into_iter()
                        .map(|subpath| TraceItem::Entity(subpath.into_entity())),
                );
            }
            Err(e) => {
                warn!("Skipping <{}>: {}", element, e);
                self.trace.items.push(TraceItem::Malformed {
                    element,
                    details: e.to_string(),
                });
            }
        }
    }

    fn trace_points(&mut self, element: &'static str, points: &str, closed: bool) {
        let parsed = parse_points(points);
        match points_path(&parsed, closed) {
            Some(d) => self.trace_path_data(element, &d),
            None => debug!("Skipping <{}> with no usable points", element),
        }
    }
}

impl ElementVisitor for TraceCollector<'_> {
    fn visit_path(&mut self, d: &str) {
        self.trace_path_data("path", d);
    }

    fn visit_rect(&mut self, rect: &RectElement) {
        match rect_path(rect) {
            Some(d) => self.trace_path_data("rect", &d),
            None => debug!("Skipping <rect> without a positive size"),
        }
    }

    fn visit_circle(&mut self, circle: &CircleElement) {
        match circle.r.filter(|r| *r > 0.0) {
            Some(radius) => {
                let center = Point::new(circle.cx.unwrap_or(0.0), circle.cy.unwrap_or(0.0));
                self.trace
                    .items
                    .push(TraceItem::Entity(Entity::Circle(Circle::new(center, radius))));
            }
            None => debug!("Skipping <circle> without a positive radius"),
        }
    }

    fn visit_line(&mut self, line: &LineElement) {
        match line_path(line) {
            Some(d) => self.trace_path_data("line", &d),
            None => debug!("Skipping <line> with a missing endpoint"),
        }
    }

    fn visit_polygon(&mut self, points: &str) {
        self.trace_points("polygon", points, true);
    }

    fn visit_polyline(&mut self, points: &str) {
        self.trace_points("polyline", points, false);
    }
}
