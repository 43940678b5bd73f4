//! # Action Sequence Generator
//!
//! Traces drawing entities with a simulated bending head and records the
//! advance, bend and cut instructions needed to reproduce them in wire.
//!
//! Every move is rotate-then-advance: the head turns towards the target,
//! then feeds the distance to it. Bends larger than the rotation limit are
//! split into equal steps when the limit is respected; otherwise they are
//! reported as angle violations.

use tracing::{debug, info, warn};
use wirebend_core::units::{normalize_degrees, round_angle, round_distance, CIRCLE_SEGMENTS};
use wirebend_core::{
    Action, AngleViolation, Circle, ConversionFailure, ConversionResult, Entity, LineSegment,
    MachineState, Point, NEGLIGIBLE_ANGLE, NEGLIGIBLE_DISTANCE, ROTATION_LIMIT_DEGREES,
};
use wirebend_designer::{SvgTrace, TraceItem};

use crate::options::ConversionOptions;
use crate::rotation::{divide_rotation, exceeds_limit};
use crate::start::{entity_edges, longest_segment, StartSegment};

/// Incremental builder of an action sequence.
///
/// Owns the machine state for a single conversion.
#[derive(Debug)]
pub struct SequenceBuilder {
    options: ConversionOptions,
    state: MachineState,
    actions: Vec<Action>,
    violations: Vec<AngleViolation>,
    advanced: bool,
    entity_index: Option<usize>,
    segment_index: Option<usize>,
    /// Start edge placed by [`place_at_midpoint`](Self::place_at_midpoint),
    /// until the next entity is traced.
    start: Option<StartSegment>,
    merge_advance: bool,
}

impl SequenceBuilder {
    pub fn new(options: ConversionOptions) -> Self {
        Self {
            options,
            state: MachineState::default(),
            actions: Vec::new(),
            violations: Vec::new(),
            advanced: false,
            entity_index: None,
            segment_index: None,
            start: None,
            merge_advance: false,
        }
    }

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Put the head at the midpoint of the start edge, facing along it.
    ///
    /// The first half of the edge is fed straight out. If the next traced
    /// entity begins with that edge, it continues from the midpoint.
    pub fn place_at_midpoint(&mut self, start: &StartSegment) {
        let segment = &start.segment;
        let half = segment.length() / 2.0;
        self.state = MachineState::new(segment.midpoint(), segment.bearing());
        if half > NEGLIGIBLE_DISTANCE {
            self.push_advance(half);
        }
        self.start = Some(*start);
        debug!(
            "Start placed at ({:.3}, {:.3}) heading {:.2}",
            self.state.position.x, self.state.position.y, self.state.heading
        );
    }

    /// Trace one entity; `index` identifies it in violation reports.
    pub fn trace_entity(&mut self, index: usize, entity: &Entity) {
        self.entity_index = Some(index);
        self.segment_index = None;
        let start = self.start.take();

        match entity {
            Entity::Circle(circle) => self.trace_circle(circle),
            Entity::Polyline(polyline) if polyline.vertices.len() == 1 => {
                self.move_to(polyline.vertices[0]);
            }
            Entity::Polyline(polyline) if polyline.is_empty() => {
                debug!("Skipping empty polyline #{}", index);
            }
            _ => {
                let edges = entity_edges(entity, self.options.close_polygons);
                let resume = start.is_some_and(|start| {
                    start.entity_index == index && edges.first() == Some(&start.segment)
                });
                self.trace_edges(&edges, resume);
            }
        }
    }

    /// Leave a marker for an element that could not be interpreted.
    pub fn mark_fault(&mut self, details: impl Into<String>) {
        self.actions.push(Action::PathError {
            details: details.into(),
        });
    }

    /// Terminate the sequence and apply the feasibility check.
    pub fn finish(mut self) -> ConversionResult {
        if self.options.always_cut || self.advanced {
            self.actions.push(Action::Cut);
        }

        if !self.violations.is_empty() {
            if self.options.ignore_angle_checks {
                warn!(
                    "Ignoring {} bend(s) beyond the {}° rotation limit",
                    self.violations.len(),
                    ROTATION_LIMIT_DEGREES
                );
            } else {
                let reason = format!(
                    "{} bend(s) exceed the {}° rotation limit",
                    self.violations.len(),
                    ROTATION_LIMIT_DEGREES
                );
                warn!("Conversion failed: {}", reason);
                return ConversionResult::Failure(ConversionFailure::new(reason, self.violations));
            }
        }

        info!("Generated {} action(s)", self.actions.len());
        ConversionResult::Success(self.actions)
    }

    /// Trace `edges` in order; with `resume` the head is already at the
    /// midpoint of the first edge and only its second half is fed.
    fn trace_edges(&mut self, edges: &[LineSegment], resume: bool) {
        let Some(first) = edges.first() else {
            return;
        };

        if resume {
            self.merge_advance = true;
        } else {
            self.move_to(first.start);
        }

        for (index, edge) in edges.iter().enumerate() {
            self.segment_index = Some(index);
            self.move_to(edge.end);
            self.merge_advance = false;
        }
    }

    fn trace_circle(&mut self, circle: &Circle) {
        self.move_to(circle.center);
        self.move_to(circle.point_at(0.0));

        let step = 360.0 / CIRCLE_SEGMENTS as f64;
        for index in 0..CIRCLE_SEGMENTS {
            self.segment_index = Some(index);
            self.move_to(circle.point_at(step * (index + 1) as f64));
        }

        self.state.position = circle.center;
    }

    /// Rotate towards `target`, then advance to it.
    fn move_to(&mut self, target: Point) {
        let distance = self.state.position.distance_to(&target);
        if distance <= NEGLIGIBLE_DISTANCE {
            return;
        }

        let bearing = self.state.position.bearing_to(&target);
        let mut delta = self.state.heading_delta_to(&target);
        if self.options.normalize_heading {
            delta = normalize_degrees(delta);
        }

        if delta.abs() > NEGLIGIBLE_ANGLE {
            let steps = if self.options.respect_rotation_limit {
                divide_rotation(delta)
            } else {
                vec![delta]
            };
            for step in steps {
                self.push_bend(step);
            }
        }

        self.push_advance(distance);
        self.state.move_to(target, bearing);
    }

    fn push_bend(&mut self, angle: f64) {
        if exceeds_limit(angle) {
            self.violations.push(AngleViolation {
                entity_index: self.entity_index,
                segment_index: self.segment_index,
                required_angle: round_angle(angle),
                allowed_angle: ROTATION_LIMIT_DEGREES,
            });
        }

        // a turn below the rounding step is still emitted, as a zero bend
        self.actions.push(Action::bend(round_angle(angle) + 0.0));
    }

    fn push_advance(&mut self, distance: f64) {
        self.advanced = true;
        if std::mem::take(&mut self.merge_advance) {
            if let Some(Action::Advance { distance: previous }) = self.actions.last_mut() {
                *previous = round_distance(*previous + distance);
                return;
            }
        }
        self.actions.push(Action::advance(round_distance(distance)));
    }
}

enum Step<'a> {
    Trace(&'a Entity),
    Fault(&'a str),
}

/// Turns entity lists into action sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionSequenceGenerator {
    options: ConversionOptions,
}

impl ActionSequenceGenerator {
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    pub fn generate(&self, entities: &[Entity]) -> ConversionResult {
        let steps: Vec<Step<'_>> = entities.iter().map(Step::Trace).collect();
        self.run(&steps)
    }

    /// Like [`generate`](Self::generate), with malformed elements kept in
    /// place as [`Action::PathError`] markers.
    pub fn generate_trace(&self, trace: &SvgTrace) -> ConversionResult {
        let steps: Vec<Step<'_>> = trace
            .items
            .iter()
            .map(|item| match item {
                TraceItem::Entity(entity) => Step::Trace(entity),
                TraceItem::Malformed { details, .. } => Step::Fault(details),
            })
            .collect();
        self.run(&steps)
    }

    fn run(&self, steps: &[Step<'_>]) -> ConversionResult {
        let entities = steps.iter().filter_map(|step| match step {
            Step::Trace(entity) => Some(*entity),
            Step::Fault(_) => None,
        });

        let mut builder = SequenceBuilder::new(self.options);
        let start = if self.options.start_at_longest_segment {
            longest_segment(entities, self.options.close_polygons)
        } else {
            None
        };
        if let Some(start) = &start {
            builder.place_at_midpoint(start);
        }

        let mut entity_index = 0;
        for step in steps {
            match step {
                Step::Fault(details) => builder.mark_fault(*details),
                Step::Trace(entity) => {
                    match start.as_ref().and_then(|s| self.start_rotation(s, entity_index, entity)) {
                        Some(rotated) => builder.trace_entity(entity_index, &rotated),
                        None => builder.trace_entity(entity_index, entity),
                    }
                    entity_index += 1;
                }
            }
        }

        builder.finish()
    }

    /// Closed polyline holding the start segment, rotated to begin with it.
    fn start_rotation(
        &self,
        start: &StartSegment,
        entity_index: usize,
        entity: &Entity,
    ) -> Option<Entity> {
        match entity {
            Entity::Polyline(polyline)
                if start.entity_index == entity_index
                    && polyline.closed
                    && self.options.close_polygons
                    && start.edge_index > 0 =>
            {
                Some(Entity::Polyline(polyline.rotated(start.edge_index)))
            }
            _ => None,
        }
    }
}
