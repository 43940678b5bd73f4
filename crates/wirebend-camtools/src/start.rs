//! Longest-segment start placement

use wirebend_core::{Entity, LineSegment, Polyline, NEGLIGIBLE_DISTANCE};

/// Segment the trace starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartSegment {
    /// Index of the owning entity.
    pub entity_index: usize,
    /// Index of the edge within the entity; the closing edge of a closed
    /// polyline comes last.
    pub edge_index: usize,
    pub segment: LineSegment,
}

/// Edges of a polyline that will actually be traced.
pub(crate) fn traced_edges(polyline: &Polyline, close_polygons: bool) -> Vec<LineSegment> {
    let edges = polyline.edges();
    if polyline.closed && !close_polygons {
        edges
            .take(polyline.vertices.len().saturating_sub(1))
            .collect()
    } else {
        edges.collect()
    }
}

/// Edges of an entity that will be traced as straight runs; circles have none.
pub(crate) fn entity_edges(entity: &Entity, close_polygons: bool) -> Vec<LineSegment> {
    match entity {
        Entity::Line(line) => vec![*line],
        Entity::Polyline(polyline) => traced_edges(polyline, close_polygons),
        Entity::Circle(_) => Vec::new(),
    }
}

/// Longest straight segment across `entities`; the first one wins on ties.
///
/// Returns `None` when no segment is longer than the negligible distance.
pub fn longest_segment<'a>(
    entities: impl IntoIterator<Item = &'a Entity>,
    close_polygons: bool,
) -> Option<StartSegment> {
    let mut best: Option<StartSegment> = None;
    let mut best_length = NEGLIGIBLE_DISTANCE;

    for (entity_index, entity) in entities.into_iter().enumerate() {
        for (edge_index, segment) in entity_edges(entity, close_polygons).into_iter().enumerate() {
            let length = segment.length();
            if length > best_length {
                best_length = length;
                best = Some(StartSegment {
                    entity_index,
                    edge_index,
                    segment,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use wirebend_core::{Circle, Point};

    fn rectangle() -> Polyline {
        Polyline::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(4.0, 10.0),
                Point::new(0.0, 10.0),
            ],
            true,
        )
    }

    #[test]
    fn test_picks_longest_edge() {
        let entities = vec![
            Entity::Line(LineSegment::new(Point::ORIGIN, Point::new(3.0, 0.0))),
            Entity::Polyline(rectangle()),
        ];
        let start = longest_segment(&entities, true).unwrap();
        assert_eq!(start.entity_index, 1);
        assert_eq!(start.edge_index, 1);
        assert_eq!(start.segment.length(), 10.0);
    }

    #[test]
    fn test_closing_edge_counts_only_when_closing() {
        let triangle = Polyline::new(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)],
            true,
        );
        let entities = vec![Entity::Polyline(triangle)];
        let start = longest_segment(&entities, true).unwrap();
        assert_eq!(start.edge_index, 2);

        let start = longest_segment(&entities, false).unwrap();
        assert_eq!(start.edge_index, 0);
    }

    #[test]
    fn test_first_maximum_wins() {
        let entities = vec![
            Entity::Line(LineSegment::new(Point::ORIGIN, Point::new(5.0, 0.0))),
            Entity::Line(LineSegment::new(Point::ORIGIN, Point::new(0.0, 5.0))),
        ];
        assert_eq!(longest_segment(&entities, true).unwrap().entity_index, 0);
    }

    #[test]
    fn test_circles_are_ignored() {
        let entities = vec![Entity::Circle(Circle::new(Point::ORIGIN, 50.0))];
        assert!(longest_segment(&entities, true).is_none());
    }
}
