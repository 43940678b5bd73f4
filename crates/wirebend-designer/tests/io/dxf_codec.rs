use proptest::prelude::*;
use wirebend_core::{Circle, Entity, LineSegment, Point, Polyline};
use wirebend_designer::dxf::{decode_entities, encode_entities, DxfReader};

fn coordinate() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e6..1.0e6f64,
        (-1000i32..1000).prop_map(f64::from),
        Just(0.1 + 0.2),
    ]
}

fn point() -> impl Strategy<Value = Point> {
    (coordinate(), coordinate()).prop_map(|(x, y)| Point::new(x, y))
}

fn entity() -> impl Strategy<Value = Entity> {
    prop_oneof![
        (point(), point()).prop_map(|(a, b)| Entity::Line(LineSegment::new(a, b))),
        (prop::collection::vec(point(), 0..8), any::<bool>())
            .prop_map(|(vertices, closed)| Entity::Polyline(Polyline::new(vertices, closed))),
        (point(), 0.0..1.0e5f64).prop_map(|(c, r)| Entity::Circle(Circle::new(c, r))),
    ]
}

proptest! {
    #[test]
    fn prop_round_trip_preserves_entities(entities in prop::collection::vec(entity(), 0..12)) {
        let text = encode_entities(&entities);
        prop_assert_eq!(decode_entities(&text), entities);
    }
}

#[test]
fn test_round_trip_mixed_drawing() {
    let entities = vec![
        Entity::Line(LineSegment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0))),
        Entity::Polyline(Polyline::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
            true,
        )),
        Entity::Polyline(Polyline::new(
            vec![Point::new(-1.5, 2.25), Point::new(3.0, -4.125), Point::new(0.0, 0.0)],
            false,
        )),
        Entity::Circle(Circle::new(Point::new(0.0, 0.0), 5.0)),
    ];
    assert_eq!(decode_entities(&encode_entities(&entities)), entities);
}

#[test]
fn test_reads_foreign_document_with_tables_and_handles() {
    let text = "  0\nSECTION\n  2\nHEADER\n  9\n$INSUNITS\n 70\n4\n  0\nENDSEC\n\
                  0\nSECTION\n  2\nTABLES\n  0\nTABLE\n  2\nLAYER\n  0\nENDTAB\n  0\nENDSEC\n\
                  0\nSECTION\n  2\nENTITIES\n\
                  0\nLINE\n  5\n2A\n100\nAcDbEntity\n  8\nCUT\n 10\n1.0\n 20\n2.0\n 30\n0.0\n 11\n4.0\n 21\n6.0\n 31\n0.0\n\
                  0\nTEXT\n  1\nlabel\n 10\n0\n 20\n0\n\
                  0\nENDSEC\n  0\nEOF\n";
    let drawing = DxfReader::new().read(text);
    assert_eq!(
        drawing.entities,
        vec![Entity::Line(LineSegment::new(Point::new(1.0, 2.0), Point::new(4.0, 6.0)))]
    );
    assert_eq!(drawing.skipped, vec!["TEXT".to_string()]);
}

#[test]
fn test_crlf_line_endings() {
    let text = encode_entities(&[Entity::Circle(Circle::new(Point::new(1.0, 1.0), 2.0))])
        .replace('\n', "\r\n");
    assert_eq!(
        decode_entities(&text),
        vec![Entity::Circle(Circle::new(Point::new(1.0, 1.0), 2.0))]
    );
}
