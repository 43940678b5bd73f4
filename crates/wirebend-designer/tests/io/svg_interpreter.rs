use std::sync::Arc;

use wirebend_core::{Circle, Entity, LineSegment, Point, Polyline};
use wirebend_designer::svg::{SubdividingFlattener, SvgInterpreter, TraceItem};
use wirebend_designer::ImportError;

const DRAWING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape" width="100mm" height="100mm">
  <defs/>
  <g inkscape:label="Layer 1">
    <line x1="0" y1="0" x2="10" y2="0"/>
    <g transform="translate(5,5)">
      <rect x="0" y="0" width="10" height="10"/>
    </g>
    <circle cx="50" cy="50" r="5"/>
    <path d="M 0,20 L 10,20 L 10"/>
    <polyline points="0,30 10,30 10,40"/>
  </g>
</svg>"#;

#[test]
fn test_document_order_is_preserved() {
    let trace = SvgInterpreter::new().interpret_str(DRAWING).unwrap();
    assert_eq!(trace.items.len(), 5);
    assert_eq!(
        trace.items[0],
        TraceItem::Entity(Entity::Line(LineSegment::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0)
        )))
    );
    assert!(matches!(&trace.items[1], TraceItem::Entity(Entity::Polyline(p)) if p.closed));
    assert_eq!(
        trace.items[2],
        TraceItem::Entity(Entity::Circle(Circle::new(Point::new(50.0, 50.0), 5.0)))
    );
    assert!(matches!(&trace.items[3], TraceItem::Malformed { element: "path", .. }));
    assert_eq!(
        trace.items[4],
        TraceItem::Entity(Entity::Polyline(Polyline::new(
            vec![Point::new(0.0, 30.0), Point::new(10.0, 30.0), Point::new(10.0, 40.0)],
            false
        )))
    );
}

#[test]
fn test_subdividing_interpreter_refines_curves() {
    let svg = r#"<svg><path d="M0 0 Q 5 10 10 0"/></svg>"#;
    let chord = SvgInterpreter::new().interpret_str(svg).unwrap();
    assert_eq!(
        chord.entities(),
        vec![Entity::Line(LineSegment::new(Point::ORIGIN, Point::new(10.0, 0.0)))]
    );

    let fine = SvgInterpreter::with_flattener(Arc::new(SubdividingFlattener::new(0.01)))
        .interpret_str(svg)
        .unwrap();
    match &fine.entities()[0] {
        Entity::Polyline(p) => {
            assert!(p.vertices.len() > 4);
            assert!(p.vertices.iter().any(|v| v.y > 4.0));
        }
        other => panic!("expected a polyline, got {other:?}"),
    }
}

#[test]
fn test_empty_svg_yields_empty_trace() {
    let trace = SvgInterpreter::new().interpret_str("<svg/>").unwrap();
    assert!(trace.is_empty());
}

#[test]
fn test_not_svg_is_rejected() {
    assert!(matches!(
        SvgInterpreter::new().interpret_str("<svg"),
        Err(ImportError::Xml(_))
    ));
    assert!(matches!(
        SvgInterpreter::new().interpret_str("<document/>"),
        Err(ImportError::InvalidSvg(_))
    ));
}
