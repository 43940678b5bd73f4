//! DXF text writer

use std::fmt::Display;

use wirebend_core::{Circle, Entity, LineSegment, Point, Polyline};

/// Layer every entity is written to.
pub const DEFAULT_LAYER: &str = "0";

/// Flag bit marking a closed LWPOLYLINE.
pub const CLOSED_FLAG: i32 = 1;

/// Accumulates group code / value lines.
#[derive(Debug, Default)]
pub struct DxfWriter {
    lines: Vec<String>,
}

impl DxfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_pair(&mut self, code: i32, value: impl Display) {
        self.lines.push(code.to_string());
        self.lines.push(value.to_string());
    }

    fn write_point(&mut self, x_code: i32, point: &Point) {
        self.write_pair(x_code, point.x);
        self.write_pair(x_code + 10, point.y);
    }

    pub fn begin_section(&mut self, name: &str) {
        self.write_pair(0, "SECTION");
        self.write_pair(2, name);
    }

    pub fn end_section(&mut self) {
        self.write_pair(0, "ENDSEC");
    }

    pub fn write_entity(&mut self, entity: &Entity) {
        match entity {
            Entity::Line(line) => self.write_line(line),
            Entity::Polyline(polyline) => self.write_lwpolyline(polyline),
            Entity::Circle(circle) => self.write_circle(circle),
        }
    }

    fn write_line(&mut self, line: &LineSegment) {
        self.write_pair(0, "LINE");
        self.write_pair(8, DEFAULT_LAYER);
        self.write_point(10, &line.start);
        self.write_point(11, &line.end);
    }

    fn write_lwpolyline(&mut self, polyline: &Polyline) {
        self.write_pair(0, "LWPOLYLINE");
        self.write_pair(8, DEFAULT_LAYER);
        self.write_pair(90, polyline.vertices.len());
        self.write_pair(70, if polyline.closed { CLOSED_FLAG } else { 0 });
        for vertex in &polyline.vertices {
            self.write_point(10, vertex);
        }
    }

    fn write_circle(&mut self, circle: &Circle) {
        self.write_pair(0, "CIRCLE");
        self.write_pair(8, DEFAULT_LAYER);
        self.write_point(10, &circle.center);
        self.write_pair(40, circle.radius);
    }

    /// Terminate the document and return its text.
    pub fn finish(mut self) -> String {
        self.write_pair(0, "EOF");
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Encode entities as a DXF document with an empty header.
pub fn encode_entities(entities: &[Entity]) -> String {
    let mut writer = DxfWriter::new();
    writer.begin_section("HEADER");
    writer.end_section();
    writer.begin_section("ENTITIES");
    for entity in entities {
        writer.write_entity(entity);
    }
    writer.end_section();
    writer.finish()
}
