//! DXF text reader
//!
//! Only the ENTITIES section is read. Structural damage is tolerated: an
//! unterminated section or record is completed with whatever data it holds,
//! and missing coordinates fall back to zero.

use tracing::{debug, warn};
use wirebend_core::{Circle, Entity, LineSegment, Point, Polyline};

use super::writer::CLOSED_FLAG;

/// Group code / value pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DxfPair {
    pub code: i32,
    pub value: String,
}

impl DxfPair {
    pub fn new(code: i32, value: impl Into<String>) -> Self {
        Self {
            code,
            value: value.into(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.value.trim().parse().ok()
    }

    pub fn as_i32(&self) -> Option<i32> {
        self.value.trim().parse().ok()
    }
}

/// Split DXF text into group code / value pairs.
///
/// A code line that is not an integer is skipped on its own so the scan
/// resynchronises on the following line.
pub fn scan_pairs(text: &str) -> Vec<DxfPair> {
    let mut pairs = Vec::new();
    let mut lines = text.lines();

    while let Some(code_line) = lines.next() {
        let code = match code_line.trim().parse::<i32>() {
            Ok(code) => code,
            Err(_) => {
                if !code_line.trim().is_empty() {
                    warn!("Skipping non-numeric group code line {:?}", code_line.trim());
                }
                continue;
            }
        };
        let Some(value_line) = lines.next() else {
            warn!("Group code {} has no value line", code);
            break;
        };
        pairs.push(DxfPair::new(code, value_line.trim()));
    }

    pairs
}

/// Entities read from a DXF document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DxfDrawing {
    pub entities: Vec<Entity>,
    /// Record types that were present but not supported.
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Outside,
    PendingName,
    Entities,
    Other,
}

/// Coordinate slot that may be missing either axis.
#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    x: Option<f64>,
    y: Option<f64>,
}

impl Slot {
    fn resolve(self, what: &str) -> Point {
        if self.x.is_none() || self.y.is_none() {
            warn!("{} is missing a coordinate; defaulting to 0", what);
        }
        Point::new(self.x.unwrap_or(0.0), self.y.unwrap_or(0.0))
    }
}

/// Ordered vertex slots assembled from 10/20 codes.
#[derive(Debug, Clone, Default)]
struct VertexSlots {
    slots: Vec<Slot>,
}

impl VertexSlots {
    /// A repeated X overwrites the X of an incomplete slot.
    fn push_x(&mut self, x: f64) {
        match self.slots.last_mut() {
            Some(slot) if slot.x.is_none() || slot.y.is_none() => slot.x = Some(x),
            _ => self.slots.push(Slot {
                x: Some(x),
                y: None,
            }),
        }
    }

    fn push_y(&mut self, y: f64) {
        match self.slots.last_mut() {
            Some(slot) if slot.y.is_none() => slot.y = Some(y),
            _ => self.slots.push(Slot {
                x: None,
                y: Some(y),
            }),
        }
    }

    fn seal(&mut self) {
        self.slots.push(Slot::default());
    }

    fn into_points(self, what: &str) -> Vec<Point> {
        self.slots.into_iter().map(|slot| slot.resolve(what)).collect()
    }
}

#[derive(Debug)]
enum Record {
    Line { start: Slot, end: Slot },
    LwPolyline { vertices: VertexSlots, closed: bool, declared: Option<i32> },
    /// Heavy polyline; coordinates come from the following VERTEX records.
    Polyline { vertices: VertexSlots, closed: bool, in_vertex: bool },
    Circle { center: Slot, radius: Option<f64> },
}

impl Record {
    fn start(kind: &str) -> Option<Self> {
        match kind {
            "LINE" => Some(Record::Line {
                start: Slot::default(),
                end: Slot::default(),
            }),
            "LWPOLYLINE" => Some(Record::LwPolyline {
                vertices: VertexSlots::default(),
                closed: false,
                declared: None,
            }),
            "POLYLINE" => Some(Record::Polyline {
                vertices: VertexSlots::default(),
                closed: false,
                in_vertex: false,
            }),
            "CIRCLE" => Some(Record::Circle {
                center: Slot::default(),
                radius: None,
            }),
            _ => None,
        }
    }

    fn apply(&mut self, pair: &DxfPair) {
        // layer names are not used
        if pair.code == 8 {
            return;
        }

        let numeric = || {
            let value = pair.as_f64();
            if value.is_none() {
                warn!("Ignoring unparseable value {:?} for code {}", pair.value, pair.code);
            }
            value
        };

        match self {
            Record::Line { start, end } => match pair.code {
                10 => start.x = numeric().or(start.x),
                20 => start.y = numeric().or(start.y),
                11 => end.x = numeric().or(end.x),
                21 => end.y = numeric().or(end.y),
                code => debug!("Ignoring code {} in LINE", code),
            },
            Record::LwPolyline {
                vertices,
                closed,
                declared,
            } => match pair.code {
                10 => {
                    if let Some(x) = numeric() {
                        vertices.push_x(x);
                    }
                }
                20 => {
                    if let Some(y) = numeric() {
                        vertices.push_y(y);
                    }
                }
                70 => {
                    if let Some(flags) = pair.as_i32() {
                        *closed = flags & CLOSED_FLAG != 0;
                    } else {
                        warn!("Ignoring unparseable flags {:?}", pair.value);
                    }
                }
                90 => *declared = pair.as_i32(),
                code => debug!("Ignoring code {} in LWPOLYLINE", code),
            },
            Record::Polyline {
                vertices,
                closed,
                in_vertex,
            } => match (pair.code, *in_vertex) {
                (10, true) => {
                    if let Some(x) = numeric() {
                        vertices.push_x(x);
                    }
                }
                (20, true) => {
                    if let Some(y) = numeric() {
                        vertices.push_y(y);
                    }
                }
                (70, false) => {
                    if let Some(flags) = pair.as_i32() {
                        *closed = flags & CLOSED_FLAG != 0;
                    }
                }
                (code, _) => debug!("Ignoring code {} in POLYLINE", code),
            },
            Record::Circle { center, radius } => match pair.code {
                10 => center.x = numeric().or(center.x),
                20 => center.y = numeric().or(center.y),
                40 => *radius = numeric().or(*radius),
                code => debug!("Ignoring code {} in CIRCLE", code),
            },
        }
    }

    /// Open a VERTEX sub-record; false when this record takes no vertices.
    fn begin_vertex(&mut self) -> bool {
        match self {
            Record::Polyline {
                vertices,
                in_vertex,
                ..
            } => {
                vertices.seal();
                *in_vertex = true;
                true
            }
            _ => false,
        }
    }

    fn is_heavy_polyline(&self) -> bool {
        matches!(self, Record::Polyline { .. })
    }

    fn into_entity(self) -> Entity {
        match self {
            Record::Line { start, end } => Entity::Line(LineSegment::new(
                start.resolve("LINE start"),
                end.resolve("LINE end"),
            )),
            Record::LwPolyline {
                vertices,
                closed,
                declared,
            } => {
                let points = vertices.into_points("LWPOLYLINE vertex");
                if let Some(count) = declared {
                    if usize::try_from(count).ok() != Some(points.len()) {
                        debug!(
                            "LWPOLYLINE declares {} vertices but holds {}",
                            count,
                            points.len()
                        );
                    }
                }
                Entity::Polyline(Polyline::new(points, closed))
            }
            Record::Polyline {
                vertices, closed, ..
            } => Entity::Polyline(Polyline::new(vertices.into_points("VERTEX"), closed)),
            Record::Circle { center, radius } => {
                if radius.is_none() {
                    warn!("CIRCLE has no radius; defaulting to 0");
                }
                Entity::Circle(Circle::new(
                    center.resolve("CIRCLE center"),
                    radius.unwrap_or(0.0),
                ))
            }
        }
    }
}

/// Reads entities out of DXF text.
#[derive(Debug, Default)]
pub struct DxfReader {
    section: Option<Section>,
    current: Option<Record>,
    drawing: DxfDrawing,
}

impl DxfReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every supported entity in the ENTITIES section.
    pub fn read(mut self, text: &str) -> DxfDrawing {
        self.section = Some(Section::Outside);

        for pair in scan_pairs(text) {
            let section = self.section.unwrap_or(Section::Outside);
            if pair.code == 0 {
                match pair.value.as_str() {
                    "EOF" => {
                        self.flush();
                        self.section = None;
                        break;
                    }
                    "SECTION" => {
                        self.flush();
                        self.section = Some(Section::PendingName);
                        continue;
                    }
                    "ENDSEC" => {
                        self.flush();
                        self.section = Some(Section::Outside);
                        continue;
                    }
                    _ => {}
                }
            }

            match section {
                Section::PendingName => {
                    if pair.code == 2 {
                        let next = if pair.value == "ENTITIES" {
                            Section::Entities
                        } else {
                            Section::Other
                        };
                        self.section = Some(next);
                    }
                }
                Section::Entities => self.entities_pair(&pair),
                Section::Outside | Section::Other => {}
            }
        }

        if self.section.is_some_and(|s| s != Section::Outside) {
            warn!("DXF input ended inside an unterminated section");
        }
        self.flush();

        debug!(
            "Read {} DXF entities ({} skipped)",
            self.drawing.entities.len(),
            self.drawing.skipped.len()
        );
        self.drawing
    }

    fn entities_pair(&mut self, pair: &DxfPair) {
        if pair.code != 0 {
            if let Some(record) = self.current.as_mut() {
                record.apply(pair);
            }
            return;
        }

        let kind = pair.value.to_ascii_uppercase();
        match kind.as_str() {
            "VERTEX" => {
                let accepted = self
                    .current
                    .as_mut()
                    .is_some_and(|record| record.begin_vertex());
                if !accepted {
                    self.flush();
                    self.drawing.skipped.push(kind);
                }
            }
            "SEQEND" if self.current.as_ref().is_some_and(Record::is_heavy_polyline) => {
                self.flush();
            }
            _ => {
                self.flush();
                match Record::start(&kind) {
                    Some(record) => self.current = Some(record),
                    None => {
                        debug!("Skipping unsupported {} record", kind);
                        self.drawing.skipped.push(kind);
                    }
                }
            }
        }
    }

    fn flush(&mut self) {
        let Some(record) = self.current.take() else {
            return;
        };
        let entity = record.into_entity();
        match entity.validate() {
            Ok(()) => self.drawing.entities.push(entity),
            Err(e) => warn!("Dropping {}: {}", entity.type_name(), e),
        }
    }
}

/// Decode the entities of a DXF document.
pub fn decode_entities(text: &str) -> Vec<Entity> {
    DxfReader::new().read(text).entities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dxf(body: &[&str]) -> String {
        let mut lines = vec!["0", "SECTION", "2", "ENTITIES"];
        lines.extend_from_slice(body);
        lines.extend_from_slice(&["0", "ENDSEC", "0", "EOF"]);
        lines.join("\n")
    }

    #[test]
    fn test_scan_pairs_resyncs_on_bad_code() {
        let pairs = scan_pairs("0\nLINE\nbogus\n10\n1.5\n");
        assert_eq!(pairs, vec![DxfPair::new(0, "LINE"), DxfPair::new(10, "1.5")]);
    }

    #[test]
    fn test_reads_line() {
        let text = dxf(&["0", "LINE", "8", "0", "10", "1", "20", "2", "11", "3", "21", "4"]);
        assert_eq!(
            decode_entities(&text),
            vec![Entity::Line(LineSegment::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0)))]
        );
    }

    #[test]
    fn test_ignores_content_outside_entities() {
        let text = [
            "0", "SECTION", "2", "HEADER", "9", "$ACADVER", "1", "AC1015", "0", "ENDSEC",
            "0", "SECTION", "2", "BLOCKS", "0", "LINE", "10", "9", "20", "9", "0", "ENDSEC",
            "0", "SECTION", "2", "ENTITIES", "0", "CIRCLE", "10", "0", "20", "0", "40", "2",
            "0", "ENDSEC", "0", "EOF",
        ]
        .join("\n");
        assert_eq!(
            decode_entities(&text),
            vec![Entity::Circle(Circle::new(Point::ORIGIN, 2.0))]
        );
    }

    #[test]
    fn test_lwpolyline_closed_flag_and_y_only_slot() {
        let text = dxf(&[
            "0", "LWPOLYLINE", "90", "3", "70", "1", "10", "0", "20", "0", "20", "5", "10", "7",
        ]);
        assert_eq!(
            decode_entities(&text),
            vec![Entity::Polyline(Polyline::new(
                vec![Point::new(0.0, 0.0), Point::new(7.0, 5.0)],
                true
            ))]
        );
    }

    #[test]
    fn test_repeated_x_replaces_incomplete_vertex() {
        let text = dxf(&["0", "LWPOLYLINE", "70", "0", "10", "1", "10", "2", "20", "3"]);
        assert_eq!(
            decode_entities(&text),
            vec![Entity::Polyline(Polyline::new(vec![Point::new(2.0, 3.0)], false))]
        );
    }

    #[test]
    fn test_missing_axis_defaults_to_zero() {
        let text = dxf(&["0", "LWPOLYLINE", "70", "0", "10", "1", "20", "2", "20", "3"]);
        assert_eq!(
            decode_entities(&text),
            vec![Entity::Polyline(Polyline::new(
                vec![Point::new(1.0, 2.0), Point::new(0.0, 3.0)],
                false
            ))]
        );
    }

    #[test]
    fn test_heavy_polyline_with_vertices() {
        let text = dxf(&[
            "0", "POLYLINE", "10", "99", "20", "99", "70", "1",
            "0", "VERTEX", "10", "0", "20", "0", "70", "32",
            "0", "VERTEX", "10", "4", "20", "0",
            "0", "VERTEX", "10", "4", "20", "4",
            "0", "SEQEND",
            "0", "LINE", "10", "0", "20", "0", "11", "1", "21", "1",
        ]);
        let entities = decode_entities(&text);
        assert_eq!(entities.len(), 2);
        assert_eq!(
            entities[0],
            Entity::Polyline(Polyline::new(
                vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(4.0, 4.0)],
                true
            ))
        );
        assert!(matches!(entities[1], Entity::Line(_)));
    }

    #[test]
    fn test_unsupported_records_are_skipped() {
        let text = dxf(&[
            "0", "ARC", "10", "0", "20", "0", "40", "1", "50", "0", "51", "90",
            "0", "CIRCLE", "10", "1", "20", "1", "40", "1",
        ]);
        let drawing = DxfReader::new().read(&text);
        assert_eq!(drawing.skipped, vec!["ARC".to_string()]);
        assert_eq!(drawing.entities.len(), 1);
    }

    #[test]
    fn test_unparseable_values_are_ignored() {
        let text = dxf(&["0", "CIRCLE", "10", "abc", "10", "2", "20", "3", "40", "nope", "40", "1"]);
        assert_eq!(
            decode_entities(&text),
            vec![Entity::Circle(Circle::new(Point::new(2.0, 3.0), 1.0))]
        );
    }

    #[test]
    fn test_unterminated_section_is_completed() {
        let text = "0\nSECTION\n2\nENTITIES\n0\nLINE\n10\n0\n20\n0\n11\n5\n21\n0\n";
        assert_eq!(
            decode_entities(text),
            vec![Entity::Line(LineSegment::new(Point::ORIGIN, Point::new(5.0, 0.0)))]
        );
    }

    #[test]
    fn test_invalid_entity_is_dropped() {
        let text = dxf(&["0", "CIRCLE", "10", "0", "20", "0", "40", "-3"]);
        assert!(decode_entities(&text).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(decode_entities("").is_empty());
    }
}
