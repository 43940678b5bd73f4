//! SVG element tree
//!
//! The XML document is reduced to a closed set of drawing elements. Anything
//! that is not one of the supported primitives is kept as a transparent
//! group so that nested content is still reached.

use std::str::FromStr;

use tracing::debug;

use crate::error::{ImportError, ImportResult};

/// `<rect>` attributes in user units.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RectElement {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// `<circle>` attributes in user units.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CircleElement {
    pub cx: Option<f64>,
    pub cy: Option<f64>,
    pub r: Option<f64>,
}

/// `<line>` attributes in user units.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineElement {
    pub x1: Option<f64>,
    pub y1: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
}

/// Drawing element of an SVG document.
#[derive(Debug, Clone, PartialEq)]
pub enum SvgElement {
    Path { d: String },
    Rect(RectElement),
    Circle(CircleElement),
    Line(LineElement),
    Polygon { points: String },
    Polyline { points: String },
    Group(Vec<SvgElement>),
}

/// Visitor over [`SvgElement`] variants.
///
/// Groups are entered transparently by default, depth first, in document order.
pub trait ElementVisitor {
    fn visit_path(&mut self, d: &str);
    fn visit_rect(&mut self, rect: &RectElement);
    fn visit_circle(&mut self, circle: &CircleElement);
    fn visit_line(&mut self, line: &LineElement);
    fn visit_polygon(&mut self, points: &str);
    fn visit_polyline(&mut self, points: &str);

    fn visit_group(&mut self, children: &[SvgElement]) {
        for child in children {
            child.accept(self);
        }
    }
}

impl SvgElement {
    pub fn accept<V: ElementVisitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            SvgElement::Path { d } => visitor.visit_path(d),
            SvgElement::Rect(rect) => visitor.visit_rect(rect),
            SvgElement::Circle(circle) => visitor.visit_circle(circle),
            SvgElement::Line(line) => visitor.visit_line(line),
            SvgElement::Polygon { points } => visitor.visit_polygon(points),
            SvgElement::Polyline { points } => visitor.visit_polyline(points),
            SvgElement::Group(children) => visitor.visit_group(children),
        }
    }
}

/// Parsed SVG document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    /// Children of the `<svg>` root element.
    pub root: SvgElement,
}

impl SvgDocument {
    /// Parse SVG text into an element tree.
    pub fn parse(text: &str) -> ImportResult<Self> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let document = roxmltree::Document::parse_with_options(text, options)?;
        let root = document.root_element();
        if root.tag_name().name() != "svg" {
            return Err(ImportError::InvalidSvg(format!(
                "root element is <{}>, expected <svg>",
                root.tag_name().name()
            )));
        }

        Ok(Self {
            root: SvgElement::Group(build_children(root)),
        })
    }

    pub fn accept<V: ElementVisitor + ?Sized>(&self, visitor: &mut V) {
        self.root.accept(visitor);
    }

    /// Number of drawable (non-group) elements in the tree.
    pub fn element_count(&self) -> usize {
        fn count(element: &SvgElement) -> usize {
            match element {
                SvgElement::Group(children) => children.iter().map(count).sum(),
                _ => 1,
            }
        }
        count(&self.root)
    }
}

fn build_children(node: roxmltree::Node<'_, '_>) -> Vec<SvgElement> {
    node.children()
        .filter(|child| child.is_element())
        .map(build_element)
        .collect()
}

fn build_element(node: roxmltree::Node<'_, '_>) -> SvgElement {
    let name = node.tag_name().name();
    match name {
        "path" => SvgElement::Path {
            d: node.attribute("d").unwrap_or_default().to_string(),
        },
        "rect" => SvgElement::Rect(RectElement {
            x: length_attr(node, "x"),
            y: length_attr(node, "y"),
            width: length_attr(node, "width"),
            height: length_attr(node, "height"),
        }),
        "circle" => SvgElement::Circle(CircleElement {
            cx: length_attr(node, "cx"),
            cy: length_attr(node, "cy"),
            r: length_attr(node, "r"),
        }),
        "line" => SvgElement::Line(LineElement {
            x1: length_attr(node, "x1"),
            y1: length_attr(node, "y1"),
            x2: length_attr(node, "x2"),
            y2: length_attr(node, "y2"),
        }),
        "polygon" => SvgElement::Polygon {
            points: node.attribute("points").unwrap_or_default().to_string(),
        },
        "polyline" => SvgElement::Polyline {
            points: node.attribute("points").unwrap_or_default().to_string(),
        },
        other => {
            if other != "g" {
                debug!("Entering <{}> as a transparent group", other);
            }
            SvgElement::Group(build_children(node))
        }
    }
}

/// Numeric value of a length attribute; units are not resolved.
fn length_attr(node: roxmltree::Node<'_, '_>, name: &str) -> Option<f64> {
    let raw = node.attribute(name)?;
    svgtypes::Length::from_str(raw.trim())
        .ok()
        .map(|length| length.number)
}
