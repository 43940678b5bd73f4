//! Path synthesis for basic shapes
//!
//! `rect`, `line`, `polygon` and `polyline` elements are rewritten as path
//! command strings so that every element goes through the same interpreter.

use std::sync::LazyLock;

use regex::Regex;
use wirebend_core::Point;

use super::document::{LineElement, RectElement};

static POINT_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,]+").expect("invalid point separator regex"));

/// Parse an SVG `points` attribute.
///
/// Tokens are split on commas and whitespace; non-numeric tokens are
/// discarded and an odd trailing value is dropped.
pub fn parse_points(points: &str) -> Vec<Point> {
    let values: Vec<f64> = POINT_SEPARATOR
        .split(points.trim())
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .collect();

    values
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect()
}

/// `M x,y L x+w,y L x+w,y+h L x,y+h Z`, or `None` without a positive size.
pub fn rect_path(rect: &RectElement) -> Option<String> {
    let width = rect.width.filter(|w| *w > 0.0)?;
    let height = rect.height.filter(|h| *h > 0.0)?;
    let x = rect.x.unwrap_or(0.0);
    let y = rect.y.unwrap_or(0.0);
    Some(format!(
        "M {},{} L {},{} L {},{} L {},{} Z",
        x,
        y,
        x + width,
        y,
        x + width,
        y + height,
        x,
        y + height
    ))
}

/// `M x1,y1 L x2,y2`, or `None` when an endpoint is missing.
pub fn line_path(line: &LineElement) -> Option<String> {
    match (line.x1, line.y1, line.x2, line.y2) {
        (Some(x1), Some(y1), Some(x2), Some(y2)) => Some(format!("M {x1},{y1} L {x2},{y2}")),
        _ => None,
    }
}

/// `M p0 L p1 ... [Z]`, or `None` for an empty point list.
pub fn points_path(points: &[Point], closed: bool) -> Option<String> {
    let (first, rest) = points.split_first()?;
    let mut d = format!("M {},{}", first.x, first.y);
    for point in rest {
        d.push_str(&format!(" L {},{}", point.x, point.y));
    }
    if closed {
        d.push_str(" Z");
    }
    Some(d)
}
