//! SVG interpretation
//!
//! The document is parsed into a closed element tree ([`document`]), basic
//! shapes are rewritten as path data ([`shapes`]), and path data is walked
//! into straight-line subpaths ([`path`]) with curves reduced by a
//! [`CurveFlattener`].

pub mod document;
pub mod flatten;
pub mod interpreter;
pub mod path;
pub mod shapes;

pub use document::{ElementVisitor, SvgDocument, SvgElement};
pub use flatten::{ChordFlattener, CubicCurve, CurveFlattener, SubdividingFlattener};
pub use interpreter::{SvgInterpreter, SvgTrace, TraceItem};
pub use path::{interpret_path, Subpath};
