//! # Wirebend Designer
//!
//! Turns vector drawings into straight-line entities and carries them through
//! the DXF interchange format.
//!
//! ## Components
//!
//! - **SVG**: element tree, path data interpreter, basic shape synthesis and
//!   pluggable curve flattening
//! - **DXF**: writer and tolerant reader for LINE, LWPOLYLINE, POLYLINE and
//!   CIRCLE records
//! - **Import**: file level importers with format detection
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wirebend_designer::{decode_entities, encode_entities, SvgInterpreter};
//!
//! let trace = SvgInterpreter::new().interpret_str(svg)?;
//! let dxf = encode_entities(&trace.entities());
//! let entities = decode_entities(&dxf);
//! ```

pub mod dxf;
pub mod error;
pub mod import;
pub mod svg;

pub use dxf::{decode_entities, encode_entities, DxfDrawing, DxfReader, DxfWriter};
pub use error::{ImportError, ImportResult};
pub use import::{import_entities, DxfImporter, FileFormat, SvgImporter};
pub use svg::{
    ChordFlattener, CurveFlattener, SubdividingFlattener, SvgDocument, SvgElement,
    SvgInterpreter, SvgTrace, TraceItem,
};
