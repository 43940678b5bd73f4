//! DXF interchange codec
//!
//! ASCII DXF is the intermediate format between the SVG interpreter and the
//! sequence generator. Only LINE, LWPOLYLINE and CIRCLE are written; the
//! reader additionally accepts heavy POLYLINE/VERTEX records.

pub mod reader;
pub mod writer;

pub use reader::{decode_entities, scan_pairs, DxfDrawing, DxfPair, DxfReader};
pub use writer::{encode_entities, DxfWriter};
