//! # Wirebend CAM Tools
//!
//! Turns drawing entities into instructions for a wire-bending head.
//!
//! ## Components
//!
//! - **Sequence**: the action sequence generator and its incremental builder
//! - **Rotation**: splitting large bends under the rotation limit
//! - **Start**: longest-segment start placement
//! - **Options**: the switches shared by both conversion flows
//! - **Pipeline**: the combined (SVG → DXF → actions) and direct
//!   (SVG → actions) flows, plus file helpers

pub mod error;
pub mod options;
pub mod pipeline;
pub mod rotation;
pub mod sequence;
pub mod start;

pub use error::{PipelineError, PipelineResult};
pub use options::ConversionOptions;
pub use pipeline::{
    convert_file, dxf_to_actions, svg_to_actions, svg_to_dxf, trace_svg, ConversionPipeline,
    SequenceDocument,
};
pub use rotation::divide_rotation;
pub use sequence::{ActionSequenceGenerator, SequenceBuilder};
pub use start::{longest_segment, StartSegment};
