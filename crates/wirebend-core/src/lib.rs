//! # Wirebend Core
//!
//! Core types shared by every stage of the Wirebend pipeline.
//!
//! - **Geometry**: points, segments, polylines, circles and the [`Entity`] union
//!   exchanged between the SVG interpreter, the DXF codec and the sequence generator
//! - **Machine**: the [`MachineState`] tracked while a drawing is traced
//! - **Actions**: the [`Action`] instructions sent to the bending head and the
//!   [`ConversionResult`] wrapping them
//! - **Units**: rounding and threshold policy applied to every emitted value

pub mod actions;
pub mod error;
pub mod geometry;
pub mod machine;
pub mod units;

pub use actions::{Action, AngleViolation, ConversionFailure, ConversionResult};
pub use error::{CoreError, Result};
pub use geometry::{Circle, Entity, LineSegment, Point, Polyline};
pub use machine::MachineState;
pub use units::{NEGLIGIBLE_ANGLE, NEGLIGIBLE_DISTANCE, ROTATION_LIMIT_DEGREES};
