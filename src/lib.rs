//! # Wirebend
//!
//! Converts SVG and DXF drawings into advance/bend/cut sequences for
//! wire-bending machines.
//!
//! ## Architecture
//!
//! Wirebend is organized as a workspace with multiple crates:
//!
//! 1. **wirebend-core** - Geometry, machine state, actions and numeric policy
//! 2. **wirebend-designer** - SVG interpretation and the DXF interchange codec
//! 3. **wirebend-camtools** - Action sequence generation and conversion pipelines
//! 4. **wirebend-settings** - Configuration files
//! 5. **wirebend** - Command-line binary that integrates all crates

pub use wirebend_camtools::{
    convert_file, dxf_to_actions, svg_to_actions, svg_to_dxf, trace_svg, ActionSequenceGenerator,
    ConversionOptions, ConversionPipeline, PipelineError, SequenceBuilder, SequenceDocument,
};
pub use wirebend_core::{
    Action, AngleViolation, Circle, ConversionFailure, ConversionResult, Entity, LineSegment,
    Point, Polyline, ROTATION_LIMIT_DEGREES,
};
pub use wirebend_designer::{
    decode_entities, encode_entities, ImportError, SvgInterpreter, SvgTrace, TraceItem,
};
pub use wirebend_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so that sequences printed on stdout stay parseable.
/// The level defaults to INFO and follows `RUST_LOG` when it is set.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Milliseconds since the Unix epoch, used to name output files.
pub fn timestamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
