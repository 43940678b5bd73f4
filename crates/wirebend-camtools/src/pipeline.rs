//! # Conversion pipelines
//!
//! Two flows turn drawings into actions:
//!
//! ```text
//! combined: SVG -> entities -> DXF text -> entities -> actions
//! direct:   SVG -> trace items ------------------------> actions
//! ```
//!
//! The combined flow always goes through the interchange text so the
//! generator only ever sees what DXF can carry. The direct flow keeps
//! malformed elements in place as error markers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;
use wirebend_core::{Action, ConversionResult};
use wirebend_designer::{decode_entities, encode_entities, FileFormat, SvgInterpreter};

use crate::error::{PipelineError, PipelineResult};
use crate::options::ConversionOptions;
use crate::sequence::ActionSequenceGenerator;

/// Interpreter and generator settings for a batch of conversions.
#[derive(Debug, Clone, Default)]
pub struct ConversionPipeline {
    interpreter: SvgInterpreter,
    options: ConversionOptions,
}

impl ConversionPipeline {
    pub fn new(interpreter: SvgInterpreter, options: ConversionOptions) -> Self {
        Self {
            interpreter,
            options,
        }
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Interpret SVG and encode the resulting entities as DXF text.
    pub fn svg_to_dxf(&self, svg: &str) -> PipelineResult<String> {
        let trace = self.interpreter.interpret_str(svg)?;
        let entities = trace.entities();
        info!("Encoding {} entities as DXF", entities.len());
        Ok(encode_entities(&entities))
    }

    pub fn dxf_to_actions(&self, dxf: &str) -> ConversionResult {
        let entities = decode_entities(dxf);
        info!("Decoded {} entities from DXF", entities.len());
        ActionSequenceGenerator::new(self.options).generate(&entities)
    }

    /// Combined flow: SVG through the DXF round trip into actions.
    pub fn svg_to_actions(&self, svg: &str) -> PipelineResult<ConversionResult> {
        let dxf = self.svg_to_dxf(svg)?;
        Ok(self.dxf_to_actions(&dxf))
    }

    /// Direct flow with [`ConversionOptions::direct_trace`] semantics.
    pub fn trace_svg(&self, svg: &str) -> PipelineResult<ConversionResult> {
        let trace = self.interpreter.interpret_str(svg)?;
        Ok(ActionSequenceGenerator::new(ConversionOptions::direct_trace()).generate_trace(&trace))
    }

    /// Convert a file, choosing the flow from its extension.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> PipelineResult<ConversionResult> {
        let path = path.as_ref();
        let format = source_format(path)?;
        let content = std::fs::read_to_string(path)?;
        info!("Converting {} as {:?}", path.display(), format);
        match format {
            FileFormat::Svg => self.svg_to_actions(&content),
            FileFormat::Dxf => Ok(self.dxf_to_actions(&content)),
        }
    }

    /// Run the direct flow on an SVG file.
    pub fn trace_file(&self, path: impl AsRef<Path>) -> PipelineResult<ConversionResult> {
        let path = path.as_ref();
        match source_format(path)? {
            FileFormat::Svg => {
                let content = std::fs::read_to_string(path)?;
                info!("Tracing {}", path.display());
                self.trace_svg(&content)
            }
            FileFormat::Dxf => Err(PipelineError::UnsupportedFormat(
                "direct tracing needs an SVG input".to_string(),
            )),
        }
    }
}

fn source_format(path: &Path) -> PipelineResult<FileFormat> {
    if !path.exists() {
        return Err(PipelineError::NotFound(path.to_path_buf()));
    }
    FileFormat::from_path(path).map_err(|_| {
        PipelineError::UnsupportedFormat(
            path.extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or_default()
                .to_string(),
        )
    })
}

pub fn svg_to_dxf(svg: &str) -> PipelineResult<String> {
    ConversionPipeline::default().svg_to_dxf(svg)
}

pub fn dxf_to_actions(dxf: &str, options: ConversionOptions) -> ConversionResult {
    ConversionPipeline::new(SvgInterpreter::new(), options).dxf_to_actions(dxf)
}

pub fn svg_to_actions(svg: &str, options: ConversionOptions) -> PipelineResult<ConversionResult> {
    ConversionPipeline::new(SvgInterpreter::new(), options).svg_to_actions(svg)
}

pub fn trace_svg(svg: &str) -> PipelineResult<ConversionResult> {
    ConversionPipeline::default().trace_svg(svg)
}

pub fn convert_file(
    path: impl AsRef<Path>,
    options: ConversionOptions,
) -> PipelineResult<ConversionResult> {
    ConversionPipeline::new(SvgInterpreter::new(), options).convert_file(path)
}

/// Action list saved next to the name of the drawing it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceDocument {
    pub source: String,
    pub actions: Vec<Action>,
}

impl SequenceDocument {
    pub fn new(source: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            source: source.into(),
            actions,
        }
    }

    /// `<stem>_<timestamp_millis>.json`
    pub fn file_name(&self, timestamp_millis: i64) -> String {
        let stem = Path::new(&self.source)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .unwrap_or("sequence");
        format!("{stem}_{timestamp_millis}.json")
    }

    /// Write the document as pretty JSON into `dir`, creating it if needed.
    pub fn write_to(&self, dir: impl AsRef<Path>, timestamp_millis: i64) -> PipelineResult<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name(timestamp_millis));
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        info!("Wrote {} action(s) to {}", self.actions.len(), path.display());
        Ok(path)
    }
}
