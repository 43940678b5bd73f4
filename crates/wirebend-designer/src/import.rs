//! # File Import Module
//!
//! Importers turning SVG and DXF files into drawing entities.
//!
//! Supports:
//! - File format detection by extension
//! - SVG interpretation with in-band reporting of malformed elements
//! - DXF entity decoding

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use wirebend_core::Entity;

use crate::dxf::{DxfDrawing, DxfReader};
use crate::error::{ImportError, ImportResult};
use crate::svg::{ChordFlattener, CurveFlattener, SvgInterpreter, SvgTrace};

/// Supported import file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// SVG (Scalable Vector Graphics)
    Svg,
    /// DXF (Drawing Exchange Format)
    Dxf,
}

impl FileFormat {
    /// Detect the format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> ImportResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "svg" => Ok(FileFormat::Svg),
            "dxf" => Ok(FileFormat::Dxf),
            "" => Err(ImportError::UnsupportedFormat(path.display().to_string())),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}

fn read_source(path: &Path) -> ImportResult<String> {
    if !path.exists() {
        return Err(ImportError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    info!("Read {} ({} bytes)", path.display(), content.len());
    Ok(content)
}

/// SVG importer
#[derive(Debug, Clone)]
pub struct SvgImporter {
    interpreter: SvgInterpreter,
}

impl Default for SvgImporter {
    fn default() -> Self {
        Self::new(Arc::new(ChordFlattener))
    }
}

impl SvgImporter {
    pub fn new(flattener: Arc<dyn CurveFlattener>) -> Self {
        Self {
            interpreter: SvgInterpreter::with_flattener(flattener),
        }
    }

    pub fn import_string(&self, svg_content: &str) -> ImportResult<SvgTrace> {
        self.interpreter.interpret_str(svg_content)
    }

    pub fn import_file(&self, path: impl AsRef<Path>) -> ImportResult<SvgTrace> {
        let content = read_source(path.as_ref())?;
        self.import_string(&content)
    }
}

/// DXF importer
#[derive(Debug, Clone, Copy, Default)]
pub struct DxfImporter;

impl DxfImporter {
    pub fn new() -> Self {
        Self
    }

    pub fn import_string(&self, content: &str) -> DxfDrawing {
        DxfReader::new().read(content)
    }

    pub fn import_file(&self, path: impl AsRef<Path>) -> ImportResult<DxfDrawing> {
        let content = read_source(path.as_ref())?;
        Ok(self.import_string(&content))
    }
}

/// Import any supported file into entities, dropping malformed SVG elements.
pub fn import_entities(path: impl AsRef<Path>) -> ImportResult<Vec<Entity>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ImportError::NotFound(path.to_path_buf()));
    }
    match FileFormat::from_path(path)? {
        FileFormat::Svg => Ok(SvgImporter::default().import_file(path)?.entities()),
        FileFormat::Dxf => Ok(DxfImporter::new().import_file(path)?.entities),
    }
}
