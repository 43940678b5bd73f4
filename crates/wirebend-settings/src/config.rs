//! Configuration file handling
//!
//! Settings are stored as TOML or JSON, chosen by file extension. Every
//! section falls back to its defaults when omitted.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use wirebend_camtools::ConversionOptions;
use wirebend_designer::{ChordFlattener, CurveFlattener, SubdividingFlattener};

use crate::error::{SettingsError, SettingsResult};

/// Conversion switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    /// Trace the closing edge of closed polylines
    pub close_polygons: bool,
    /// Start at the midpoint of the longest segment
    pub start_at_longest_segment: bool,
    /// Accept bends beyond the rotation limit
    pub ignore_angle_checks: bool,
    /// Split bends larger than the rotation limit
    pub respect_rotation_limit: bool,
    /// Wrap heading changes into [-180, 180]
    pub normalize_heading: bool,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        let options = ConversionOptions::default();
        Self {
            close_polygons: options.close_polygons,
            start_at_longest_segment: options.start_at_longest_segment,
            ignore_angle_checks: options.ignore_angle_checks,
            respect_rotation_limit: options.respect_rotation_limit,
            normalize_heading: options.normalize_heading,
        }
    }
}

impl From<&ConversionSettings> for ConversionOptions {
    fn from(settings: &ConversionSettings) -> Self {
        ConversionOptions {
            close_polygons: settings.close_polygons,
            start_at_longest_segment: settings.start_at_longest_segment,
            ignore_angle_checks: settings.ignore_angle_checks,
            respect_rotation_limit: settings.respect_rotation_limit,
            normalize_heading: settings.normalize_heading,
            ..ConversionOptions::default()
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory sequence documents are written to
    pub directory: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("output"),
        }
    }
}

/// How curves in path data are reduced to straight runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FlatteningMode {
    /// Keep only the chord to the curve end point
    #[default]
    Chord,
    /// Subdivide within a tolerance
    Subdivide,
}

impl fmt::Display for FlatteningMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlatteningMode::Chord => write!(f, "chord"),
            FlatteningMode::Subdivide => write!(f, "subdivide"),
        }
    }
}

/// Curve flattening settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSettings {
    pub mode: FlatteningMode,
    /// Maximum distance between a curve and its flattened chords
    pub tolerance: f64,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            mode: FlatteningMode::Chord,
            tolerance: 0.1,
        }
    }
}

impl CurveSettings {
    pub fn flattener(&self) -> Arc<dyn CurveFlattener> {
        match self.mode {
            FlatteningMode::Chord => Arc::new(ChordFlattener),
            FlatteningMode::Subdivide => Arc::new(SubdividingFlattener::new(self.tolerance)),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub conversion: ConversionSettings,
    pub output: OutputSettings,
    pub curves: CurveSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/wirebend/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("wirebend").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given; otherwise the default file if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Ok(default) if default.exists() => Self::load_from_file(&default),
            _ => {
                debug!("No settings file; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.output.directory.as_os_str().is_empty() {
            return Err(SettingsError::invalid("output.directory", "must not be empty"));
        }

        if !self.curves.tolerance.is_finite() || self.curves.tolerance <= 0.0 {
            return Err(SettingsError::invalid("curves.tolerance", "must be > 0"));
        }

        Ok(())
    }

    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions::from(&self.conversion)
    }
}
