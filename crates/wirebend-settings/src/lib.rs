//! # Wirebend Settings
//!
//! Configuration for conversions: generator switches, curve flattening and
//! the output directory, stored as TOML or JSON.

pub mod config;
pub mod error;

pub use config::{Config, ConversionSettings, CurveSettings, FlatteningMode, OutputSettings};
pub use error::{SettingsError, SettingsResult};
