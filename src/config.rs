//! Per-chart configuration: one engine, parameterised instead of one widget per variant.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::loader::IngestOptions;
use crate::data::model::ColumnSelection;
use crate::error::SlicerError;
use crate::slicer::domain::{AxisDomain, YDomainMode};
use crate::slicer::transform::{Margin, Viewport};

/// Everything a new chart instance starts from.
///
/// Missing JSON fields fall back to [`SlicerConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlicerConfig {
    pub ingest: IngestOptions,
    pub y_domain_mode: YDomainMode,
    pub default_columns: ColumnSelection,
    pub default_x_domain: AxisDomain,
    pub default_y_domain: AxisDomain,
    /// Used when a column has no finite value to size a domain from.
    pub fallback_domain: AxisDomain,
    pub default_x_markers: [f64; 2],
    pub default_y_markers: [f64; 2],
    pub viewport: Viewport,
    pub margin: Margin,
    /// How close (px) a press must land to a marker line to grab it.
    pub hit_tolerance_px: f64,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            ingest: IngestOptions::default(),
            y_domain_mode: YDomainMode::Fixed { min: 0.0, max: 0.2 },
            default_columns: ColumnSelection::default(),
            default_x_domain: AxisDomain::new(0.0, 100.0),
            default_y_domain: AxisDomain::new(0.0, 0.2),
            fallback_domain: AxisDomain::new(0.0, 100.0),
            default_x_markers: [20.0, 60.0],
            default_y_markers: [0.06, 0.12],
            viewport: Viewport::default(),
            margin: Margin::default(),
            hit_tolerance_px: 6.0,
        }
    }
}

impl SlicerConfig {
    /// Variant whose Y range follows the data instead of a pinned range.
    pub fn data_driven() -> Self {
        Self {
            y_domain_mode: YDomainMode::DataDriven,
            ..Self::default()
        }
    }

    /// Load a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: SlicerConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SlicerError> {
        let d = self.ingest.delimiter;
        if !d.is_ascii() {
            return Err(SlicerError::InvalidDelimiter(d));
        }
        Ok(())
    }
}
