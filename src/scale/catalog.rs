//! JSON scale catalog (the `config.json` served next to the viewer).
//!
//! ```json
//! {
//!   "transitionDuration": 3.0,
//!   "scales": [
//!     { "name": "Atom", "scale": 1e-10, "size": "0.1 nm",
//!       "model": "models/atom.obj", "color": [0.4, 0.7, 1.0] }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ScaleDescriptor, ScaleSequence};
use crate::error::ScalesError;

/// One catalog entry as it appears on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Display name.
    pub name: String,
    /// Grid scale in meters.
    pub scale: f32,
    /// Physical object size in meters; defaults to the grid scale.
    #[serde(default)]
    pub object_size: Option<f32>,
    /// Human-readable size label.
    #[serde(default)]
    pub size: String,
    /// Model file path.
    #[serde(default)]
    pub model: Option<String>,
    /// Uniform RGB color; defaults to white.
    #[serde(default)]
    pub color: Option<[f32; 3]>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Largest bounding-box dimension of the model; defaults to 1.0.
    #[serde(default)]
    pub model_bounding_size: Option<f32>,
}

impl From<CatalogEntry> for ScaleDescriptor {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            object_size: entry.object_size.unwrap_or(entry.scale),
            model_bounding_size: entry.model_bounding_size.unwrap_or(1.0),
            color: entry.color.unwrap_or([1.0, 1.0, 1.0]),
            size_label: entry.size,
            description: entry.description,
            model: entry.model,
            grid_scale: entry.scale,
            name: entry.name,
        }
    }
}

/// Top-level catalog document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScaleCatalog {
    /// Seconds per discrete transition; overrides the options preset.
    #[serde(default)]
    pub transition_duration: Option<f32>,
    /// Legacy zoom factor between scales. Accepted and ignored.
    #[serde(default)]
    pub scale_factor: Option<f32>,
    /// Ordered scales, smallest first.
    #[serde(default)]
    pub scales: Vec<CatalogEntry>,
}

impl ScaleCatalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ScalesError> {
        serde_json::from_str(json)
            .map_err(|e| ScalesError::CatalogParse(e.to_string()))
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ScalesError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        log::info!(
            "Loaded scale catalog {} ({} scales)",
            path.display(),
            catalog.scales.len()
        );
        Ok(catalog)
    }

    /// Convert into a validated sequence.
    pub fn into_sequence(self) -> Result<ScaleSequence, ScalesError> {
        ScaleSequence::new(
            self.scales.into_iter().map(ScaleDescriptor::from).collect(),
        )
    }
}
