//! The ordered scale sequence the engine walks through.
//!
//! Each [`ScaleDescriptor`] is one order-of-magnitude view (atom, cell,
//! planet, galaxy, ...). Descriptors are supplied by the host and are
//! read-only to the engine; [`ScaleSequence`] guarantees the invariants the
//! engine relies on (non-empty, positive grid scales and bounding sizes).

pub mod catalog;
pub mod label;

use glam::Vec3;

pub use catalog::ScaleCatalog;
pub use label::format_grid_scale;

use crate::error::ScalesError;

/// One entry of the scale sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleDescriptor {
    /// Display name ("Atom", "Cell", ...).
    pub name: String,
    /// Edge unit of the reference grid in meters (the order of magnitude).
    pub grid_scale: f32,
    /// Real physical size of the depicted object in meters.
    pub object_size: f32,
    /// Largest bounding-box dimension of the loaded geometry, in model units.
    pub model_bounding_size: f32,
    /// Uniform RGB color used when model colors are disabled.
    pub color: [f32; 3],
    /// Human-readable size label shown next to the name.
    pub size_label: String,
    /// Free-form description.
    pub description: String,
    /// Model file the geometry was loaded from, if any.
    pub model: Option<String>,
}

impl ScaleDescriptor {
    /// Descriptor whose object exactly fills one grid unit, with unit-sized
    /// geometry and a white color.
    pub fn new(name: impl Into<String>, grid_scale: f32) -> Self {
        Self {
            name: name.into(),
            grid_scale,
            object_size: grid_scale,
            model_bounding_size: 1.0,
            color: [1.0, 1.0, 1.0],
            size_label: String::new(),
            description: String::new(),
            model: None,
        }
    }

    /// Set the physical object size in meters.
    #[must_use]
    pub fn with_object_size(mut self, object_size: f32) -> Self {
        self.object_size = object_size;
        self
    }

    /// Set the model bounding size in model units.
    #[must_use]
    pub fn with_model_bounding_size(mut self, size: f32) -> Self {
        self.model_bounding_size = size;
        self
    }

    /// Set the uniform color.
    #[must_use]
    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Object size as a fraction of the given grid unit, normalized by the
    /// model's own bounding size.
    ///
    /// A model with a larger bounding box is shrunk proportionally so it
    /// renders at its true physical size relative to the grid.
    #[inline]
    pub fn render_scale(&self, grid_scale: f32) -> f32 {
        (self.object_size / grid_scale) / self.model_bounding_size
    }

    fn validate(&self, index: usize) -> Result<(), ScalesError> {
        let invalid = |reason: &str| ScalesError::InvalidScale {
            index,
            reason: format!("{reason} ({})", self.name),
        };
        if !self.grid_scale.is_finite() || self.grid_scale <= 0.0 {
            return Err(invalid("grid scale must be positive and finite"));
        }
        if !self.object_size.is_finite() || self.object_size < 0.0 {
            return Err(invalid("object size must be non-negative and finite"));
        }
        if !self.model_bounding_size.is_finite()
            || self.model_bounding_size <= 0.0
        {
            return Err(invalid("model bounding size must be positive"));
        }
        Ok(())
    }
}

/// Validated, non-empty, ordered list of scales.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSequence {
    scales: Vec<ScaleDescriptor>,
}

impl ScaleSequence {
    /// Build a sequence, rejecting an empty list or invalid descriptors.
    pub fn new(scales: Vec<ScaleDescriptor>) -> Result<Self, ScalesError> {
        if scales.is_empty() {
            return Err(ScalesError::EmptySequence);
        }
        for (i, scale) in scales.iter().enumerate() {
            scale.validate(i)?;
        }
        Ok(Self { scales })
    }

    /// Number of scales (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Index of the last scale.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.scales.len() - 1
    }

    /// Scale at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ScaleDescriptor> {
        self.scales.get(index)
    }

    /// Scale at `index`, clamped into range.
    #[must_use]
    pub fn clamped(&self, index: usize) -> &ScaleDescriptor {
        &self.scales[index.min(self.last_index())]
    }

    /// Iterate over the scales in order.
    pub fn iter(&self) -> impl Iterator<Item = &ScaleDescriptor> {
        self.scales.iter()
    }
}

/// Largest axis-aligned extent of a set of model-space positions.
///
/// Returns 1.0 for empty or degenerate (zero-extent) geometry so it can be
/// used directly as a descriptor's `model_bounding_size`.
pub fn model_bounding_size(positions: &[Vec3]) -> f32 {
    let Some(first) = positions.first() else {
        return 1.0;
    };
    let (min, max) = positions
        .iter()
        .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
    let extent = (max - min).max_element();
    if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        1.0
    }
}
