//! Draw-ready per-frame snapshot handed to the renderer.
//!
//! The renderer issues one draw per [`RenderObject`] and sizes the
//! reference grid from [`RenderInfo::grid_scale`]; it never feeds anything
//! back into the engine.

use glam::{Mat4, Vec3};
use serde::Serialize;

/// Alpha above which a scale counts as visible.
pub const VISIBLE_ALPHA: f32 = 0.01;
/// Alpha above which a visible scale is the primary one.
pub const PRIMARY_ALPHA: f32 = 0.5;

/// One object to draw this frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderObject {
    /// Index of the scale in the sequence.
    pub index: usize,
    /// Opacity in [0, 1].
    pub alpha: f32,
    /// Uniform model scale: physical size in grid units, normalized by the
    /// model's bounding size.
    pub scale: f32,
    /// Uniform RGB color of the scale.
    pub color: [f32; 3],
}

impl RenderObject {
    /// Model transform: spin about Y, a slower tilt about X, then uniform
    /// scale.
    pub fn model_matrix(&self, rotation_angle: f32) -> Mat4 {
        Mat4::from_rotation_y(rotation_angle)
            * Mat4::from_rotation_x(rotation_angle * 0.3)
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

/// Visibility of a scale for list/sidebar highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    /// Index of the scale in the sequence.
    pub index: usize,
    /// Whether this is the dominant object on screen.
    pub primary: bool,
}

/// Per-frame snapshot produced by
/// [`ScaleEngine::render_info`](crate::engine::ScaleEngine::render_info).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderInfo {
    /// Objects to draw, source first when crossfading.
    pub objects: Vec<RenderObject>,
    /// Smoothed camera distance.
    pub camera_distance: f32,
    /// Spin angle in radians.
    pub rotation_angle: f32,
    /// Meters represented by one grid unit this frame.
    pub grid_scale: f32,
    /// `grid_scale` formatted for display.
    pub grid_label: String,
    /// Whether the renderer should use per-vertex model colors instead of
    /// each object's uniform color.
    pub use_model_colors: bool,
    /// Whether geometry is drawn as lines.
    pub wireframe: bool,
    /// Whether the reference grid is drawn.
    pub show_grid: bool,
}

impl RenderInfo {
    /// Visible scales in draw order, one entry per index. A scale that
    /// appears twice (crossfading with itself) is primary if either entry
    /// is.
    pub fn highlights(&self) -> Vec<Highlight> {
        let mut out: Vec<Highlight> = Vec::with_capacity(self.objects.len());
        for object in self.objects.iter().filter(|o| o.alpha > VISIBLE_ALPHA) {
            let primary = object.alpha > PRIMARY_ALPHA;
            match out.iter_mut().find(|h| h.index == object.index) {
                Some(existing) => existing.primary |= primary,
                None => out.push(Highlight {
                    index: object.index,
                    primary,
                }),
            }
        }
        out
    }

    /// Index of the dominant scale, if any object is above half opacity.
    pub fn primary_index(&self) -> Option<usize> {
        self.highlights()
            .into_iter()
            .find(|h| h.primary)
            .map(|h| h.index)
    }
}
