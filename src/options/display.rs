use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Display toggles passed to the renderer with each frame.
pub struct DisplayOptions {
    /// Use per-vertex model colors instead of each scale's uniform color.
    #[schemars(title = "Use Model Colors")]
    pub use_model_colors: bool,
    /// Draw geometry as lines.
    #[schemars(title = "Wireframe")]
    pub wireframe: bool,
    /// Draw the reference grid.
    #[schemars(title = "Show Grid")]
    pub show_grid: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            use_model_colors: false,
            wireframe: true,
            show_grid: true,
        }
    }
}
