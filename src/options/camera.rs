use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and distance smoothing parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Resting camera distance from the grid origin. The grid carries the
    /// scale change, so this is the same for every scale.
    #[schemars(title = "Distance", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub distance: f32,
    /// Exponential approach rate toward the target distance, per second.
    #[schemars(skip)]
    pub smoothing: f32,
    /// Eye height as a fraction of the distance.
    #[schemars(skip)]
    pub elevation: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1e20,
            distance: 5.0,
            smoothing: 2.0,
            elevation: 0.3,
        }
    }
}
