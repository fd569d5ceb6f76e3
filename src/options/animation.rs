use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Transition timing and playback pacing, in seconds unless noted.
pub struct AnimationOptions {
    /// Duration of one discrete scale-to-scale transition at speed 1.
    #[schemars(title = "Transition Duration", range(min = 0.5, max = 10.0), extend("step" = 0.1))]
    pub transition_duration: f32,
    /// Playback speed multiplier, clamped to [0.1, 3.0].
    #[schemars(title = "Speed", range(min = 0.1, max = 3.0), extend("step" = 0.1))]
    pub speed: f32,
    /// Whether the displayed object spins.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Spin rate in radians per second at speed 1.
    #[schemars(skip)]
    pub rotation_rate: f32,
    /// Delay between pressing play and the first step.
    #[schemars(skip)]
    pub play_start_delay: f32,
    /// Pause on each scale between autoplay steps.
    #[schemars(title = "Dwell Time", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub autoplay_dwell: f32,
    /// Extra wait after a transition before a chained jump takes its next
    /// step.
    #[schemars(skip)]
    pub jump_slack: f32,
    /// Time the slider blend takes to cover the remaining distance.
    #[schemars(skip)]
    pub slider_settle: f32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            transition_duration: 3.0,
            speed: 1.0,
            auto_rotate: true,
            rotation_rate: 0.5,
            play_start_delay: 0.1,
            autoplay_dwell: 1.0,
            jump_slack: 0.1,
            slider_settle: 0.3,
        }
    }
}

impl AnimationOptions {
    /// Seconds a chained jump waits before taking its next step.
    pub fn chained_step_delay(&self) -> f32 {
        self.transition_duration + self.jump_slack
    }
}
