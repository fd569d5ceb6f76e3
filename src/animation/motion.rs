//! The engine's control mode as a single tagged value.
//!
//! At most one of discrete transitions and slider blending drives position
//! at a time. Playback is not a separate flag: it is either the settled
//! `Autoplaying` state or rides along with a discrete transition.

/// What is currently driving the scale position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Motion {
    /// Settled on a scale, nothing scheduled.
    #[default]
    Idle,
    /// Settled on a scale with playback on, waiting for the next step.
    Autoplaying,
    /// Discrete, eased crossfade from the current to the target index.
    Transitioning {
        /// Linear progress in [0, 1].
        progress: f32,
        /// Whether playback continues once this transition settles.
        autoplay: bool,
    },
    /// Continuous position follows the slider.
    SliderBlending {
        /// Continuous position the slider asked for.
        target: f32,
        /// Approach speed in positions per second.
        rate: f32,
    },
}

impl Motion {
    /// Whether playback is on.
    #[inline]
    pub fn is_playing(self) -> bool {
        matches!(
            self,
            Self::Autoplaying
                | Self::Transitioning {
                    autoplay: true,
                    ..
                }
        )
    }

    /// Whether a discrete transition is in flight.
    #[inline]
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Transitioning { .. })
    }

    /// Whether the slider drives position.
    #[inline]
    pub fn is_slider_controlled(self) -> bool {
        matches!(self, Self::SliderBlending { .. })
    }

    /// Settled (idle or waiting between autoplay steps).
    #[inline]
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Idle | Self::Autoplaying)
    }

    /// Transition progress, if transitioning.
    #[inline]
    pub fn progress(self) -> Option<f32> {
        match self {
            Self::Transitioning { progress, .. } => Some(progress),
            _ => None,
        }
    }

    /// Same mode with playback switched off.
    #[must_use]
    pub fn paused(self) -> Self {
        match self {
            Self::Autoplaying => Self::Idle,
            Self::Transitioning { progress, .. } => Self::Transitioning {
                progress,
                autoplay: false,
            },
            other => other,
        }
    }
}
