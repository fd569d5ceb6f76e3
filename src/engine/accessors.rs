//! Read-only queries for [`ScaleEngine`], mostly for reflecting state back
//! into UI widgets.

use super::ScaleEngine;
use crate::animation::Motion;
use crate::camera::CameraRig;
use crate::scale::ScaleSequence;

// ── Position ──

impl ScaleEngine {
    /// Index the engine is settled on or heading toward: the target while
    /// transitioning, else the current index.
    pub fn current_index(&self) -> usize {
        if self.motion.is_transitioning() {
            self.target_index
        } else {
            self.current_index
        }
    }

    /// Real-valued position for the slider widget.
    ///
    /// Slider-controlled: the blended position. Transitioning: source
    /// index moved toward the target by the linear progress. Otherwise
    /// the current index.
    pub fn continuous_position(&self) -> f32 {
        self.reported_position()
    }

    /// Source of the current crossfade (the settled scale when idle).
    pub fn source_index(&self) -> usize {
        self.current_index
    }

    /// Destination of the current crossfade.
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    /// Linear transition progress in [0, 1]; 0 when not transitioning.
    pub fn transition_progress(&self) -> f32 {
        self.motion.progress().unwrap_or(0.0)
    }

    /// Final index of the chained jump in progress, if any.
    pub fn pending_jump_target(&self) -> Option<usize> {
        self.chained_jump.payload().copied()
    }

    /// Whether there is a scale before the reported index.
    pub fn can_go_prev(&self) -> bool {
        self.current_index() > 0
    }

    /// Whether there is a scale after the reported index.
    pub fn can_go_next(&self) -> bool {
        self.current_index() < self.scales.last_index()
    }
}

// ── Mode ──

impl ScaleEngine {
    /// Whether autoplay is on.
    pub fn is_playing(&self) -> bool {
        self.motion.is_playing()
    }

    /// Whether a discrete crossfade is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.motion.is_transitioning()
    }

    /// Whether the slider drives position.
    pub fn is_slider_controlled(&self) -> bool {
        self.motion.is_slider_controlled()
    }

    /// The active control mode.
    pub fn motion(&self) -> Motion {
        self.motion
    }
}

// ── Settings and collaborators ──

impl ScaleEngine {
    /// Playback speed multiplier.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Whether the object spins.
    pub fn auto_rotate_enabled(&self) -> bool {
        self.auto_rotate
    }

    /// Accumulated spin angle in radians.
    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    /// Seconds one transition takes at speed 1.
    pub fn transition_duration(&self) -> f32 {
        self.animation.transition_duration
    }

    /// The scale sequence being walked.
    pub fn scales(&self) -> &ScaleSequence {
        &self.scales
    }

    /// Camera distance smoother.
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }
}
