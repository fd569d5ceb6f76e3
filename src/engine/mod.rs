//! The scale-transition engine.
//!
//! [`ScaleEngine`] reconciles three control surfaces (autoplay stepping,
//! discrete multi-step jumps and continuous slider dragging) into one
//! deterministic state, advanced once per frame by [`ScaleEngine::update`].
//! The host then asks for a [`RenderInfo`](crate::render::RenderInfo)
//! snapshot with [`ScaleEngine::render_info`].
//!
//! All methods are split by concern across the submodules:
//! - `accessors`: read-only queries for UI widgets
//! - `control`: play/pause/reset, stepping, jumps, slider, speed
//! - `projection`: the per-frame render snapshot
//! - `command`: the command vocabulary and key-bound actions

mod accessors;
pub mod command;
mod control;
mod projection;

pub use command::{KeyAction, ScaleCommand};
pub use projection::BLEND_EPSILON;

use crate::animation::{lerp, Deferred, Motion};
use crate::camera::CameraRig;
use crate::options::{AnimationOptions, Options};
use crate::scale::ScaleSequence;

/// Lower bound of the playback speed multiplier.
pub const SPEED_MIN: f32 = 0.1;
/// Upper bound of the playback speed multiplier.
pub const SPEED_MAX: f32 = 3.0;
/// Slider blending snaps onto its target within this distance.
pub const SLIDER_SNAP_EPSILON: f32 = 0.001;

/// Frame-driven state machine walking an ordered scale sequence.
///
/// Invariants:
/// - `current_index` and `target_index` are always in `[0, N-1]`.
/// - When settled (neither transitioning nor slider-controlled),
///   `current_index == target_index == round(position)`.
/// - At most one chained-jump and one autoplay continuation are pending.
#[derive(Debug, Clone)]
pub struct ScaleEngine {
    scales: ScaleSequence,
    animation: AnimationOptions,

    /// Source of the current crossfade (or the settled scale).
    current_index: usize,
    /// Destination of the current crossfade.
    target_index: usize,
    /// Continuous position; authoritative only while slider-controlled,
    /// synced to `current_index` whenever a transition starts or settles.
    position: f32,
    motion: Motion,

    speed: f32,
    auto_rotate: bool,
    rotation_angle: f32,
    camera: CameraRig,

    /// Next autoplay step (after the play delay or the per-scale dwell).
    autoplay_step: Deferred<()>,
    /// Next step of a chained jump; the payload is the final index.
    chained_jump: Deferred<usize>,
}

impl ScaleEngine {
    /// Engine settled on the first scale, paused.
    pub fn new(scales: ScaleSequence, options: &Options) -> Self {
        log::debug!(
            "ScaleEngine: {} scales, {:.2}s transitions",
            scales.len(),
            options.animation.transition_duration
        );
        Self {
            scales,
            speed: clamp_speed(options.animation.speed),
            auto_rotate: options.animation.auto_rotate,
            animation: options.animation.clone(),
            current_index: 0,
            target_index: 0,
            position: 0.0,
            motion: Motion::Idle,
            rotation_angle: 0.0,
            camera: CameraRig::new(&options.camera),
            autoplay_step: Deferred::new(),
            chained_jump: Deferred::new(),
        }
    }

    /// Replace timing options at runtime. Speed and auto-rotate are
    /// re-read as well; in-flight transitions keep their progress.
    pub fn set_animation_options(&mut self, animation: &AnimationOptions) {
        self.speed = clamp_speed(animation.speed);
        self.auto_rotate = animation.auto_rotate;
        self.animation = animation.clone();
    }

    /// Advance the engine by `dt` seconds.
    ///
    /// Order per frame: spin, advance the active mode, fire due
    /// continuations, retarget the camera, smooth the camera distance.
    /// Continuations scheduled during this frame start counting next
    /// frame. Negative or non-finite `dt` is treated as zero.
    pub fn update(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        if self.auto_rotate {
            self.rotation_angle += dt * self.animation.rotation_rate * self.speed;
        }

        let autoplay_due = self.autoplay_step.advance(dt).is_some();
        let jump_due = self.chained_jump.advance(dt);

        match self.motion {
            Motion::SliderBlending { target, rate } => {
                self.advance_slider(target, rate, dt);
            }
            Motion::Transitioning { progress, autoplay } => {
                self.advance_transition(progress, autoplay, dt);
            }
            Motion::Idle | Motion::Autoplaying => {}
        }

        if autoplay_due {
            self.continue_autoplay();
        }
        if let Some(final_index) = jump_due {
            self.continue_jump(final_index);
        }

        self.camera.retarget();
        self.camera.smooth(dt);
    }

    /// Move the continuous position toward the slider target at a constant
    /// rate, snapping once within [`SLIDER_SNAP_EPSILON`].
    fn advance_slider(&mut self, target: f32, rate: f32, dt: f32) {
        let remaining = target - self.position;
        let step = rate * dt;
        self.position = if !step.is_finite()
            || remaining.abs() - step < SLIDER_SNAP_EPSILON
        {
            target
        } else {
            self.position + step.copysign(remaining)
        };
        self.sync_slider_indices();
    }

    fn advance_transition(&mut self, progress: f32, autoplay: bool, dt: f32) {
        let duration = self.animation.transition_duration;
        let step = if duration > 0.0 {
            dt / duration * self.speed
        } else {
            1.0
        };
        let progress = progress + step;
        if progress < 1.0 {
            self.motion = Motion::Transitioning { progress, autoplay };
        } else {
            self.settle(autoplay);
        }
    }

    /// Land on the target scale. Autoplay continues after the dwell time,
    /// or pauses at the last scale.
    fn settle(&mut self, autoplay: bool) {
        self.current_index = self.target_index;
        self.position = self.current_index as f32;
        log::debug!("Settled on scale {}", self.current_index);

        if !autoplay {
            self.motion = Motion::Idle;
        } else if self.current_index < self.scales.last_index() {
            self.motion = Motion::Autoplaying;
            self.autoplay_step
                .schedule(self.animation.autoplay_dwell, ());
        } else {
            self.motion = Motion::Idle;
            log::info!("Reached the last scale; playback paused");
        }
    }

    /// Slider mode tracks the integer pair bracketing the position.
    fn sync_slider_indices(&mut self) {
        let last = self.scales.last_index();
        self.current_index = (self.position.floor().max(0.0) as usize).min(last);
        self.target_index = (self.current_index + 1).min(last);
    }

    /// Continuous position the UI should display.
    fn reported_position(&self) -> f32 {
        match self.motion {
            Motion::SliderBlending { .. } => self.position,
            Motion::Transitioning { progress, .. } => lerp(
                self.current_index as f32,
                self.target_index as f32,
                progress,
            ),
            Motion::Idle | Motion::Autoplaying => self.current_index as f32,
        }
    }
}

/// Clamp a speed multiplier into `[SPEED_MIN, SPEED_MAX]`.
pub fn clamp_speed(speed: f32) -> f32 {
    if speed.is_nan() {
        return 1.0;
    }
    speed.clamp(SPEED_MIN, SPEED_MAX)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::ScaleEngine;
    use crate::options::Options;
    use crate::scale::{ScaleDescriptor, ScaleSequence};

    /// Frame length used by the stepping helpers.
    pub(crate) const FRAME: f32 = 1.0 / 60.0;

    /// `n` scales one order of magnitude apart, starting at 1 nm.
    pub(crate) fn sequence(n: usize) -> ScaleSequence {
        let scales = (0..n)
            .map(|i| {
                ScaleDescriptor::new(
                    format!("scale-{i}"),
                    10f32.powi(i as i32 - 9),
                )
            })
            .collect();
        ScaleSequence::new(scales).unwrap()
    }

    pub(crate) fn engine(n: usize) -> ScaleEngine {
        ScaleEngine::new(sequence(n), &Options::default())
    }

    /// Run `seconds` of simulated time in 60 Hz frames.
    pub(crate) fn run(engine: &mut ScaleEngine, seconds: f32) {
        let frames = (seconds / FRAME).ceil() as usize;
        for _ in 0..frames {
            engine.update(FRAME);
        }
    }

    /// Settle on `index` by stepping forward from a fresh engine.
    pub(crate) fn settled_at(n: usize, index: usize) -> ScaleEngine {
        let mut engine = engine(n);
        for _ in 0..index {
            engine.next_scale();
            engine.update(engine.transition_duration() + 0.01);
        }
        engine
    }
}
