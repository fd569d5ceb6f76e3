//! Control surface: playback, stepping, jumps, slider scrubbing and
//! speed. Every index-accepting operation ignores out-of-range input.

use super::{clamp_speed, ScaleEngine};
use crate::animation::Motion;

// ── Playback ──

impl ScaleEngine {
    /// Start autoplay.
    ///
    /// From a settled state the first step is scheduled after the short
    /// play delay; at the last scale playback restarts from the first one.
    /// Mid-transition, playback simply continues once the transition
    /// settles. Calling while already playing does nothing.
    pub fn play(&mut self) {
        if self.motion.is_playing() {
            return;
        }
        self.chained_jump.cancel();

        match self.motion {
            Motion::Transitioning { progress, .. } => {
                self.motion = Motion::Transitioning {
                    progress,
                    autoplay: true,
                };
                log::info!("Playback resumed mid-transition");
                return;
            }
            Motion::SliderBlending { .. } => self.release_slider(),
            Motion::Idle | Motion::Autoplaying => {}
        }

        if self.current_index == self.scales.last_index() {
            self.snap_to(0);
        }
        self.motion = Motion::Autoplaying;
        self.autoplay_step
            .schedule(self.animation.play_start_delay, ());
        log::info!("Playback started at scale {}", self.current_index);
    }

    /// Stop autoplay. An in-flight transition still finishes.
    pub fn pause(&mut self) {
        if self.motion.is_playing() {
            log::info!("Playback paused");
        }
        self.motion = self.motion.paused();
        self.autoplay_step.cancel();
    }

    /// Play if paused, pause if playing.
    pub fn toggle_playback(&mut self) {
        if self.motion.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Back to the first scale: paused, settled, spin cleared, nothing
    /// scheduled.
    pub fn reset(&mut self) {
        self.autoplay_step.cancel();
        self.chained_jump.cancel();
        self.snap_to(0);
        self.motion = Motion::Idle;
        self.rotation_angle = 0.0;
        log::debug!("Reset to first scale");
    }

    /// Take the next autoplay step, or pause at the end of the sequence.
    pub(super) fn continue_autoplay(&mut self) {
        if self.motion != Motion::Autoplaying {
            log::trace!("Stale autoplay step ignored");
            return;
        }
        if self.current_index < self.scales.last_index() {
            self.start_transition(self.current_index + 1);
        } else {
            self.pause();
        }
    }
}

// ── Discrete steps ──

impl ScaleEngine {
    /// One step toward the end of the sequence; no-op at the last scale.
    pub fn next_scale(&mut self) {
        if self.target_index < self.scales.last_index() {
            self.start_transition(self.target_index + 1);
        }
    }

    /// One step toward the start of the sequence; no-op at the first scale.
    pub fn prev_scale(&mut self) {
        if self.target_index > 0 {
            self.start_transition(self.target_index - 1);
        }
    }

    /// Begin a crossfade from the current target to `new_index`.
    ///
    /// The previous target becomes the new source. Playback state carries
    /// over; slider control ends.
    pub fn start_transition(&mut self, new_index: usize) {
        if new_index >= self.scales.len() {
            log::trace!("start_transition({new_index}) out of range, ignored");
            return;
        }
        let autoplay = self.motion.is_playing();
        self.autoplay_step.cancel();

        self.current_index = self.target_index;
        self.target_index = new_index;
        self.position = self.current_index as f32;
        self.motion = Motion::Transitioning {
            progress: 0.0,
            autoplay,
        };
        self.camera.retarget();
        log::debug!(
            "Transition {} -> {}",
            self.current_index,
            self.target_index
        );
    }
}

// ── Jumps ──

impl ScaleEngine {
    /// Walk to `final_index` one scale at a time.
    ///
    /// Stops playback and slider control, takes the first step now and
    /// leaves one continuation to take each following step once the
    /// current transition has had time to finish. A newer jump replaces
    /// the pending continuation.
    pub fn jump_to_scale(&mut self, final_index: usize) {
        if final_index >= self.scales.len() {
            log::trace!("jump_to_scale({final_index}) out of range, ignored");
            return;
        }
        if self.target_index == final_index {
            return;
        }
        self.motion = self.motion.paused();
        self.autoplay_step.cancel();
        self.chained_jump.cancel();

        let step = if final_index > self.target_index {
            self.target_index + 1
        } else {
            self.target_index - 1
        };
        self.start_transition(step);

        if step != final_index {
            self.chained_jump
                .schedule(self.animation.chained_step_delay(), final_index);
            log::debug!("Chained jump toward {final_index}, next step {step}");
        }
    }

    /// Select `index` directly, without visiting the scales in between.
    ///
    /// Cancels any chained jump, stops playback and slider control, and
    /// enters a transition whose source and target are both `index`.
    pub fn jump_to_scale_immediate(&mut self, index: usize) {
        if index >= self.scales.len() {
            log::trace!("jump_to_scale_immediate({index}) out of range, ignored");
            return;
        }
        self.autoplay_step.cancel();
        self.chained_jump.cancel();
        self.snap_to(index);
        self.motion = Motion::Transitioning {
            progress: 0.0,
            autoplay: false,
        };
        self.camera.retarget();
        log::debug!("Selected scale {index}");
    }

    /// Next step of a chained jump.
    pub(super) fn continue_jump(&mut self, final_index: usize) {
        if self.motion.is_playing() || self.motion.is_slider_controlled() {
            log::trace!("Stale chained jump toward {final_index} ignored");
            return;
        }
        if self.target_index != final_index {
            self.jump_to_scale(final_index);
        }
    }
}

// ── Slider ──

impl ScaleEngine {
    /// Scrub to a continuous position, clamped to `[0, N-1]`.
    ///
    /// A request more than one scale away from the current target (while
    /// no transition runs) becomes a chained jump so no scale is skipped.
    /// Otherwise the slider takes over and the position blends toward the
    /// request over the settle time, or lands on it at once when the
    /// settle time is zero.
    pub fn set_continuous_position(&mut self, position: f32) {
        if !position.is_finite() {
            log::trace!("set_continuous_position({position}) ignored");
            return;
        }
        let last = self.scales.last_index();
        let position = position.clamp(0.0, last as f32);
        let rounded = position.round() as usize;

        if rounded.abs_diff(self.target_index) > 1
            && !self.motion.is_transitioning()
        {
            self.jump_to_scale(rounded);
            return;
        }

        self.autoplay_step.cancel();
        self.chained_jump.cancel();

        let settle = self.animation.slider_settle;
        let (start, rate) = if settle > 0.0 {
            let start = self.reported_position();
            (start, (position - start).abs() / settle)
        } else {
            (position, 0.0)
        };
        self.position = start;
        self.motion = Motion::SliderBlending {
            target: position,
            rate,
        };
        self.sync_slider_indices();
    }

    /// Leave slider control on the nearest whole scale.
    fn release_slider(&mut self) {
        let index = (self.position.round().max(0.0) as usize)
            .min(self.scales.last_index());
        self.snap_to(index);
        self.motion = Motion::Idle;
    }

    /// Settle both indices and the position on `index`.
    fn snap_to(&mut self, index: usize) {
        self.current_index = index;
        self.target_index = index;
        self.position = index as f32;
    }
}

// ── Speed and spin ──

impl ScaleEngine {
    /// Set the playback speed, clamped to `[0.1, 3.0]`. NaN is ignored.
    pub fn set_speed(&mut self, speed: f32) {
        if speed.is_nan() {
            return;
        }
        self.speed = clamp_speed(speed);
    }

    /// Enable or disable the object spin.
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    /// Flip the object spin; returns the new state.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        self.auto_rotate
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{engine, run, sequence, settled_at, FRAME};

    fn step_past_transition(engine: &mut super::ScaleEngine) {
        let delay = engine.animation.chained_step_delay();
        engine.update(delay + 0.01);
    }

    #[test]
    fn play_waits_for_start_delay() {
        let mut engine = engine(5);
        engine.play();
        assert!(engine.is_playing());
        assert!(!engine.is_transitioning());
        engine.update(0.05);
        assert!(!engine.is_transitioning());
        engine.update(0.06);
        assert!(engine.is_transitioning());
        assert_eq!(engine.target_index(), 1);
    }

    #[test]
    fn play_is_idempotent() {
        let mut engine = engine(5);
        engine.play();
        engine.update(0.05);
        engine.play();
        // The first schedule is kept, so the step still lands at 0.1s.
        engine.update(0.06);
        assert!(engine.is_transitioning());
    }

    #[test]
    fn autoplay_dwells_between_steps() {
        let mut engine = engine(5);
        engine.play();
        engine.update(0.1);
        engine.update(3.0);
        assert_eq!(engine.current_index(), 1);
        assert!(!engine.is_transitioning());
        assert!(engine.is_playing());
        engine.update(0.9);
        assert!(!engine.is_transitioning());
        engine.update(0.11);
        assert!(engine.is_transitioning());
        assert_eq!(engine.target_index(), 2);
    }

    #[test]
    fn autoplay_pauses_at_end_and_restarts_from_start() {
        let mut engine = engine(3);
        engine.play();
        run(&mut engine, 20.0);
        assert_eq!(engine.current_index(), 2);
        assert!(!engine.is_playing());
        assert!(!engine.is_transitioning());

        engine.play();
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.continuous_position(), 0.0);
        run(&mut engine, 0.2);
        assert_eq!(engine.target_index(), 1);
    }

    #[test]
    fn single_scale_play_pauses_immediately() {
        let mut engine = engine(1);
        engine.play();
        run(&mut engine, 0.5);
        assert!(!engine.is_playing());
        assert_eq!(engine.current_index(), 0);
    }

    #[test]
    fn pause_lets_transition_finish() {
        let mut engine = engine(5);
        engine.play();
        engine.update(0.1);
        engine.update(1.0);
        engine.pause();
        assert!(!engine.is_playing());
        assert!(engine.is_transitioning());
        run(&mut engine, 2.1);
        assert_eq!(engine.current_index(), 1);
        run(&mut engine, 5.0);
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn play_mid_transition_continues_after_settle() {
        let mut engine = engine(5);
        engine.next_scale();
        engine.update(1.0);
        engine.play();
        assert!(engine.is_playing());
        assert!(engine.is_transitioning());
        engine.update(2.01);
        assert_eq!(engine.current_index(), 1);
        engine.update(1.01);
        assert_eq!(engine.target_index(), 2);
    }

    #[test]
    fn toggle_playback_flips_state() {
        let mut engine = engine(4);
        engine.toggle_playback();
        assert!(engine.is_playing());
        engine.toggle_playback();
        assert!(!engine.is_playing());
    }

    #[test]
    fn reset_clears_everything() {
        let mut engine = engine(5);
        engine.play();
        run(&mut engine, 5.0);
        engine.jump_to_scale(4);
        engine.update(0.5);
        engine.reset();
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.source_index(), 0);
        assert_eq!(engine.target_index(), 0);
        assert!(!engine.is_transitioning());
        assert!(!engine.is_playing());
        assert_eq!(engine.rotation_angle(), 0.0);
        assert_eq!(engine.pending_jump_target(), None);

        // Nothing left scheduled.
        run(&mut engine, 10.0);
        assert_eq!(engine.current_index(), 0);
        assert!(!engine.is_transitioning());
    }

    #[test]
    fn steps_stop_at_boundaries() {
        let mut engine = engine(3);
        engine.prev_scale();
        assert!(!engine.is_transitioning());

        let mut engine = settled_at(3, 2);
        engine.next_scale();
        assert!(!engine.is_transitioning());
        engine.prev_scale();
        assert_eq!(engine.target_index(), 1);
    }

    #[test]
    fn start_transition_ignores_out_of_range() {
        let mut engine = engine(3);
        engine.start_transition(3);
        engine.jump_to_scale(7);
        engine.jump_to_scale_immediate(99);
        assert!(!engine.is_transitioning());
        assert_eq!(engine.current_index(), 0);
    }

    #[test]
    fn chained_jump_visits_every_scale_and_converges() {
        for k in 0..5 {
            let mut engine = engine(5);
            engine.jump_to_scale(k);
            let mut visited = vec![engine.target_index()];
            for _ in 0..4 {
                step_past_transition(&mut engine);
                visited.push(engine.target_index());
            }
            assert_eq!(engine.target_index(), k, "jump to {k}");
            for pair in visited.windows(2) {
                assert!(pair[0].abs_diff(pair[1]) <= 1, "{visited:?}");
            }
        }
    }

    #[test]
    fn chained_jump_downward() {
        let mut engine = settled_at(5, 4);
        engine.jump_to_scale(1);
        assert_eq!(engine.target_index(), 3);
        assert_eq!(engine.pending_jump_target(), Some(1));
        step_past_transition(&mut engine);
        step_past_transition(&mut engine);
        assert_eq!(engine.target_index(), 1);
        assert_eq!(engine.pending_jump_target(), None);
    }

    #[test]
    fn newer_jump_supersedes_pending_one() {
        let mut engine = engine(6);
        engine.jump_to_scale(5);
        engine.update(1.0);
        engine.jump_to_scale(0);
        assert_eq!(engine.pending_jump_target(), None);
        assert_eq!(engine.target_index(), 0);
        run(&mut engine, 20.0);
        assert_eq!(engine.current_index(), 0);
    }

    #[test]
    fn jump_stops_autoplay() {
        let mut engine = engine(5);
        engine.play();
        engine.jump_to_scale(3);
        assert!(!engine.is_playing());
        for _ in 0..3 {
            step_past_transition(&mut engine);
        }
        assert_eq!(engine.target_index(), 3);
    }

    #[test]
    fn play_makes_pending_jump_stale() {
        let mut engine = engine(5);
        engine.jump_to_scale(4);
        engine.play();
        assert_eq!(engine.pending_jump_target(), None);
        step_past_transition(&mut engine);
        // Autoplay drives from here, one step per dwell.
        assert!(engine.target_index() <= 2);
    }

    #[test]
    fn slider_cancels_pending_jump() {
        let mut engine = engine(5);
        engine.jump_to_scale(4);
        engine.set_continuous_position(0.5);
        assert!(engine.is_slider_controlled());
        step_past_transition(&mut engine);
        assert!(engine.is_slider_controlled());
        assert!(engine.target_index() <= 1);
    }

    #[test]
    fn immediate_jump_enters_degenerate_crossfade() {
        let mut engine = engine(6);
        engine.jump_to_scale(5);
        engine.jump_to_scale_immediate(4);
        assert!(engine.is_transitioning());
        assert_eq!(engine.source_index(), 4);
        assert_eq!(engine.target_index(), 4);
        assert_eq!(engine.transition_progress(), 0.0);
        assert_eq!(engine.pending_jump_target(), None);
        assert_eq!(engine.continuous_position(), 4.0);
        run(&mut engine, 3.1);
        assert!(!engine.is_transitioning());
        assert_eq!(engine.current_index(), 4);
    }

    #[test]
    fn far_slider_request_chains() {
        let mut engine = engine(5);
        engine.set_continuous_position(2.5);
        assert!(!engine.is_slider_controlled());
        assert!(engine.is_transitioning());
        assert_eq!(engine.target_index(), 1);
        assert_eq!(engine.pending_jump_target(), Some(3));
    }

    #[test]
    fn near_slider_request_blends() {
        let mut engine = settled_at(5, 1);
        engine.set_continuous_position(1.3);
        assert!(engine.is_slider_controlled());
        assert!(!engine.is_transitioning());
        assert_eq!(engine.pending_jump_target(), None);

        run(&mut engine, 0.3 + FRAME);
        assert!((engine.continuous_position() - 1.3).abs() < 1e-4);
        assert_eq!(engine.source_index(), 1);
        assert_eq!(engine.target_index(), 2);
    }

    #[test]
    fn one_step_from_slider_target_keeps_blending() {
        let mut engine = settled_at(5, 1);
        engine.set_continuous_position(1.2);
        run(&mut engine, 0.5);
        assert_eq!(engine.target_index(), 2);

        engine.set_continuous_position(3.0);
        assert!(engine.is_slider_controlled());
        assert!(!engine.is_transitioning());
        assert_eq!(engine.pending_jump_target(), None);
        assert!((engine.continuous_position() - 1.2).abs() < 1e-5);

        engine.update(FRAME);
        let p = engine.continuous_position();
        assert!(p > 1.2 && p < 2.0, "position {p}");
        run(&mut engine, 0.5);
        assert!((engine.continuous_position() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn two_steps_from_slider_target_chains() {
        let mut engine = settled_at(5, 1);
        engine.set_continuous_position(1.2);
        run(&mut engine, 0.5);
        engine.set_continuous_position(4.0);
        assert!(!engine.is_slider_controlled());
        assert_eq!(engine.pending_jump_target(), Some(4));
    }

    #[test]
    fn zero_settle_time_lands_on_request() {
        use crate::engine::ScaleEngine;
        use crate::options::Options;

        let mut options = Options::default();
        options.animation.slider_settle = 0.0;
        let mut engine = ScaleEngine::new(sequence(5), &options);
        engine.set_continuous_position(0.6);
        assert!((engine.continuous_position() - 0.6).abs() < 1e-6);
        engine.update(0.0);
        let p = engine.continuous_position();
        assert!(p.is_finite());
        assert!((p - 0.6).abs() < 1e-6);
        engine.update(FRAME);
        assert!((engine.continuous_position() - 0.6).abs() < 1e-6);
        let info = engine.render_info(&options.display);
        assert!(info.grid_scale.is_finite());
    }

    #[test]
    fn slider_blend_is_gradual() {
        let mut engine = settled_at(5, 1);
        engine.set_continuous_position(2.0);
        engine.update(0.15);
        let midway = engine.continuous_position();
        assert!((midway - 1.5).abs() < 1e-4, "midway {midway}");
    }

    #[test]
    fn slider_clamps_request() {
        let mut engine = settled_at(3, 2);
        engine.set_continuous_position(7.0);
        run(&mut engine, 0.5);
        assert_eq!(engine.continuous_position(), 2.0);
        assert_eq!(engine.current_index(), 2);

        engine.set_continuous_position(f32::NAN);
        assert_eq!(engine.continuous_position(), 2.0);
    }

    #[test]
    fn slider_stops_autoplay() {
        let mut engine = engine(5);
        engine.play();
        engine.set_continuous_position(0.4);
        assert!(!engine.is_playing());
        run(&mut engine, 3.0);
        assert!((engine.continuous_position() - 0.4).abs() < 1e-4);
    }

    #[test]
    fn play_from_slider_settles_on_nearest_scale() {
        let mut engine = settled_at(5, 1);
        engine.set_continuous_position(1.7);
        run(&mut engine, 0.5);
        engine.play();
        assert!(!engine.is_slider_controlled());
        assert_eq!(engine.current_index(), 2);
        assert_eq!(engine.continuous_position(), 2.0);
        run(&mut engine, 0.2);
        assert_eq!(engine.target_index(), 3);
    }

    #[test]
    fn step_from_slider_leaves_slider_control() {
        let mut engine = settled_at(5, 1);
        engine.set_continuous_position(1.5);
        run(&mut engine, 0.5);
        engine.next_scale();
        assert!(!engine.is_slider_controlled());
        assert!(engine.is_transitioning());
        assert_eq!(engine.source_index(), 2);
        assert_eq!(engine.target_index(), 3);
    }

    #[test]
    fn speed_and_spin_setters() {
        let mut engine = engine(3);
        engine.set_speed(10.0);
        assert_eq!(engine.speed(), 3.0);
        engine.set_speed(0.0);
        assert_eq!(engine.speed(), 0.1);
        engine.set_speed(f32::NAN);
        assert_eq!(engine.speed(), 0.1);

        assert!(engine.auto_rotate_enabled());
        assert!(!engine.toggle_auto_rotate());
        engine.set_auto_rotate(true);
        assert!(engine.auto_rotate_enabled());
    }
}
