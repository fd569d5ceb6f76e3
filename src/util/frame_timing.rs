//! Frame clock for hosts driving the engine in real time.

use web_time::{Duration, Instant};

/// Longest step handed to the engine after a stall (tab in background,
/// debugger pause), in seconds.
pub const MAX_FRAME_STEP: f32 = 0.25;

/// Frame clock for hosts: produces the engine's `dt`, tracks a smoothed
/// FPS and optionally caps the frame rate.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited).
    target_fps: u32,
    min_frame_duration: Duration,
    last_frame: Instant,
    /// Exponential moving average of the instantaneous FPS.
    smoothed_fps: f32,
    /// Weight of each new sample in the average.
    smoothing: f32,
}

impl FrameTiming {
    /// Frame clock starting now with the given FPS target (0 = unlimited).
    pub fn new(target_fps: u32) -> Self {
        Self {
            target_fps,
            min_frame_duration: min_frame_duration(target_fps),
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to render.
    pub fn should_render(&self) -> bool {
        self.target_fps == 0 || self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Time left until the next frame is due under the FPS cap.
    pub fn until_next_frame(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Close the frame and return its length in seconds, capped at
    /// [`MAX_FRAME_STEP`].
    pub fn end_frame(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if frame_time > 0.0 {
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + frame_time.recip() * self.smoothing;
        }
        frame_time.min(MAX_FRAME_STEP)
    }

    /// Smoothed frames per second.
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

fn min_frame_duration(target_fps: u32) -> Duration {
    if target_fps > 0 {
        Duration::from_secs_f64(1.0 / f64::from(target_fps))
    } else {
        Duration::ZERO
    }
}
