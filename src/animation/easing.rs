//! Easing functions for scale transitions.
//!
//! Discrete transitions use a symmetric cubic ease; slider blending is
//! linear so the blend tracks the pointer exactly.

/// Easing function variants for transition curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Symmetric cubic ease-in-out (slow start, fast middle, slow end).
    #[default]
    CubicInOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::CubicInOut => ease_in_out_cubic(t),
        }
    }
}

/// Standard symmetric cubic ease: `4t³` below the midpoint, then
/// `1 - (2 - 2t)³ / 2`.
///
/// Continuous and monotonic on [0, 1] with `f(0) = 0`, `f(0.5) = 0.5`,
/// `f(1) = 1`. Callers are expected to pass t in [0, 1].
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
