//! Interpolation utilities shared by the render-info projector.

use super::easing::EasingFunction;

/// Per-frame blend context computed once from the active mode, then shared
/// by the grid blend and both crossfading objects so they never desync.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendContext {
    /// Raw progress (0.0 to 1.0) from the transition timer or slider.
    pub raw_t: f32,
    /// Eased progress; the value all interpolation uses.
    pub eased_t: f32,
}

impl BlendContext {
    /// Context with raw progress run through `easing`.
    pub fn eased(raw_t: f32, easing: EasingFunction) -> Self {
        Self {
            raw_t,
            eased_t: easing.evaluate(raw_t),
        }
    }

    /// Linear context (no easing), used while the slider drives position.
    pub fn linear(raw_t: f32) -> Self {
        Self::eased(raw_t, EasingFunction::Linear)
    }

    /// Settled context: nothing in flight.
    pub fn settled() -> Self {
        Self {
            raw_t: 0.0,
            eased_t: 0.0,
        }
    }

    /// Alpha of the outgoing (source) object.
    #[inline]
    pub fn source_alpha(&self) -> f32 {
        1.0 - self.eased_t
    }

    /// Alpha of the incoming (target) object.
    #[inline]
    pub fn target_alpha(&self) -> f32 {
        self.eased_t
    }
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate two positive magnitudes in log10 space.
///
/// `10^lerp(log10(a), log10(b), t)`: the midpoint of 1e-9 and 1e-6 is
/// 1e-7.5, not their arithmetic mean. Evaluated in f64 so blends across
/// many orders of magnitude keep full f32 precision.
#[inline]
pub fn log_lerp(a: f32, b: f32, t: f32) -> f32 {
    let la = f64::from(a).log10();
    let lb = f64::from(b).log10();
    10f64.powf(la + (lb - la) * f64::from(t)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_lerp_midpoint_is_geometric() {
        let mid = log_lerp(1e-9, 1e-6, 0.5);
        let expected = 10f32.powf(-7.5);
        assert!((mid - expected).abs() / expected < 1e-5);
        // Nowhere near the arithmetic midpoint.
        assert!((mid - 5.0005e-7).abs() > 4e-7);
    }

    #[test]
    fn log_lerp_endpoints() {
        assert!((log_lerp(1e-9, 1e-6, 0.0) - 1e-9).abs() / 1e-9 < 1e-5);
        assert!((log_lerp(1e-9, 1e-6, 1.0) - 1e-6).abs() / 1e-6 < 1e-5);
    }

    #[test]
    fn log_lerp_works_downward() {
        let mid = log_lerp(1e4, 1e2, 0.5);
        assert!((mid - 1e3).abs() < 1e-2);
    }

    #[test]
    fn crossfade_alphas_sum_to_one() {
        let ctx = BlendContext::eased(0.3, EasingFunction::CubicInOut);
        assert!((ctx.source_alpha() + ctx.target_alpha() - 1.0).abs() < 1e-6);
        assert!(ctx.eased_t < ctx.raw_t);
    }

    #[test]
    fn linear_context_passes_through() {
        let ctx = BlendContext::linear(0.3);
        assert_eq!(ctx.eased_t, 0.3);
        assert_eq!(BlendContext::settled().target_alpha(), 0.0);
    }
}
