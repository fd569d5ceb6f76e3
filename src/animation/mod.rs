//! Transition primitives: easing, interpolation, deferred continuations and
//! the control-mode variant.

pub mod deferred;
pub mod easing;
pub mod interpolation;
pub mod motion;

pub use deferred::Deferred;
pub use easing::{ease_in_out_cubic, EasingFunction};
pub use interpolation::{lerp, log_lerp, BlendContext};
pub use motion::Motion;
