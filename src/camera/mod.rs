//! Camera for viewing the reference grid.
//!
//! Provides the perspective camera description handed to the renderer and
//! the rig that smooths its distance from frame to frame.

/// Core camera struct and matrix helpers.
pub mod core;
/// Distance smoothing and eye placement.
pub mod rig;

pub use self::core::Camera;
pub use rig::CameraRig;
