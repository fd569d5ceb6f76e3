use glam::Vec3;

use super::core::Camera;
use crate::options::CameraOptions;

/// Smoothed camera distance.
///
/// The reference grid carries the scale change, so the target distance is
/// the same constant for every scale; the rig only relaxes the current
/// distance toward it (`distance += (target - distance) * rate * dt`).
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    distance: f32,
    target_distance: f32,
    resting_distance: f32,
    smoothing: f32,
    elevation: f32,
    fovy: f32,
    znear: f32,
    zfar: f32,
}

impl CameraRig {
    /// Rig at rest at the configured distance.
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            distance: options.distance,
            target_distance: options.distance,
            resting_distance: options.distance,
            smoothing: options.smoothing,
            elevation: options.elevation,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Current (smoothed) distance.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Distance the rig is relaxing toward.
    pub fn target_distance(&self) -> f32 {
        self.target_distance
    }

    /// Recompute the target distance for the active scale.
    pub fn retarget(&mut self) {
        self.target_distance = self.resting_distance;
    }

    /// Move the camera somewhere else immediately; `smooth` brings it back.
    pub fn displace(&mut self, distance: f32) {
        self.distance = distance;
    }

    /// Relax the distance toward its target by `(target - distance) * dt *
    /// smoothing`.
    ///
    /// The step factor saturates at 1: a frame longer than `1 / smoothing`
    /// seconds lands on the target rather than following the plain formula
    /// past it.
    pub fn smooth(&mut self, dt: f32) {
        let factor = (dt * self.smoothing).clamp(0.0, 1.0);
        self.distance += (self.target_distance - self.distance) * factor;
    }

    /// Eye position: behind and slightly above the grid origin.
    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, self.distance * self.elevation, self.distance)
    }

    /// Look-at camera for the current distance.
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: self.fovy,
            znear: self.znear,
            zfar: self.zfar,
        }
    }
}
