//! Host-side helpers.

pub mod frame_timing;

pub use frame_timing::FrameTiming;
