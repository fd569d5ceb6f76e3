//! Per-frame render snapshot.
//!
//! Projects the engine state into draw parameters without mutating it:
//! one object when settled, two crossfading objects otherwise, with the
//! grid scale blended in log space so the grid moves smoothly across
//! orders of magnitude.

use super::ScaleEngine;
use crate::animation::{log_lerp, BlendContext, EasingFunction, Motion};
use crate::options::DisplayOptions;
use crate::render::{RenderInfo, RenderObject};
use crate::scale::{format_grid_scale, ScaleDescriptor};

/// Below this blend factor a non-slider frame shows the source alone.
pub const BLEND_EPSILON: f32 = 0.001;

impl ScaleEngine {
    /// Blend factor for this frame: the fractional slider position, the
    /// eased transition progress, or nothing when settled.
    pub fn blend_context(&self) -> BlendContext {
        match self.motion {
            Motion::SliderBlending { .. } => {
                BlendContext::linear(self.position - self.current_index as f32)
            }
            Motion::Transitioning { progress, .. } => {
                BlendContext::eased(progress, EasingFunction::CubicInOut)
            }
            Motion::Idle | Motion::Autoplaying => BlendContext::settled(),
        }
    }

    /// Draw parameters for the current frame.
    pub fn render_info(&self, display: &DisplayOptions) -> RenderInfo {
        let blend = self.blend_context();
        let source = self.scales.clamped(self.current_index);

        let (grid_scale, objects) = if blend.eased_t < BLEND_EPSILON
            && !self.motion.is_slider_controlled()
        {
            let grid_scale = source.grid_scale;
            (
                grid_scale,
                vec![object(self.current_index, source, 1.0, grid_scale)],
            )
        } else {
            let target = self.scales.clamped(self.target_index);
            let grid_scale =
                log_lerp(source.grid_scale, target.grid_scale, blend.eased_t);
            (
                grid_scale,
                vec![
                    object(
                        self.current_index,
                        source,
                        blend.source_alpha(),
                        grid_scale,
                    ),
                    object(
                        self.target_index,
                        target,
                        blend.target_alpha(),
                        grid_scale,
                    ),
                ],
            )
        };

        RenderInfo {
            objects,
            camera_distance: self.camera.distance(),
            rotation_angle: self.rotation_angle,
            grid_scale,
            grid_label: format_grid_scale(grid_scale),
            use_model_colors: display.use_model_colors,
            wireframe: display.wireframe,
            show_grid: display.show_grid,
        }
    }
}

fn object(
    index: usize,
    scale: &ScaleDescriptor,
    alpha: f32,
    grid_scale: f32,
) -> RenderObject {
    RenderObject {
        index,
        alpha,
        scale: scale.render_scale(grid_scale),
        color: scale.color,
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{engine, run, settled_at};
    use super::*;

    fn display() -> DisplayOptions {
        DisplayOptions::default()
    }

    #[test]
    fn settled_frame_draws_one_object() {
        let engine = settled_at(4, 2);
        let info = engine.render_info(&display());
        assert_eq!(info.objects.len(), 1);
        let only = &info.objects[0];
        assert_eq!(only.index, 2);
        assert_eq!(only.alpha, 1.0);
        assert!((only.scale - 1.0).abs() < 1e-6);
        assert_eq!(info.grid_scale, engine.scales().clamped(2).grid_scale);
        assert_eq!(info.grid_label, "100.0 nm");
        assert_eq!(info.camera_distance, 5.0);
    }

    #[test]
    fn render_scale_normalizes_by_model_size() {
        use crate::options::Options;
        use crate::scale::{ScaleDescriptor, ScaleSequence};

        let scales = ScaleSequence::new(vec![ScaleDescriptor::new(
            "cell", 1e-5,
        )
        .with_object_size(2e-5)
        .with_model_bounding_size(4.0)])
        .unwrap();
        let engine = ScaleEngine::new(scales, &Options::default());
        let info = engine.render_info(&display());
        // (2e-5 / 1e-5) / 4
        assert!((info.objects[0].scale - 0.5).abs() < 1e-5);
    }

    #[test]
    fn transition_start_still_draws_source_only() {
        let mut engine = engine(4);
        engine.next_scale();
        let info = engine.render_info(&display());
        assert_eq!(info.objects.len(), 1);
        assert_eq!(info.objects[0].index, 0);
    }

    #[test]
    fn transition_crossfades_with_eased_alpha() {
        let mut engine = engine(4);
        engine.next_scale();
        engine.update(0.75);
        let info = engine.render_info(&display());
        assert_eq!(info.objects.len(), 2);
        // easeInOutCubic(0.25) = 4 * 0.25^3
        let t = 0.0625;
        assert!((info.objects[0].alpha - (1.0 - t)).abs() < 1e-5);
        assert!((info.objects[1].alpha - t).abs() < 1e-5);
        assert_eq!(info.objects[0].index, 0);
        assert_eq!(info.objects[1].index, 1);
    }

    #[test]
    fn slider_midpoint_blends_grid_in_log_space() {
        use crate::options::Options;
        use crate::scale::{ScaleDescriptor, ScaleSequence};

        let scales = ScaleSequence::new(vec![
            ScaleDescriptor::new("atom", 1e-9),
            ScaleDescriptor::new("virus", 1e-6),
        ])
        .unwrap();
        let mut engine = ScaleEngine::new(scales, &Options::default());
        engine.set_continuous_position(0.5);
        run(&mut engine, 0.5);

        let info = engine.render_info(&display());
        let expected = 10f32.powf(-7.5);
        assert!(
            (info.grid_scale - expected).abs() / expected < 1e-3,
            "grid {}",
            info.grid_scale
        );
        assert!((info.grid_scale - 5.0005e-7).abs() > 1e-7);
        assert_eq!(info.objects.len(), 2);
        assert!((info.objects[0].alpha - 0.5).abs() < 1e-4);
        assert!((info.objects[1].alpha - 0.5).abs() < 1e-4);
        // Both objects are sized against the blended grid.
        let ratio = info.objects[1].scale / info.objects[0].scale;
        assert!((ratio - 1000.0).abs() / 1000.0 < 1e-3);
    }

    #[test]
    fn slider_on_whole_position_still_draws_pair() {
        let mut engine = settled_at(4, 1);
        engine.set_continuous_position(1.0);
        run(&mut engine, 0.1);
        let info = engine.render_info(&display());
        assert_eq!(info.objects.len(), 2);
        assert_eq!(info.objects[0].alpha, 1.0);
        assert_eq!(info.objects[1].alpha, 0.0);
    }

    #[test]
    fn immediate_jump_crossfades_scale_with_itself() {
        let mut engine = engine(4);
        engine.jump_to_scale_immediate(3);
        engine.update(0.5);
        let info = engine.render_info(&display());
        assert_eq!(info.objects.len(), 2);
        assert!(info.objects.iter().all(|o| o.index == 3));
        assert_eq!(info.highlights().len(), 1);
    }

    #[test]
    fn display_flag_is_forwarded() {
        let engine = engine(2);
        let display = DisplayOptions {
            use_model_colors: true,
            ..DisplayOptions::default()
        };
        assert!(engine.render_info(&display).use_model_colors);
    }

    #[test]
    fn drawing_toggles_are_forwarded() {
        let engine = engine(2);
        let info = engine.render_info(&DisplayOptions::default());
        assert!(info.wireframe);
        assert!(info.show_grid);

        let display = DisplayOptions {
            wireframe: false,
            show_grid: false,
            ..DisplayOptions::default()
        };
        let info = engine.render_info(&display);
        assert!(!info.wireframe);
        assert!(!info.show_grid);
    }

    #[test]
    fn render_info_does_not_mutate() {
        let mut engine = engine(3);
        engine.next_scale();
        engine.update(1.0);
        let before = engine.render_info(&display());
        let again = engine.render_info(&display());
        assert_eq!(before, again);
    }
}
