//! Browser host bindings.
//!
//! [`WebScaleEngine`] wraps [`ScaleEngine`] for JavaScript: the page owns
//! the `requestAnimationFrame` loop and the WebGL/WebGPU renderer, calls
//! `update(dt)` once per frame and reads `renderInfo()` as JSON.

use wasm_bindgen::prelude::*;

use crate::engine::ScaleEngine;
use crate::options::Options;
use crate::scale::ScaleCatalog;
use crate::ScalesError;

impl From<ScalesError> for JsValue {
    fn from(err: ScalesError) -> Self {
        Self::from_str(&err.to_string())
    }
}

/// Install the panic hook and the console logger.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Scale engine handle exported to JavaScript.
#[wasm_bindgen]
pub struct WebScaleEngine {
    engine: ScaleEngine,
    options: Options,
}

#[wasm_bindgen]
impl WebScaleEngine {
    /// Build from the catalog JSON and an optional options TOML preset.
    #[wasm_bindgen(constructor)]
    pub fn new(
        catalog_json: &str,
        options_toml: Option<String>,
    ) -> Result<WebScaleEngine, JsValue> {
        let mut options = match options_toml {
            Some(toml) => Options::from_toml(&toml)?,
            None => Options::default(),
        };
        let catalog = ScaleCatalog::from_json(catalog_json)?;
        if let Some(duration) = catalog.transition_duration {
            options.animation.transition_duration = duration;
        }
        let engine = ScaleEngine::new(catalog.into_sequence()?, &options);
        log::info!("WebScaleEngine ready ({} scales)", engine.scales().len());
        Ok(Self { engine, options })
    }

    /// Advance by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.engine.update(dt);
    }

    /// Current frame's render snapshot as a JSON string.
    #[wasm_bindgen(js_name = renderInfo)]
    pub fn render_info(&self) -> Result<String, JsValue> {
        let info = self.engine.render_info(&self.options.display);
        serde_json::to_string(&info).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Forward a `KeyboardEvent.code`; returns whether it was bound.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, code: &str) -> bool {
        self.engine.handle_key(code, &self.options.keybindings)
    }

    /// Start autoplay.
    pub fn play(&mut self) {
        self.engine.play();
    }

    /// Stop autoplay.
    pub fn pause(&mut self) {
        self.engine.pause();
    }

    /// Play/pause button.
    #[wasm_bindgen(js_name = togglePlayback)]
    pub fn toggle_playback(&mut self) {
        self.engine.toggle_playback();
    }

    /// Back to the first scale.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Next-scale button.
    #[wasm_bindgen(js_name = nextScale)]
    pub fn next_scale(&mut self) {
        self.engine.next_scale();
    }

    /// Previous-scale button.
    #[wasm_bindgen(js_name = prevScale)]
    pub fn prev_scale(&mut self) {
        self.engine.prev_scale();
    }

    /// Walk to `index` through every scale in between.
    #[wasm_bindgen(js_name = jumpToScale)]
    pub fn jump_to_scale(&mut self, index: usize) {
        self.engine.jump_to_scale(index);
    }

    /// List click: select `index` directly.
    #[wasm_bindgen(js_name = jumpToScaleImmediate)]
    pub fn jump_to_scale_immediate(&mut self, index: usize) {
        self.engine.jump_to_scale_immediate(index);
    }

    /// Slider drag.
    #[wasm_bindgen(js_name = setContinuousPosition)]
    pub fn set_continuous_position(&mut self, position: f32) {
        self.engine.set_continuous_position(position);
    }

    /// Speed slider.
    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&mut self, speed: f32) {
        self.engine.set_speed(speed);
    }

    /// Spin checkbox.
    #[wasm_bindgen(js_name = setAutoRotate)]
    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.engine.set_auto_rotate(enabled);
    }

    /// Model-colors checkbox.
    #[wasm_bindgen(js_name = setUseModelColors)]
    pub fn set_use_model_colors(&mut self, enabled: bool) {
        self.options.display.use_model_colors = enabled;
    }

    /// Wireframe checkbox.
    #[wasm_bindgen(js_name = setWireframe)]
    pub fn set_wireframe(&mut self, enabled: bool) {
        self.options.display.wireframe = enabled;
    }

    /// Grid checkbox.
    #[wasm_bindgen(js_name = setShowGrid)]
    pub fn set_show_grid(&mut self, enabled: bool) {
        self.options.display.show_grid = enabled;
    }

    /// Index the UI should highlight as current.
    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.engine.current_index()
    }

    /// Slider position.
    #[wasm_bindgen(js_name = continuousPosition)]
    pub fn continuous_position(&self) -> f32 {
        self.engine.continuous_position()
    }

    /// Whether autoplay is on.
    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.engine.is_playing()
    }

    /// Previous button enabled state.
    #[wasm_bindgen(js_name = canGoPrev)]
    pub fn can_go_prev(&self) -> bool {
        self.engine.can_go_prev()
    }

    /// Next button enabled state.
    #[wasm_bindgen(js_name = canGoNext)]
    pub fn can_go_next(&self) -> bool {
        self.engine.can_go_next()
    }

    /// Number of scales.
    #[wasm_bindgen(js_name = scaleCount)]
    pub fn scale_count(&self) -> usize {
        self.engine.scales().len()
    }
}
