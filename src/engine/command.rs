//! The engine's complete interactive vocabulary.
//!
//! Buttons, the scale list, the slider, keyboard shortcuts and host
//! bindings all express their intent as a [`ScaleCommand`] and hand it to
//! [`ScaleEngine::execute`]. [`KeyAction`] is the subset that can be bound
//! to a key in the options file.

use serde::{Deserialize, Serialize};

use super::ScaleEngine;
use crate::options::KeybindingOptions;

/// A discrete or parameterized operation the engine can perform.
///
/// ```
/// # use cosmic_scales::engine::{ScaleCommand, ScaleEngine};
/// # use cosmic_scales::options::Options;
/// # use cosmic_scales::scale::{ScaleDescriptor, ScaleSequence};
/// # let scales = ScaleSequence::new(vec![
/// #     ScaleDescriptor::new("atom", 1e-10),
/// #     ScaleDescriptor::new("molecule", 1e-9),
/// # ]).unwrap();
/// let mut engine = ScaleEngine::new(scales, &Options::default());
/// engine.execute(ScaleCommand::NextScale);
/// engine.execute(ScaleCommand::SetSpeed { speed: 2.0 });
/// assert!(engine.is_transitioning());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleCommand {
    // ── Playback ────────────────────────────────────────────────────
    /// Start autoplay.
    Play,
    /// Stop autoplay.
    Pause,
    /// Play if paused, pause if playing.
    TogglePlayback,
    /// Back to the first scale, paused.
    Reset,

    // ── Navigation ──────────────────────────────────────────────────
    /// One step toward larger scales.
    NextScale,
    /// One step toward smaller scales.
    PrevScale,
    /// Walk to `index`, visiting every scale in between.
    JumpTo {
        /// Final scale index.
        index: usize,
    },
    /// Select `index` directly (list click).
    Select {
        /// Scale index.
        index: usize,
    },
    /// Scrub to a continuous position (slider drag).
    Scrub {
        /// Real-valued position in `[0, N-1]`.
        position: f32,
    },

    // ── Settings ────────────────────────────────────────────────────
    /// Set the playback speed multiplier.
    SetSpeed {
        /// Requested multiplier; clamped.
        speed: f32,
    },
    /// Enable or disable the object spin.
    SetAutoRotate {
        /// New state.
        enabled: bool,
    },
    /// Flip the object spin.
    ToggleAutoRotate,
}

/// Engine actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_playback = "Space"
/// next_scale = "ArrowRight"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Play/pause.
    TogglePlayback,
    /// Next scale.
    NextScale,
    /// Previous scale.
    PrevScale,
    /// Back to the first scale.
    Reset,
    /// Spin on/off.
    ToggleAutoRotate,
}

impl From<KeyAction> for ScaleCommand {
    fn from(action: KeyAction) -> Self {
        match action {
            KeyAction::TogglePlayback => Self::TogglePlayback,
            KeyAction::NextScale => Self::NextScale,
            KeyAction::PrevScale => Self::PrevScale,
            KeyAction::Reset => Self::Reset,
            KeyAction::ToggleAutoRotate => Self::ToggleAutoRotate,
        }
    }
}

impl ScaleEngine {
    /// Perform `command`.
    pub fn execute(&mut self, command: ScaleCommand) {
        match command {
            ScaleCommand::Play => self.play(),
            ScaleCommand::Pause => self.pause(),
            ScaleCommand::TogglePlayback => self.toggle_playback(),
            ScaleCommand::Reset => self.reset(),
            ScaleCommand::NextScale => self.next_scale(),
            ScaleCommand::PrevScale => self.prev_scale(),
            ScaleCommand::JumpTo { index } => self.jump_to_scale(index),
            ScaleCommand::Select { index } => {
                self.jump_to_scale_immediate(index);
            }
            ScaleCommand::Scrub { position } => {
                self.set_continuous_position(position);
            }
            ScaleCommand::SetSpeed { speed } => self.set_speed(speed),
            ScaleCommand::SetAutoRotate { enabled } => {
                self.set_auto_rotate(enabled);
            }
            ScaleCommand::ToggleAutoRotate => {
                let _ = self.toggle_auto_rotate();
            }
        }
    }

    /// Run the action bound to `key`, if any. Returns whether the key was
    /// handled.
    pub fn handle_key(&mut self, key: &str, bindings: &KeybindingOptions) -> bool {
        let Some(action) = bindings.lookup(key) else {
            return false;
        };
        log::trace!("Key {key} -> {action:?}");
        self.execute(action.into());
        true
    }
}
