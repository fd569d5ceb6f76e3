// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Scale-transition engine for an interactive powers-of-ten
//! visualization.
//!
//! An ordered sequence of scales (atom, molecule, cell, ... galaxy) is
//! walked by a frame-driven state machine. Autoplay, multi-step jumps and
//! slider scrubbing all funnel into one [`engine::ScaleEngine`], which
//! produces a [`render::RenderInfo`] snapshot per frame: the objects to
//! draw with their crossfade alpha and normalized size, the log-blended
//! reference grid scale and its label, and the smoothed camera distance.
//!
//! # Key entry points
//!
//! - [`engine::ScaleEngine`] - state machine and render-info projector
//! - [`scale::ScaleCatalog`] - JSON scale catalog loading
//! - [`options::Options`] - runtime configuration (animation, camera,
//!   display, keybindings)
//! - [`animation`] - easing, log-space interpolation and deferred
//!   continuations
//!
//! # Frame loop
//!
//! ```
//! use cosmic_scales::engine::ScaleEngine;
//! use cosmic_scales::options::Options;
//! use cosmic_scales::scale::ScaleCatalog;
//!
//! let catalog = ScaleCatalog::from_json(
//!     r#"{ "scales": [
//!         { "name": "Atom", "scale": 1e-10 },
//!         { "name": "Molecule", "scale": 1e-9 }
//!     ] }"#,
//! )?;
//! let options = Options::default();
//! let mut engine = ScaleEngine::new(catalog.into_sequence()?, &options);
//!
//! engine.play();
//! for _ in 0..60 {
//!     engine.update(1.0 / 60.0);
//!     let info = engine.render_info(&options.display);
//!     assert!(!info.objects.is_empty());
//! }
//! # Ok::<(), cosmic_scales::error::ScalesError>(())
//! ```

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod options;
pub mod render;
pub mod scale;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{ScaleCommand, ScaleEngine};
pub use error::ScalesError;
pub use render::RenderInfo;
