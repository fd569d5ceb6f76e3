//! Crate-level error types.

use std::fmt;

/// Errors produced by the cosmic-scales crate.
///
/// Control operations on the engine never fail; these only surface at the
/// data boundary (reading catalogs and option presets, building a scale
/// sequence).
#[derive(Debug)]
pub enum ScalesError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Scale catalog JSON parsing failure.
    CatalogParse(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A scale sequence must hold at least one scale.
    EmptySequence,
    /// A scale descriptor violates its invariants.
    InvalidScale {
        /// Position of the offending descriptor in the sequence.
        index: usize,
        /// Which invariant was violated.
        reason: String,
    },
}

impl fmt::Display for ScalesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::CatalogParse(msg) => {
                write!(f, "scale catalog parse error: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::EmptySequence => write!(f, "scale sequence is empty"),
            Self::InvalidScale { index, reason } => {
                write!(f, "invalid scale #{index}: {reason}")
            }
        }
    }
}

impl std::error::Error for ScalesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScalesError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
