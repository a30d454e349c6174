//! Library error types.

use thiserror::Error;

use crate::position::Position;

/// Failure to decode notation text into a move.
///
/// The single decode error kind: it carries the offending input, the
/// notation that rejected it, and a FEN rendering of the position it
/// was decoded against (`"<none>"` when UCI text is parsed without a
/// position).
#[derive(Debug, Clone, Error)]
#[error("failed to decode {notation} text {text:?} for position {position}")]
pub struct DecodeError {
    /// Name of the notation that attempted the decode.
    pub notation: &'static str,
    /// The raw input text, before decoration stripping.
    pub text: String,
    /// FEN of the position the text was decoded against.
    pub position: String,
}

impl DecodeError {
    pub(crate) fn new(notation: &'static str, text: &str, pos: &Position) -> DecodeError {
        DecodeError {
            notation,
            text: text.to_string(),
            position: pos.to_string(),
        }
    }

    pub(crate) fn without_position(notation: &'static str, text: &str) -> DecodeError {
        DecodeError {
            notation,
            text: text.to_string(),
            position: "<none>".to_string(),
        }
    }

    pub(crate) fn with_position(mut self, pos: &Position) -> DecodeError {
        self.position = pos.to_string();
        self
    }
}

/// Failure to construct a [`Position`] from FEN text.
#[derive(Debug, Clone, Error)]
pub enum PositionError {
    #[error("invalid FEN {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("illegal position {fen:?}: {reason}")]
    IllegalPosition { fen: String, reason: String },
}
