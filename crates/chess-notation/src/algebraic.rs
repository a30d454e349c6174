//! Standard and long algebraic notation.
//!
//! The two codecs share one rendering routine and differ only in how
//! the origin field is spelled: the FIDE-minimal disambiguator for
//! SAN, the full origin square for long algebraic. Decoding is
//! generate-and-compare: every legal move is rendered with the same
//! routine and matched against the (decoration-stripped) input, so the
//! decoder can never disagree with the encoder about canonical form.

use shakmaty::Role;
use tracing::debug;

use crate::error::DecodeError;
use crate::moves::{Move, MoveTag};
use crate::notation::{check_suffix, piece_letter, strip_decorations, Notation};
use crate::position::Position;

/// How the origin field of an algebraic move is rendered.
#[derive(Debug, Clone, Copy)]
enum OriginStyle {
    /// Empty, file, rank, or both, whichever is minimally unique.
    Minimal,
    /// Always the full two-character origin square.
    FullSquare,
}

/// Standard Algebraic Notation, the official FIDE move notation.
/// Examples: "e4", "Nf3", "exd5", "O-O", "e8=Q#".
#[derive(Debug, Clone, Copy, Default)]
pub struct AlgebraicNotation;

/// Long algebraic notation: the origin square is always spelled out.
/// Examples: "e2e4", "Ng1f3", "e4xd5", "O-O".
#[derive(Debug, Clone, Copy, Default)]
pub struct LongAlgebraicNotation;

impl Notation for AlgebraicNotation {
    fn name(&self) -> &'static str {
        "standard algebraic notation"
    }

    fn encode(&self, pos: &Position, m: &Move) -> String {
        encode_algebraic(pos, m, &pos.legal_moves(), OriginStyle::Minimal)
    }

    fn decode(&self, pos: &Position, text: &str) -> Result<Move, DecodeError> {
        decode_algebraic(self.name(), pos, text, OriginStyle::Minimal)
    }
}

impl Notation for LongAlgebraicNotation {
    fn name(&self) -> &'static str {
        "long algebraic notation"
    }

    fn encode(&self, pos: &Position, m: &Move) -> String {
        encode_algebraic(pos, m, &pos.legal_moves(), OriginStyle::FullSquare)
    }

    fn decode(&self, pos: &Position, text: &str) -> Result<Move, DecodeError> {
        decode_algebraic(self.name(), pos, text, OriginStyle::FullSquare)
    }
}

fn encode_algebraic(pos: &Position, m: &Move, legals: &[Move], style: OriginStyle) -> String {
    let suffix = check_suffix(pos, m);
    if m.has_tag(MoveTag::KingSideCastle) {
        return format!("O-O{suffix}");
    }
    if m.has_tag(MoveTag::QueenSideCastle) {
        return format!("O-O-O{suffix}");
    }

    let role = pos.piece_at(m.from()).map(|p| p.role);
    let origin = match style {
        OriginStyle::Minimal => minimal_disambiguation(pos, m, legals),
        OriginStyle::FullSquare => m.from().to_string(),
    };

    let mut out = String::new();
    if let Some(letter) = role.and_then(piece_letter) {
        out.push(letter);
    }
    out.push_str(&origin);
    if m.has_tag(MoveTag::Capture) || m.has_tag(MoveTag::EnPassant) {
        if role == Some(Role::Pawn) && origin.is_empty() {
            // Capturing pawns are identified by their origin file.
            out.push(m.from().file().char());
        }
        out.push('x');
    }
    out.push_str(&m.to().to_string());
    if let Some(promo) = m.promotion().and_then(piece_letter) {
        out.push('=');
        out.push(promo);
    }
    out.push_str(suffix);
    out
}

fn decode_algebraic(
    name: &'static str,
    pos: &Position,
    text: &str,
    style: OriginStyle,
) -> Result<Move, DecodeError> {
    let wanted = strip_decorations(text);
    let legals = pos.legal_moves();
    for m in &legals {
        let rendered = strip_decorations(&encode_algebraic(pos, m, &legals, style));
        if rendered == wanted {
            return Ok(*m);
        }
    }
    debug!(notation = name, %text, "no legal move matches");
    Err(DecodeError::new(name, text, pos))
}

/// FIDE-minimal origin qualifier for a non-pawn move: the origin file
/// when it alone identifies the piece, the rank when the file is
/// shared with a competitor, both when neither alone suffices.
/// Competitors are legal moves of the same piece (type and color) to
/// the same destination from a different origin.
fn minimal_disambiguation(pos: &Position, m: &Move, legals: &[Move]) -> String {
    let piece = match pos.piece_at(m.from()) {
        Some(p) if p.role != Role::Pawn => p,
        _ => return String::new(),
    };

    let mut competing = false;
    let mut file_required = false;
    let mut rank_required = false;
    for other in legals {
        if other.from() == m.from() || other.to() != m.to() {
            continue;
        }
        if pos.piece_at(other.from()) != Some(piece) {
            continue;
        }
        competing = true;
        if other.from().file() == m.from().file() {
            rank_required = true;
        }
        if other.from().rank() == m.from().rank() {
            file_required = true;
        }
    }

    let mut qualifier = String::new();
    if file_required || (competing && !rank_required) {
        qualifier.push(m.from().file().char());
    }
    if rank_required {
        qualifier.push(m.from().rank().char());
    }
    qualifier
}
