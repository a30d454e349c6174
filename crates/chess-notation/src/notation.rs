//! The notation capability and the helpers its implementers share.

use once_cell::sync::Lazy;
use regex::Regex;
use shakmaty::Role;

use crate::error::DecodeError;
use crate::moves::{Move, MoveTag};
use crate::position::{Position, Status};

/// Decoration markers tolerated (and ignored) in decoder input:
/// annotation glyphs, check/mate suffixes, and the "e.p." suffix.
static DECORATIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?!+#]|e\.p\.").unwrap());

/// A move codec: encodes a move as text and decodes text back into a
/// move, given the position the move belongs to.
///
/// Encoding performs no validation and cannot fail; handing it a move
/// that is not legal in `pos` yields an unspecified (but never
/// panicking) string. Decoding either returns a fully formed move or a
/// [`DecodeError`].
pub trait Notation {
    /// Notation name, used in error messages and logs.
    fn name(&self) -> &'static str;

    /// Render `m` as text in this notation.
    fn encode(&self, pos: &Position, m: &Move) -> String;

    /// Parse `text` into the move it denotes in `pos`.
    fn decode(&self, pos: &Position, text: &str) -> Result<Move, DecodeError>;
}

/// Strip decoration markers anywhere in `text`. Applied identically to
/// decoder input and to candidate renderings, so matching is
/// decoration-insensitive.
pub(crate) fn strip_decorations(text: &str) -> String {
    DECORATIONS.replace_all(text, "").into_owned()
}

/// SAN letter for a piece; pawns have none.
pub(crate) fn piece_letter(role: Role) -> Option<char> {
    match role {
        Role::King => Some('K'),
        Role::Queen => Some('Q'),
        Role::Rook => Some('R'),
        Role::Bishop => Some('B'),
        Role::Knight => Some('N'),
        Role::Pawn => None,
    }
}

/// Promotion piece for a lowercase UCI promotion letter.
pub(crate) fn promotion_role(letter: char) -> Option<Role> {
    match letter {
        'q' => Some(Role::Queen),
        'r' => Some(Role::Rook),
        'b' => Some(Role::Bishop),
        'n' => Some(Role::Knight),
        _ => None,
    }
}

/// Check or checkmate suffix for a move. Empty unless the move is
/// tagged as checking; otherwise the move is applied and the successor
/// decides between "#" and "+".
pub(crate) fn check_suffix(pos: &Position, m: &Move) -> &'static str {
    if !m.has_tag(MoveTag::Check) {
        return "";
    }
    match pos.apply(m) {
        Some(next) if next.status() == Status::Checkmate => "#",
        _ => "+",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_every_decoration_marker() {
        assert_eq!(strip_decorations("Qh4#!?"), "Qh4");
        assert_eq!(strip_decorations("exd6e.p."), "exd6");
        assert_eq!(strip_decorations("e4"), "e4");
        assert_eq!(strip_decorations("O-O-O+"), "O-O-O");
        assert_eq!(strip_decorations("+#?!"), "");
    }

    #[test]
    fn piece_letters_cover_every_role() {
        assert_eq!(piece_letter(Role::King), Some('K'));
        assert_eq!(piece_letter(Role::Knight), Some('N'));
        assert_eq!(piece_letter(Role::Pawn), None);
    }

    #[test]
    fn promotion_letters_are_lowercase_and_closed() {
        assert_eq!(promotion_role('q'), Some(Role::Queen));
        assert_eq!(promotion_role('n'), Some(Role::Knight));
        assert_eq!(promotion_role('Q'), None);
        assert_eq!(promotion_role('k'), None);
        assert_eq!(promotion_role('p'), None);
    }
}
