//! The move value type shared by all notation codecs.

use std::fmt;

use shakmaty::{Role, Square};

/// Semantic annotation attached to a move, inferred from the position
/// it belongs to rather than from notation text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTag {
    KingSideCastle,
    QueenSideCastle,
    Capture,
    EnPassant,
    Check,
}

impl MoveTag {
    const fn bit(self) -> u8 {
        match self {
            MoveTag::KingSideCastle => 1,
            MoveTag::QueenSideCastle => 1 << 1,
            MoveTag::Capture => 1 << 2,
            MoveTag::EnPassant => 1 << 3,
            MoveTag::Check => 1 << 4,
        }
    }
}

/// A move between two squares, with an optional promotion piece and a
/// set of additive [`MoveTag`] flags.
///
/// For castling moves `to` is the king's destination square (the g- or
/// c-file), matching the UCI coordinate convention. `promotion` is
/// `None` for everything but pawn promotions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Role>,
    tags: u8,
}

impl Move {
    /// An untagged move. Tags are added by the position adapter or by
    /// the UCI decoder's inference pass.
    pub fn new(from: Square, to: Square, promotion: Option<Role>) -> Move {
        Move {
            from,
            to,
            promotion,
            tags: 0,
        }
    }

    /// Origin square.
    pub fn from(&self) -> Square {
        self.from
    }

    /// Destination square.
    pub fn to(&self) -> Square {
        self.to
    }

    /// Promotion piece, if this move promotes a pawn.
    pub fn promotion(&self) -> Option<Role> {
        self.promotion
    }

    pub fn has_tag(&self, tag: MoveTag) -> bool {
        self.tags & tag.bit() != 0
    }

    pub fn is_castle(&self) -> bool {
        self.has_tag(MoveTag::KingSideCastle) || self.has_tag(MoveTag::QueenSideCastle)
    }

    pub(crate) fn add_tag(&mut self, tag: MoveTag) {
        self.tags |= tag.bit();
    }

    pub(crate) fn with_tag(mut self, tag: MoveTag) -> Move {
        self.add_tag(tag);
        self
    }
}

impl fmt::Display for Move {
    /// Bare coordinate form ("e2e4", "e7e8q"), used by logs and error
    /// text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            write!(f, "{}", role.char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_additive() {
        let mut m = Move::new(Square::E5, Square::D6, None);
        assert!(!m.has_tag(MoveTag::Capture));
        m.add_tag(MoveTag::Capture);
        m.add_tag(MoveTag::EnPassant);
        assert!(m.has_tag(MoveTag::Capture));
        assert!(m.has_tag(MoveTag::EnPassant));
        assert!(!m.has_tag(MoveTag::Check));
        assert!(!m.is_castle());
    }

    #[test]
    fn displays_coordinate_form() {
        assert_eq!(Move::new(Square::E2, Square::E4, None).to_string(), "e2e4");
        assert_eq!(
            Move::new(Square::E7, Square::D8, Some(Role::Queen)).to_string(),
            "e7d8q"
        );
    }

    #[test]
    fn equality_includes_tags() {
        let plain = Move::new(Square::E4, Square::D5, None);
        let tagged = plain.with_tag(MoveTag::Capture);
        assert_ne!(plain, tagged);
        assert_eq!(tagged, plain.with_tag(MoveTag::Capture));
    }
}
