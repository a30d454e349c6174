//! UCI coordinate notation.
//!
//! The fixed-width origin-destination form used by the Universal Chess
//! Interface: "e2e4", "e1g1" (white short castling), "e7e8q"
//! (promotion). Decoding is purely syntactic and never consults the
//! legal-move list; given a position it additionally infers capture,
//! castle and en-passant tags, but the result may still be illegal and
//! callers validate it themselves.

use shakmaty::{Role, Square};
use tracing::debug;

use crate::error::DecodeError;
use crate::moves::{Move, MoveTag};
use crate::notation::{promotion_role, Notation};
use crate::position::Position;

const NAME: &str = "UCI notation";

#[derive(Debug, Clone, Copy, Default)]
pub struct UciNotation;

impl UciNotation {
    /// Parse coordinate text without a position: a pure syntactic
    /// parse, no tag inference. The text must be exactly four or five
    /// characters, the squares must exist, and a fifth character must
    /// be one of the lowercase promotion letters q, r, b, n.
    pub fn decode_bare(text: &str) -> Result<Move, DecodeError> {
        let err = || DecodeError::without_position(NAME, text);
        let bytes = text.as_bytes();
        if bytes.len() != 4 && bytes.len() != 5 {
            return Err(err());
        }
        let from = Square::from_ascii(&bytes[0..2]).map_err(|_| err())?;
        let to = Square::from_ascii(&bytes[2..4]).map_err(|_| err())?;
        let promotion = match bytes.get(4) {
            Some(&letter) => Some(promotion_role(char::from(letter)).ok_or_else(err)?),
            None => None,
        };
        Ok(Move::new(from, to, promotion))
    }
}

impl Notation for UciNotation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn encode(&self, _pos: &Position, m: &Move) -> String {
        let mut out = String::with_capacity(5);
        out.push_str(&m.from().to_string());
        out.push_str(&m.to().to_string());
        if let Some(role) = m.promotion() {
            out.push(role.char());
        }
        out
    }

    fn decode(&self, pos: &Position, text: &str) -> Result<Move, DecodeError> {
        let mut m = Self::decode_bare(text).map_err(|e| {
            debug!(%text, "malformed UCI move text");
            e.with_position(pos)
        })?;

        let mover = pos.piece_at(m.from());
        match mover.map(|p| p.role) {
            Some(Role::King) => {
                let (from, to) = (m.from(), m.to());
                if (from == Square::E1 && to == Square::G1)
                    || (from == Square::E8 && to == Square::G8)
                {
                    m.add_tag(MoveTag::KingSideCastle);
                } else if (from == Square::E1 && to == Square::C1)
                    || (from == Square::E8 && to == Square::C8)
                {
                    m.add_tag(MoveTag::QueenSideCastle);
                }
            }
            Some(Role::Pawn) => {
                if pos.en_passant_target() == Some(m.to()) {
                    m.add_tag(MoveTag::EnPassant);
                    m.add_tag(MoveTag::Capture);
                }
            }
            _ => {}
        }
        if let (Some(mover), Some(target)) = (mover, pos.piece_at(m.to())) {
            if mover.color != target.color {
                m.add_tag(MoveTag::Capture);
            }
        }
        Ok(m)
    }
}
