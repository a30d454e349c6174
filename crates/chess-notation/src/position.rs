//! Read-only adapter over the shakmaty board.
//!
//! Board representation and legal-move generation stay with shakmaty;
//! the codecs consume them through this wrapper. A `Position` is never
//! mutated: [`Position::apply`] returns a successor instead.

use std::fmt;

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, File, Piece, Position as _, Square};

use crate::error::PositionError;
use crate::moves::{Move, MoveTag};

/// Game status of a position, as seen from the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

/// A chess position the notation codecs read from.
#[derive(Debug, Clone)]
pub struct Position {
    chess: Chess,
}

impl Position {
    /// The standard starting position.
    pub fn new() -> Position {
        Position {
            chess: Chess::default(),
        }
    }

    /// Parse FEN text into a position.
    pub fn from_fen(fen: &str) -> Result<Position, PositionError> {
        let setup: Fen = fen.parse().map_err(|e: shakmaty::fen::ParseFenError| PositionError::InvalidFen {
            fen: fen.to_string(),
            reason: e.to_string(),
        })?;
        let chess = setup
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(|e| PositionError::IllegalPosition {
                fen: fen.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Position { chess })
    }

    /// Piece occupying `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.chess.board().piece_at(square)
    }

    /// The recorded en-passant target square, present when the
    /// previous move was a double pawn push.
    pub fn en_passant_target(&self) -> Option<Square> {
        self.chess.ep_square(EnPassantMode::Always)
    }

    /// Side to move.
    pub fn turn(&self) -> Color {
        self.chess.turn()
    }

    /// Every legal move, in the generator's enumeration order, with
    /// semantic tags fully populated. The enumeration order is the
    /// decoders' tie-break order.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.chess
            .legal_moves()
            .iter()
            .filter_map(|m| self.convert(m))
            .collect()
    }

    /// The successor position after a legal move, or `None` if `m`
    /// does not correspond to any legal move here.
    pub fn apply(&self, m: &Move) -> Option<Position> {
        let legals = self.chess.legal_moves();
        let matched = legals.iter().find(|cand| move_matches(cand, m))?;
        let mut next = self.chess.clone();
        next.play_unchecked(*matched);
        Some(Position { chess: next })
    }

    /// Game status, checkmate taking precedence over stalemate and
    /// plain check.
    pub fn status(&self) -> Status {
        if self.chess.is_checkmate() {
            Status::Checkmate
        } else if self.chess.is_stalemate() {
            Status::Stalemate
        } else if self.chess.is_check() {
            Status::Check
        } else {
            Status::Normal
        }
    }

    /// FEN rendering, used by error messages and logs.
    pub fn fen(&self) -> String {
        Fen::from_position(&self.chess, EnPassantMode::Legal).to_string()
    }

    fn convert(&self, m: &shakmaty::Move) -> Option<Move> {
        let mut out = match m {
            shakmaty::Move::Normal {
                from,
                capture,
                to,
                promotion,
                ..
            } => {
                let mut mv = Move::new(*from, *to, *promotion);
                if capture.is_some() {
                    mv.add_tag(MoveTag::Capture);
                }
                mv
            }
            shakmaty::Move::EnPassant { from, to } => Move::new(*from, *to, None)
                .with_tag(MoveTag::EnPassant)
                .with_tag(MoveTag::Capture),
            shakmaty::Move::Castle { king, rook } => {
                let (to, side) = castle_destination(*king, *rook);
                Move::new(*king, to, None).with_tag(side)
            }
            _ => return None,
        };
        let mut next = self.chess.clone();
        next.play_unchecked(*m);
        if next.is_check() {
            out.add_tag(MoveTag::Check);
        }
        Some(out)
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen())
    }
}

/// King destination and castle side for a shakmaty castling move,
/// which stores the king and rook origin squares.
fn castle_destination(king: Square, rook: Square) -> (Square, MoveTag) {
    if rook.file() > king.file() {
        (
            Square::from_coords(File::new(6), king.rank()),
            MoveTag::KingSideCastle,
        )
    } else {
        (
            Square::from_coords(File::new(2), king.rank()),
            MoveTag::QueenSideCastle,
        )
    }
}

fn move_matches(cand: &shakmaty::Move, m: &Move) -> bool {
    match cand {
        shakmaty::Move::Normal {
            from, to, promotion, ..
        } => *from == m.from() && *to == m.to() && *promotion == m.promotion(),
        shakmaty::Move::EnPassant { from, to } => {
            *from == m.from() && *to == m.to() && m.promotion().is_none()
        }
        shakmaty::Move::Castle { king, rook } => {
            let (to, _) = castle_destination(*king, *rook);
            *king == m.from() && to == m.to()
        }
        _ => false,
    }
}
