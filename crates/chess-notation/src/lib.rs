//! Bidirectional textual notation codecs for chess moves.
//!
//! Three notations, all implementing the [`Notation`] capability and
//! selectable at runtime behind `&dyn Notation`:
//!
//! - [`UciNotation`]: the fixed-width coordinate form of the
//!   Universal Chess Interface ("e2e4", "e7e8q"),
//! - [`AlgebraicNotation`]: FIDE Standard Algebraic Notation ("e4",
//!   "Nf3", "O-O", "exd8=Q#"),
//! - [`LongAlgebraicNotation`]: algebraic with the origin square
//!   always spelled out ("e2e4", "Ng1f3", "e4xd5").
//!
//! Board bookkeeping and legal-move generation are shakmaty's job; the
//! codecs consume them through the read-only [`Position`] adapter and
//! never mutate a caller's position.
//!
//! ```
//! use chess_notation::{AlgebraicNotation, Notation, Position, UciNotation};
//!
//! let pos = Position::new();
//! let m = UciNotation.decode(&pos, "e2e4")?;
//! assert_eq!(AlgebraicNotation.encode(&pos, &m), "e4");
//! # Ok::<_, chess_notation::DecodeError>(())
//! ```

pub mod algebraic;
pub mod error;
pub mod moves;
pub mod notation;
pub mod position;
pub mod uci;

pub use algebraic::{AlgebraicNotation, LongAlgebraicNotation};
pub use error::{DecodeError, PositionError};
pub use moves::{Move, MoveTag};
pub use notation::Notation;
pub use position::{Position, Status};
pub use uci::UciNotation;

// Re-export the shakmaty vocabulary used in the public API.
pub use shakmaty::{Color, Piece, Role, Square};
