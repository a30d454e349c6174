//! Round-trip invariants over a suite of positions: decoding a move's
//! own encoding must give the move back, and re-encoding the decoded
//! move must reproduce the canonical rendering.

use chess_notation::{
    AlgebraicNotation, LongAlgebraicNotation, MoveTag, Notation, Position, UciNotation,
};

const POSITIONS: &[&str] = &[
    // Standard start.
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    // Both castles available.
    "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1",
    // En passant on d6.
    "rnbqkb1r/ppp1pppp/5n2/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
    // Promotions, with and without capture.
    "3r4/4P3/8/8/8/8/8/4K2k w - - 0 1",
    // Heavy knight/rook disambiguation.
    "N3k2N/8/8/3N4/N4N1N/2R5/1R6/4K3 w - - 0 1",
    // Two rooks sharing a rank.
    "8/6k1/8/8/R6R/8/8/4K3 w - - 0 1",
    // A checking and a mating move available.
    "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2",
];

#[test]
fn san_and_long_algebraic_roundtrip_every_legal_move() {
    for fen in POSITIONS {
        let pos = Position::from_fen(fen).unwrap();
        for notation in [&AlgebraicNotation as &dyn Notation, &LongAlgebraicNotation] {
            for m in pos.legal_moves() {
                let text = notation.encode(&pos, &m);
                let decoded = notation
                    .decode(&pos, &text)
                    .unwrap_or_else(|e| panic!("{e}"));
                assert_eq!(
                    decoded,
                    m,
                    "{} roundtrip failed for {text:?} in {fen}",
                    notation.name()
                );
                assert_eq!(notation.encode(&pos, &decoded), text);
            }
        }
    }
}

#[test]
fn uci_roundtrip_preserves_everything_but_the_check_tag() {
    for fen in POSITIONS {
        let pos = Position::from_fen(fen).unwrap();
        for m in pos.legal_moves() {
            let text = UciNotation.encode(&pos, &m);
            let decoded = UciNotation.decode(&pos, &text).unwrap();
            assert_eq!(decoded.from(), m.from(), "{text} in {fen}");
            assert_eq!(decoded.to(), m.to(), "{text} in {fen}");
            assert_eq!(decoded.promotion(), m.promotion(), "{text} in {fen}");
            // UCI decoding never searches the board, so the Check tag
            // is the one thing it cannot reconstruct.
            for tag in [
                MoveTag::Capture,
                MoveTag::EnPassant,
                MoveTag::KingSideCastle,
                MoveTag::QueenSideCastle,
            ] {
                assert_eq!(
                    decoded.has_tag(tag),
                    m.has_tag(tag),
                    "{tag:?} mismatch for {text} in {fen}"
                );
            }
            // Canonical rendering is stable across the round trip.
            assert_eq!(UciNotation.encode(&pos, &decoded), text);
        }
    }
}

#[test]
fn decorated_text_decodes_like_bare_text() {
    for fen in POSITIONS {
        let pos = Position::from_fen(fen).unwrap();
        for m in pos.legal_moves() {
            let text = AlgebraicNotation.encode(&pos, &m);
            for decorated in [format!("{text}!?"), format!("{text}+"), format!("{text}#")] {
                assert_eq!(
                    AlgebraicNotation.decode(&pos, &decorated).unwrap(),
                    m,
                    "{decorated} in {fen}"
                );
            }
        }
    }
}
