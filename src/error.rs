//! Error types for parsing and optional debug-mode invariant checking.

use thiserror::Error;

/// An error parsing an SFEN position string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SfenParseError {
    #[error("the board field is invalid")]
    InvalidBoard,
    #[error("the hands field is invalid")]
    InvalidHands,
    #[error("the side-to-move field is invalid")]
    InvalidSideToMove,
    #[error("the move-number field is invalid")]
    InvalidMoveNumber,
    #[error("the SFEN string is missing a field")]
    MissingField,
    #[error("the SFEN string has too many fields")]
    TooManyFields,
}

/// An error parsing a USI move string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("invalid piece")]
    InvalidPiece,
    #[error("invalid square")]
    InvalidSquare,
    #[error("invalid move format")]
    InvalidFormat,
    #[error("extra characters found")]
    ExtraCharacters,
}

/// A violated board invariant, surfaced only by the debug-mode validator
/// gated behind the `diagnostics` feature (see [`crate::board::Board::check_invariants`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("side {0} has no king on the board")]
    MissingKing(crate::color::Color),
    #[error("side {0} has a promoted piece in hand")]
    PromotedPieceInHand(crate::color::Color),
    #[error("side {0} has more than one pawn on file {1:?}")]
    DoublePawn(crate::color::Color, crate::file::File),
    #[error("side {0} has a piece with no legal forward move at {1:?}")]
    NoForwardMove(crate::color::Color, crate::square::Square),
    #[error("hand count for {0:?} exceeds the maximum of {1}")]
    HandCountExceeded(crate::piece::Piece, u8),
}
