//! A Shogi mate-in-1 rules engine and solver: board representation, legal
//! move generation honoring Shogi-specific rules (forced promotion, nifu,
//! uchifuzume, self-check), and a solver that verifies whether a position
//! is checkmate in exactly one move.

pub mod board;
pub mod color;
pub mod error;
pub mod file;
mod helpers;
pub mod piece;
pub mod rank;
pub mod shogi_move;
pub mod solver;
pub mod square;

pub use board::Board;
pub use color::Color;
pub use piece::{ColoredPiece, Piece};
pub use shogi_move::Move;
pub use solver::{verify, PieceCounts, PieceCountSummary, Stats, VerifyResult};
