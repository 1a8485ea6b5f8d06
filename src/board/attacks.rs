//! Attack detection: "does the piece on `from` reach `to`", built on the
//! piece model's step offsets and slide directions (`piece.rs`).
//!
//! Sliders are resolved by walking [`Square::try_offset`] one step at a
//! time until the target or a blocker is hit, the same algorithm the
//! move generator itself uses — not by a closed-form geometric predicate.

use super::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// Does the piece on `from` (if any) attack `to`, given the board's current
/// occupancy? Returns `false` if `from` is empty.
pub fn attacks(board: &Board, from: Square, to: Square) -> bool {
    let Some(cp) = board.colored_piece_on(from) else { return false };
    let df = (to.file() as i8) - (from.file() as i8);
    let dr = (to.rank() as i8) - (from.rank() as i8);

    if cp.piece.step_offsets(cp.color).contains(&(df, dr)) {
        return true;
    }

    for &(sf, sr) in cp.piece.slide_directions(cp.color) {
        let mut cur = from;
        loop {
            match cur.try_offset(sf, sr) {
                Some(next) => {
                    if next == to {
                        return true;
                    }
                    if board.colored_piece_on(next).is_some() {
                        break;
                    }
                    cur = next;
                }
                None => break,
            }
        }
    }
    false
}

/// Is `square` attacked by any piece of `by_color`?
pub fn is_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    board.squares_of(by_color).any(|(from, _piece)| attacks(board, from, square))
}

/// Every square that `color`'s piece on `from` pseudo-attacks (ignoring
/// whether moving there would leave the mover's own king in check).
/// Used by the move generator to enumerate destinations.
pub fn reachable_squares(board: &Board, from: Square, piece: Piece, color: Color) -> Vec<Square> {
    let mut out = Vec::new();
    for &(df, dr) in piece.step_offsets(color) {
        if let Some(to) = from.try_offset(df, dr) {
            if !matches!(board.colored_piece_on(to), Some(cp) if cp.color == color) {
                out.push(to);
            }
        }
    }
    for &(sf, sr) in piece.slide_directions(color) {
        let mut cur = from;
        while let Some(next) = cur.try_offset(sf, sr) {
            match board.colored_piece_on(next) {
                Some(cp) if cp.color == color => break,
                Some(_) => {
                    out.push(next);
                    break;
                }
                None => {
                    out.push(next);
                    cur = next;
                }
            }
        }
    }
    out
}
