//! An optional debug-mode invariant validator, gated by the `diagnostics`
//! Cargo feature. Violations are logged via [`log::warn!`] in addition to
//! being returned, so a caller that only logs still sees them.

use super::Board;
use crate::color::Color;
use crate::error::InvariantViolation;
use crate::piece::Piece;

impl Board {
    /// Check the board's structural invariants (§7 of the design docs):
    /// no promoted piece in hand, no double-pawn, no piece stranded with
    /// zero forward moves, hand counts within bounds. Missing kings are
    /// tolerated here since puzzle positions may legitimately omit one
    /// side's king during verification.
    ///
    /// Compiles to a no-op that always returns `Ok(())` unless the
    /// `diagnostics` feature is enabled.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        #[cfg(feature = "diagnostics")]
        {
            self.check_invariants_impl()
        }
        #[cfg(not(feature = "diagnostics"))]
        {
            Ok(())
        }
    }

    #[cfg(feature = "diagnostics")]
    fn check_invariants_impl(&self) -> Result<(), InvariantViolation> {
        for &color in Color::ALL.iter() {
            for (piece, count) in Piece::ALL.iter().take(7).map(|&p| (p, self.hand_count(color, p))) {
                if count > Piece::MAX_HAND[piece as usize] {
                    let violation = InvariantViolation::HandCountExceeded(piece, Piece::MAX_HAND[piece as usize]);
                    log::warn!("{violation}");
                    return Err(violation);
                }
            }

            for &file in crate::file::File::ALL.iter() {
                let pawns_on_file = self
                    .squares_of(color)
                    .filter(|&(sq, piece)| piece == Piece::Pawn && sq.file() == file)
                    .count();
                if pawns_on_file > 1 {
                    let violation = InvariantViolation::DoublePawn(color, file);
                    log::warn!("{violation}");
                    return Err(violation);
                }
            }

            for (sq, piece) in self.squares_of(color) {
                if piece.is_unpromoted() && !piece.can_drop(color, sq) && piece != Piece::King {
                    let violation = InvariantViolation::NoForwardMove(color, sq);
                    log::warn!("{violation}");
                    return Err(violation);
                }
            }
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "diagnostics"))]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn flags_a_pawn_stranded_on_the_last_rank() {
        let board: Board = "P3k4/9/9/9/9/9/9/9/4K4 b - 1".parse().unwrap();
        assert!(board.check_invariants().is_err());
    }
}
