//! Move generation: pseudo-legal piece moves and drops (honoring forced
//! promotion, nifu, and ikidokoro-nashi), the self-check legality filter,
//! uchifuzume (drop-pawn-mate) detection, and the checking-move subset.

use super::attacks;
use super::Board;
use crate::color::Color;
use crate::file::File;
use crate::piece::Piece;
use crate::shogi_move::Move;
use crate::square::Square;

const HAND_PIECES: [Piece; 7] =
    [Piece::Pawn, Piece::Lance, Piece::Knight, Piece::Silver, Piece::Bishop, Piece::Rook, Piece::Gold];

/// All legal moves for the side to move.
///
/// `check_uchifuzume` gates the drop-pawn-mate test, which itself
/// recurses one ply into the opponent's replies; the recursive call
/// passes `false` so that recursion never goes deeper than two plies.
pub(super) fn legal_moves(board: &Board, check_uchifuzume: bool) -> Vec<Move> {
    pseudo_legal_moves(board)
        .into_iter()
        .filter(|&mv| is_legal(board, mv))
        .filter(|&mv| !(check_uchifuzume && is_uchifuzume(board, mv)))
        .collect()
}

/// The subset of legal moves that place the opponent's king in check.
pub(super) fn checking_moves(board: &Board) -> Vec<Move> {
    legal_moves(board, true).into_iter().filter(|&mv| gives_check(board, mv)).collect()
}

/// Pseudo-legal moves: honors forced promotion, nifu, and
/// ikidokoro-nashi, but not self-check or uchifuzume.
fn pseudo_legal_moves(board: &Board) -> Vec<Move> {
    let side = board.side_to_move();
    let mut moves = Vec::new();

    for (from, piece) in board.squares_of(side) {
        for to in attacks::reachable_squares(board, from, piece, side) {
            push_piece_move(&mut moves, side, piece, from, to);
        }
    }

    for &piece in HAND_PIECES.iter() {
        if board.hand_count(side, piece) == 0 {
            continue;
        }
        for to in Square::ALL {
            if board.piece_on(to).is_some() {
                continue;
            }
            if !piece.can_drop(side, to) {
                continue; // ikidokoro-nashi
            }
            if piece == Piece::Pawn && has_unpromoted_pawn_on_file(board, side, to.file()) {
                continue; // nifu
            }
            moves.push(Move::Drop { piece, to });
        }
    }

    moves
}

fn push_piece_move(moves: &mut Vec<Move>, color: Color, piece: Piece, from: Square, to: Square) {
    if piece.is_promotable() && (piece.can_promote(color, from) || piece.can_promote(color, to)) {
        if piece.must_promote(color, to) {
            moves.push(Move::BoardMove { from, to, promotion: true });
        } else {
            moves.push(Move::BoardMove { from, to, promotion: false });
            moves.push(Move::BoardMove { from, to, promotion: true });
        }
    } else {
        moves.push(Move::BoardMove { from, to, promotion: false });
    }
}

fn has_unpromoted_pawn_on_file(board: &Board, color: Color, file: File) -> bool {
    board.squares_of(color).any(|(sq, piece)| piece == Piece::Pawn && sq.file() == file)
}

/// Does `mv` leave the mover's own king in check?
fn is_legal(board: &Board, mv: Move) -> bool {
    let mut sim = board.clone();
    let mover = sim.side_to_move();
    let undo = sim.apply_move(mv);
    let legal = !sim.in_check(mover);
    sim.undo_move(undo);
    legal
}

/// Does `mv` place the opponent's king in check?
fn gives_check(board: &Board, mv: Move) -> bool {
    let mut sim = board.clone();
    let mover = sim.side_to_move();
    sim.apply_move(mv);
    sim.in_check(!mover)
}

/// Is `mv` an illegal drop-pawn-mate (uchifuzume): a Pawn drop that checks
/// the opponent and leaves them with no legal reply?
fn is_uchifuzume(board: &Board, mv: Move) -> bool {
    if !matches!(mv, Move::Drop { piece: Piece::Pawn, .. }) {
        return false;
    }
    let mut sim = board.clone();
    let mover = sim.side_to_move();
    sim.apply_move(mv);
    if !sim.in_check(!mover) {
        return false;
    }
    legal_moves(&sim, false).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn nifu_forbids_a_second_unpromoted_pawn_on_a_file() {
        let board: Board = "4k4/9/9/9/4P4/9/9/9/4K4 b P 1".parse().unwrap();
        assert!(!board
            .legal_moves()
            .iter()
            .any(|mv| matches!(mv, Move::Drop { piece: Piece::Pawn, to } if to.file() == crate::file::File::Five)));
    }

    #[test]
    fn ikidokoro_nashi_forbids_last_rank_lance_drop() {
        let board: Board = "9/9/9/9/4k4/9/9/9/4K4 b L 1".parse().unwrap();
        assert!(!board
            .legal_moves()
            .iter()
            .any(|mv| matches!(mv, Move::Drop { piece: Piece::Lance, to } if to.rank() == crate::rank::Rank::A)));
    }

    #[test]
    fn forced_promotion_on_last_rank_pawn_push() {
        let board: Board = "9/4P4/4k4/9/9/9/9/9/4K4 b - 1".parse().unwrap();
        let pushes: Vec<_> = board
            .legal_moves()
            .into_iter()
            .filter(|mv| matches!(mv, Move::BoardMove { from, .. } if *from == Square::B5))
            .collect();
        assert_eq!(pushes.len(), 1);
        assert!(pushes[0].is_promotion());
    }
}
