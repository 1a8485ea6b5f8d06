//! The mate-in-1 solver: is a move mate, enumerate the mating moves, check
//! uniqueness, and summarize a position for puzzle-quality filtering.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::shogi_move::Move;

/// Aggregate statistics over a position's legal moves, gathered by
/// [`find_mate_moves`] / [`verify`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub total_legal_moves: usize,
    pub total_checking_moves: usize,
    pub mate_moves: usize,
    /// Mean number of opponent legal replies, averaged over checking moves
    /// only. Zero when there are no checking moves.
    pub average_responses: f64,
}

/// Per-side piece counts by kind-class, used by puzzle-quality filters to
/// reject trivially bare positions without recomputing counts themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceCounts {
    pub pawns: u32,
    pub minors: u32,
    pub majors: u32,
    pub promoted: u32,
    pub hand_total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceCountSummary {
    pub black: PieceCounts,
    pub white: PieceCounts,
}

/// The result of fully verifying a position as a mate-in-1 puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyResult {
    pub is_mate: bool,
    pub is_unique: bool,
    pub mate_count: usize,
    pub mate_moves: Vec<Move>,
    pub stats: Stats,
    pub difficulty: f64,
    pub piece_counts: PieceCountSummary,
}

/// Does playing `mv` on `board` deliver checkmate?
pub fn is_mate_in_1(board: &Board, mv: Move) -> bool {
    let mut after = board.clone();
    let mover = after.side_to_move();
    after.apply_move(mv);
    after.in_check(!mover) && after.legal_moves().is_empty()
}

/// All legal moves that deliver checkmate, together with aggregate
/// statistics over the full legal-move set.
pub fn find_mate_moves(board: &Board) -> (Vec<Move>, Stats) {
    let legal_moves = board.legal_moves();
    let checking_moves = board.checking_moves();

    let mut mate_moves = Vec::new();
    let mut total_responses: usize = 0;
    for &mv in &checking_moves {
        let mut after = board.clone();
        after.apply_move(mv);
        let replies = after.legal_moves().len();
        total_responses += replies;
        if replies == 0 {
            mate_moves.push(mv);
        }
    }

    let average_responses = if checking_moves.is_empty() {
        0.0
    } else {
        total_responses as f64 / checking_moves.len() as f64
    };

    let stats = Stats {
        total_legal_moves: legal_moves.len(),
        total_checking_moves: checking_moves.len(),
        mate_moves: mate_moves.len(),
        average_responses,
    };

    (mate_moves, stats)
}

/// Does `board` have exactly one mating move?
pub fn has_unique_mate(board: &Board) -> bool {
    find_mate_moves(board).0.len() == 1
}

/// A monotone difficulty heuristic derived from a position's own solver
/// statistics: not a meaningful comparison to an external engine's
/// evaluation, but reproducible from `stats` alone.
pub fn difficulty(stats: &Stats) -> f64 {
    0.5 * stats.total_legal_moves as f64
        + 0.3 * (stats.total_legal_moves as f64 - stats.total_checking_moves as f64)
        + 1.0 * stats.average_responses
}

fn count_pieces(board: &Board, color: Color) -> PieceCounts {
    let mut counts = PieceCounts::default();
    for (_, piece) in board.squares_of(color) {
        match piece {
            Piece::Pawn => counts.pawns += 1,
            Piece::Silver | Piece::Knight | Piece::Lance => counts.minors += 1,
            Piece::Bishop | Piece::Rook => counts.majors += 1,
            _ => {}
        }
        if piece.is_promoted() {
            counts.promoted += 1;
        }
    }
    counts.hand_total =
        (0..7).map(|i| board.hand_count(color, Piece::index(i)) as u32).sum();
    counts
}

fn piece_count_summary(board: &Board) -> PieceCountSummary {
    PieceCountSummary { black: count_pieces(board, Color::Black), white: count_pieces(board, Color::White) }
}

/// Fully verify `board` as a mate-in-1 puzzle: whether it is mate, whether
/// the mate is unique, the mating moves, and solver statistics, difficulty,
/// and piece-count summary for puzzle-quality filtering.
pub fn verify(board: &Board) -> VerifyResult {
    let (mate_moves, stats) = find_mate_moves(board);
    VerifyResult {
        is_mate: !mate_moves.is_empty(),
        is_unique: mate_moves.len() == 1,
        mate_count: mate_moves.len(),
        difficulty: difficulty(&stats),
        piece_counts: piece_count_summary(board),
        mate_moves,
        stats,
    }
}
