//! End-to-end scenarios and quantified invariants for the mate-in-1 solver.

use shogi_mate1::board::Board;
use shogi_mate1::piece::Piece;
use shogi_mate1::shogi_move::Move;
use shogi_mate1::solver;

#[test]
fn corner_mate_by_gold_drop() {
    let board: Board = "8k/9/9/9/9/9/9/9/K8 b G 1".parse().unwrap();
    let result = solver::verify(&board);
    assert!(result.is_mate);
    assert!(result.mate_moves.iter().any(|mv| matches!(mv, Move::Drop { piece: Piece::Gold, .. })));
}

#[test]
fn not_mate_free_king() {
    let board: Board = "9/9/9/9/4k4/9/9/9/4K4 b - 1".parse().unwrap();
    let result = solver::verify(&board);
    assert!(!result.is_mate);
    assert_eq!(result.mate_count, 0);
}

#[test]
fn round_trip_sfen() {
    let sfen = "4k4/9/9/9/9/9/9/9/4K4 b - 1";
    let board: Board = sfen.parse().unwrap();
    assert_eq!(board.to_sfen(), sfen);
}

#[test]
fn apply_undo_pawn_capture() {
    // Black Rook at (file 5, rank 5), White Pawn at (file 5, rank 1).
    let mut board: Board = "4p4/9/9/9/4R4/9/9/9/9 b - 1".parse().unwrap();
    let before = board.clone();
    let mv = Move::BoardMove { from: shogi_mate1::square::Square::E5, to: shogi_mate1::square::Square::A5, promotion: false };

    let undo = board.apply_move(mv);
    assert_eq!(board.piece_on(shogi_mate1::square::Square::A5), Some(Piece::Rook));
    assert_eq!(board.piece_on(shogi_mate1::square::Square::E5), None);
    assert_eq!(board.hand_count(shogi_mate1::color::Color::Black, Piece::Pawn), 1);
    assert_eq!(board.side_to_move(), shogi_mate1::color::Color::White);

    board.undo_move(undo);
    assert_eq!(board, before);
}

#[test]
fn drop_pawn_mate_is_rejected() {
    // White King cornered at (1,1); Black Gold at (3,2) and Silver at (2,3)
    // between them cover all three escape squares, so a Black Pawn dropped
    // at (1,2) would check and leave no reply -- the classic uchifuzume.
    // `legal_moves` must still omit it.
    let board: Board = "8k/6G2/7S1/9/9/9/9/9/K8 b P 1".parse().unwrap();

    let dropped_at_b1 = Move::Drop { piece: Piece::Pawn, to: shogi_mate1::square::Square::B1 };
    assert!(!board.legal_moves().contains(&dropped_at_b1));

    // Confirm it really would have been mate, which is why the rule bites.
    assert!(solver::is_mate_in_1(&board, dropped_at_b1));
}

#[test]
fn nifu_rejected() {
    let board: Board = "4k4/9/9/9/4P4/9/9/9/4K4 b P 1".parse().unwrap();
    assert!(!board
        .legal_moves()
        .iter()
        .any(|mv| matches!(mv, Move::Drop { piece: Piece::Pawn, to } if to.file() == shogi_mate1::file::File::Five)));
}

#[test]
fn forced_promotion_invariant_holds_across_generated_moves() {
    let board: Board = "9/4P4/4k4/9/9/9/9/9/4K4 b - 1".parse().unwrap();
    for mv in board.legal_moves() {
        if let Move::BoardMove { to, promotion, .. } = mv {
            if let Some(piece) = board.piece_on(mv.from().unwrap()) {
                if piece == Piece::Pawn && to.rank() == shogi_mate1::rank::Rank::A {
                    assert!(promotion);
                }
            }
        }
    }
}

#[test]
fn no_legal_move_leaves_mover_in_check() {
    let board: Board = "8k/9/9/9/9/9/4r4/9/K8 b - 1".parse().unwrap();
    for mv in board.legal_moves() {
        let mut sim = board.clone();
        let mover = sim.side_to_move();
        sim.apply_move(mv);
        assert!(!sim.in_check(mover));
    }
}

#[test]
fn mate_characterization_matches_is_mate_in_1() {
    let board: Board = "8k/9/9/9/9/9/9/9/K8 b G 1".parse().unwrap();
    for mv in board.legal_moves() {
        let mut sim = board.clone();
        let mover = sim.side_to_move();
        sim.apply_move(mv);
        let expected = sim.in_check(!mover) && sim.legal_moves().is_empty();
        assert_eq!(solver::is_mate_in_1(&board, mv), expected);
    }
}
