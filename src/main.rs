//! A small CLI front-end for the solver: read one SFEN position (from the
//! first argument, or from stdin if no argument is given), verify whether
//! it is checkmate in exactly one move, and print the result.

use std::io::Read;
use std::process::ExitCode;

use shogi_mate1::board::Board;
use shogi_mate1::solver;

fn read_sfen() -> Result<String, std::io::Error> {
    if let Some(arg) = std::env::args().nth(1) {
        return Ok(arg);
    }
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input.trim().to_string())
}

fn main() -> ExitCode {
    env_logger::init();

    let sfen = match read_sfen() {
        Ok(sfen) => sfen,
        Err(err) => {
            log::error!("failed to read SFEN input: {err}");
            return ExitCode::FAILURE;
        }
    };

    let board: Board = match sfen.parse() {
        Ok(board) => board,
        Err(err) => {
            log::error!("invalid SFEN `{sfen}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = solver::verify(&board);

    if result.is_mate {
        println!("mate in 1: yes ({} mating move{})", result.mate_count, if result.mate_count == 1 { "" } else { "s" });
        println!("unique: {}", result.is_unique);
        for mv in &result.mate_moves {
            println!("  {mv}");
        }
    } else {
        println!("mate in 1: no");
    }

    println!(
        "legal moves: {}, checking moves: {}, average responses to check: {:.2}",
        result.stats.total_legal_moves, result.stats.total_checking_moves, result.stats.average_responses
    );
    println!("difficulty: {:.2}", result.difficulty);

    ExitCode::SUCCESS
}
