//! SFEN (Shogi Forsyth-Edwards Notation) parsing and serialization.
//!
//! The move-number field is accepted as any non-negative integer on parse
//! but is never tracked; [`Display`] always emits the literal `1`.

use core::fmt::{Display, Formatter};
use core::str::FromStr;

use super::Board;
use crate::color::Color;
use crate::error::SfenParseError;
use crate::file::File;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::square::Square;

/// The hand-piece kinds in SFEN's fixed emission order: rook, bishop, gold,
/// silver, knight, lance, pawn.
const HAND_ORDER: [Piece; 7] =
    [Piece::Rook, Piece::Bishop, Piece::Gold, Piece::Silver, Piece::Knight, Piece::Lance, Piece::Pawn];

impl Board {
    /// Parse an SFEN position string.
    ///
    /// ```
    /// # use shogi_mate1::board::Board;
    /// let startpos = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";
    /// let board = Board::from_sfen(startpos).unwrap();
    /// assert_eq!(board.to_sfen(), startpos);
    /// ```
    pub fn from_sfen(sfen: &str) -> Result<Self, SfenParseError> {
        use SfenParseError::*;

        let mut board = Board::empty();
        let mut parts = sfen.split(' ');
        let mut next = || parts.next().ok_or(MissingField);

        parse_board(&mut board, next()?)?;
        parse_side_to_move(&mut board, next()?)?;
        parse_hands(&mut board, next()?)?;

        // The move-number field is optional and, when present, ignored beyond validation.
        if let Some(move_number_str) = parts.next() {
            let n: u32 = move_number_str.parse().map_err(|_| InvalidMoveNumber)?;
            if n == 0 {
                return Err(InvalidMoveNumber);
            }
        }

        if parts.next().is_some() {
            return Err(TooManyFields);
        }

        Ok(board)
    }

    /// Serialize this position to an SFEN string. The move-number field is
    /// always emitted as `1`.
    pub fn to_sfen(&self) -> String {
        self.to_string()
    }
}

fn parse_board(board: &mut Board, s: &str) -> Result<(), SfenParseError> {
    use SfenParseError::InvalidBoard;

    let ranks: Vec<&str> = s.split('/').collect();
    if ranks.len() != 9 {
        return Err(InvalidBoard);
    }

    for (rank_index, row) in ranks.iter().enumerate() {
        let rank = Rank::index_const(rank_index);
        let mut remaining: usize = File::NUM; // counts down from 9 (File::Nine) to 0 (past File::One)
        let mut promoted = false;

        for c in row.chars() {
            if let Some(digit) = c.to_digit(10) {
                if promoted || digit as usize > remaining {
                    return Err(InvalidBoard);
                }
                remaining -= digit as usize;
            } else if c == '+' {
                if promoted {
                    return Err(InvalidBoard);
                }
                promoted = true;
            } else if let Some((piece, color)) = Piece::try_from_char(c) {
                if remaining == 0 {
                    return Err(InvalidBoard);
                }
                remaining -= 1;
                let piece = if promoted { piece.promote() } else { piece };
                let square = Square::new(File::index_const(remaining), rank);
                board.put(color, piece, square);
                promoted = false;
            } else {
                return Err(InvalidBoard);
            }
        }
        if remaining != 0 {
            return Err(InvalidBoard);
        }
    }
    Ok(())
}

fn parse_side_to_move(board: &mut Board, s: &str) -> Result<(), SfenParseError> {
    board.side_to_move = s.parse().map_err(|_| SfenParseError::InvalidSideToMove)?;
    Ok(())
}

fn parse_hands(board: &mut Board, s: &str) -> Result<(), SfenParseError> {
    use SfenParseError::InvalidHands;

    if s == "-" {
        return Ok(());
    }

    let mut count: u32 = 0;
    let mut saw_piece = false;
    for c in s.chars() {
        if let Some(digit) = c.to_digit(10) {
            count = 10 * count + digit;
        } else if let Some((piece, color)) = Piece::try_from_char(c) {
            if count > u8::MAX as u32 {
                return Err(InvalidHands);
            }
            board.set_hand(color, piece, if count > 0 { count as u8 } else { 1 });
            count = 0;
            saw_piece = true;
        } else {
            return Err(InvalidHands);
        }
    }
    if !saw_piece || count > 0 {
        return Err(InvalidHands);
    }
    Ok(())
}

impl FromStr for Board {
    type Err = SfenParseError;

    fn from_str(sfen: &str) -> Result<Self, Self::Err> {
        Board::from_sfen(sfen)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        // Board: nine ranks, top to bottom, each scanning files 9 -> 1.
        for &rank in Rank::ALL.iter() {
            let mut empty_run = 0;
            for &file in File::ALL.iter().rev() {
                let square = Square::new(file, rank);
                if let Some(piece) = self.colored_piece_on(square) {
                    if empty_run > 0 {
                        write!(f, "{}", empty_run)?;
                        empty_run = 0;
                    }
                    write!(f, "{}", piece)?;
                } else {
                    empty_run += 1;
                }
            }
            if empty_run > 0 {
                write!(f, "{}", empty_run)?;
            }
            if (rank as usize) < 8 {
                write!(f, "/")?;
            }
        }

        write!(f, " {}", self.side_to_move())?;

        if self.hands_are_empty() {
            write!(f, " -")?;
        } else {
            write!(f, " ")?;
            for &color in [Color::Black, Color::White].iter() {
                for &piece in HAND_ORDER.iter() {
                    let count = self.hand_count(color, piece);
                    if count > 0 {
                        let piece_str = piece.to_str(color);
                        if count > 1 {
                            write!(f, "{}{}", count, piece_str)?;
                        } else {
                            write!(f, "{}", piece_str)?;
                        }
                    }
                }
            }
        }

        write!(f, " 1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTPOS: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

    #[test]
    fn round_trips_the_starting_position() {
        let board = Board::from_sfen(STARTPOS).unwrap();
        assert_eq!(board.to_sfen(), STARTPOS);
    }

    #[test]
    fn round_trips_a_position_with_hands() {
        let sfen = "4k4/9/9/9/9/9/9/9/4K4 b 2P1r 1";
        let board = Board::from_sfen(sfen).unwrap();
        assert_eq!(board.to_sfen(), sfen);
    }

    #[test]
    fn normalizes_any_move_number_to_one() {
        let board = Board::from_sfen("4k4/9/9/9/9/9/9/9/4K4 b - 42").unwrap();
        assert_eq!(board.to_sfen(), "4k4/9/9/9/9/9/9/9/4K4 b - 1");
    }

    #[test]
    fn rejects_malformed_board_field() {
        assert!(Board::from_sfen("4k3/9/9/9/9/9/9/9/4K4 b - 1").is_err());
    }
}
