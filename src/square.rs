//! The [`Square`] enum represents the 81 squares on a Shogi board.
//!
//! By convention squares are written as `{file}{rank}`, e.g. "5e" is the
//! center square. Squares are stored in file-major order internally.

use core::convert::TryInto;
use core::str::FromStr;

use crate::color::Color;
use crate::file::File;
use crate::helpers::simple_enum;
use crate::rank::Rank;

macro_rules! define_squares {
    ($($square:ident),*) => {
        simple_enum! {
            /// A square on a Shogi board.
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub enum Square {
                $(
                    #[doc = concat!("The ", stringify!($square), " square.")]
                    $square
                ),*
            }
        }
    }
}

// File-major order: all nine ranks of File::One, then File::Two, etc.
define_squares! {
    A1, B1, C1, D1, E1, F1, G1, H1, I1,
    A2, B2, C2, D2, E2, F2, G2, H2, I2,
    A3, B3, C3, D3, E3, F3, G3, H3, I3,
    A4, B4, C4, D4, E4, F4, G4, H4, I4,
    A5, B5, C5, D5, E5, F5, G5, H5, I5,
    A6, B6, C6, D6, E6, F6, G6, H6, I6,
    A7, B7, C7, D7, E7, F7, G7, H7, I7,
    A8, B8, C8, D8, E8, F8, G8, H8, I8,
    A9, B9, C9, D9, E9, F9, G9, H9, I9
}

#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("the value was not a valid square")]
pub struct SquareParseError;

impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file = chars
            .next()
            .and_then(|c| c.try_into().ok())
            .ok_or(SquareParseError)?;
        let rank = chars
            .next()
            .and_then(|c| c.try_into().ok())
            .ok_or(SquareParseError)?;
        if chars.next().is_some() {
            return Err(SquareParseError);
        }
        Ok(Square::new(file, rank))
    }
}

impl core::fmt::Display for Square {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl Square {
    /// Build a square from a file and a rank.
    #[inline(always)]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self::index_const((file as usize) * 9 + (rank as usize))
    }

    /// The file of this square.
    #[inline(always)]
    pub const fn file(self) -> File {
        File::index_const(self as usize / 9)
    }

    /// The rank of this square.
    #[inline(always)]
    pub const fn rank(self) -> Rank {
        Rank::index_const(self as usize % 9)
    }

    /// Offset this square by a file and rank delta, or `None` if that would
    /// leave the board.
    #[inline(always)]
    pub const fn try_offset(self, file_offset: i8, rank_offset: i8) -> Option<Square> {
        let file_index = self.file() as i8 + file_offset;
        let rank_index = self.rank() as i8 + rank_offset;

        if file_index < 0 || file_index >= 9 || rank_index < 0 || rank_index >= 9 {
            return None;
        }
        Some(Square::new(
            File::index_const(file_index as usize),
            Rank::index_const(rank_index as usize),
        ))
    }

    /// Mirror this square's file around File::Five.
    #[inline(always)]
    pub const fn flip_file(self) -> Self {
        Self::new(self.file().flip(), self.rank())
    }

    /// Mirror this square's rank around Rank::E.
    #[inline(always)]
    pub const fn flip_rank(self) -> Self {
        Self::new(self.file(), self.rank().flip())
    }

    /// Mirror both file and rank (a 180-degree rotation about the center square).
    #[inline(always)]
    pub const fn flip(self) -> Self {
        Self::new(self.file().flip(), self.rank().flip())
    }

    /// This square as seen from `color`'s side of the board: a 180-degree
    /// rotation for White, unchanged for Black.
    #[inline(always)]
    pub const fn relative_to(self, color: Color) -> Self {
        match color {
            Color::Black => self,
            Color::White => self.flip(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_accessors_round_trip() {
        let sq = Square::new(File::Three, Rank::G);
        assert_eq!(sq.file(), File::Three);
        assert_eq!(sq.rank(), Rank::G);
    }

    #[test]
    fn try_offset_respects_board_edges() {
        assert_eq!(Square::A1.try_offset(-1, 0), None);
        assert_eq!(Square::A1.try_offset(0, -1), None);
        assert_eq!(Square::I9.try_offset(1, 0), None);
        assert_eq!(Square::I9.try_offset(0, 1), None);
        assert_eq!(Square::E5.try_offset(1, 1), Some(Square::F6));
    }

    #[test]
    fn flip_is_involutive() {
        for sq in Square::ALL {
            assert_eq!(sq.flip().flip(), sq);
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for sq in Square::ALL {
            let text = sq.to_string();
            assert_eq!(text.parse::<Square>().unwrap(), sq);
        }
    }
}
