//! The [`Rank`] enum represents the ranks (rows) on a Shogi board.
//!
//! Rank `a` is the top-most rank in board diagrams, viewed from Sente's side.

use crate::color::Color;
use crate::helpers::{enum_char_conv, simple_enum};

simple_enum! {
    /// A rank (row) on a Shogi board.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub enum Rank {
        /// The first (top-most) rank.
        A,
        /// The second rank.
        B,
        /// The third rank.
        C,
        /// The fourth rank.
        D,
        /// The fifth (center) rank.
        E,
        /// The sixth rank.
        F,
        /// The seventh rank.
        G,
        /// The eighth rank.
        H,
        /// The ninth (bottom-most) rank.
        I
    }
}

enum_char_conv! {
    Rank, RankParseError {
        A = 'a',
        B = 'b',
        C = 'c',
        D = 'd',
        E = 'e',
        F = 'f',
        G = 'g',
        H = 'h',
        I = 'i'
    }
}

impl Rank {
    /// Flip the rank around the central rank (Rank::E).
    ///
    /// ```
    /// # use shogi_mate1::rank::Rank;
    /// assert_eq!(Rank::A.flip(), Rank::I);
    /// ```
    #[inline(always)]
    pub const fn flip(self) -> Self {
        Self::index_const(Self::I as usize - self as usize)
    }

    /// Get this rank relative to a color: flips it for Black, since board
    /// diagrams (and this enum) are always oriented from White's starting side.
    #[inline(always)]
    pub const fn relative_to(self, color: Color) -> Self {
        match color {
            Color::White => self,
            Color::Black => self.flip(),
        }
    }
}
