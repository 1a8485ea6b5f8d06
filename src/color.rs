//! The [`Color`] enum — the side to move.

use crate::helpers::{enum_char_conv, simple_enum};

simple_enum! {
    /// A side to move.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Color {
        /// Sente, the first player.
        Black,
        /// Gote, the second player.
        White
    }
}

enum_char_conv! {
    Color, ColorParseError {
        Black = 'b',
        White = 'w'
    }
}

impl Color {
    /// Negate. Usable in const contexts.
    #[inline(always)]
    pub const fn not(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl core::ops::Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        self.not()
    }
}
