//! The [`File`] enum represents the files (columns) on a Shogi board.
//!
//! Files are numbered 1..9. File 1 is the rightmost column in board
//! diagrams (nearest Sente's right hand); file 9 is the leftmost.

use crate::helpers::{enum_char_conv, simple_enum};

simple_enum! {
    /// A file (column) on a Shogi board.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub enum File {
        /// File 1 (rightmost).
        One,
        /// File 2.
        Two,
        /// File 3.
        Three,
        /// File 4.
        Four,
        /// File 5 (center).
        Five,
        /// File 6.
        Six,
        /// File 7.
        Seven,
        /// File 8.
        Eight,
        /// File 9 (leftmost).
        Nine
    }
}

enum_char_conv! {
    File, FileParseError {
        One = '1',
        Two = '2',
        Three = '3',
        Four = '4',
        Five = '5',
        Six = '6',
        Seven = '7',
        Eight = '8',
        Nine = '9'
    }
}

impl File {
    /// Flip the file around the central file (File::Five).
    ///
    /// ```
    /// # use shogi_mate1::file::File;
    /// assert_eq!(File::Five.flip(), File::Five);
    /// assert_eq!(File::One.flip(), File::Nine);
    /// ```
    #[inline(always)]
    pub const fn flip(self) -> Self {
        Self::index_const(Self::Nine as usize - self as usize)
    }
}
