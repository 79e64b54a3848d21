use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    P1,
    P2,
}

impl Owner {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Owner::P1 => Owner::P2,
            Owner::P2 => Owner::P1,
        }
    }

    /// Digit used for claimed cells and captured ley-lines on the rendered board.
    #[inline]
    pub fn digit(self) -> char {
        match self {
            Owner::P1 => '1',
            Owner::P2 => '2',
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::P1 => write!(f, "p1"),
            Owner::P2 => write!(f, "p2"),
        }
    }
}

/// The three ley-line families. Each board of size `n` has `n + 1` lines per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    LeftDiagonal,
    RightDiagonal,
    Horizontal,
}

impl Family {
    #[inline]
    pub fn all() -> [Family; 3] {
        [Family::LeftDiagonal, Family::RightDiagonal, Family::Horizontal]
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Family::LeftDiagonal => 0,
            Family::RightDiagonal => 1,
            Family::Horizontal => 2,
        }
    }
}

/// Cell identifiers, in row-major layout order.
pub const LETTERS: [u8; 26] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Layout index of `Z`. No board has 26 cells, so it never names a real cell.
pub const SENTINEL_CELL: u8 = 25;

/// Claim of one cell, addressed by its layout index (0 == `A`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub cell: u8,
}

impl Move {
    pub const INVALID: Move = Move { cell: SENTINEL_CELL };

    #[inline]
    pub fn new(cell: u8) -> Self {
        Self { cell }
    }

    /// Map an uppercase ASCII letter to its cell.
    #[inline]
    pub fn from_letter(letter: char) -> Option<Self> {
        if letter.is_ascii_uppercase() {
            Some(Self { cell: letter as u8 - b'A' })
        } else {
            None
        }
    }

    /// Parse an operator token. Anything other than a single uppercase letter
    /// becomes [`Move::INVALID`]; rejecting it is left to the move enumerator.
    pub fn parse(token: &str) -> Self {
        let mut chars = token.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_letter(c).unwrap_or(Self::INVALID),
            _ => Self::INVALID,
        }
    }

    #[inline]
    pub fn letter(self) -> char {
        LETTERS.get(self.cell as usize).map_or('?', |&b| b as char)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
