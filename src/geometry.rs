//! Static wiring of the triangular grid: row lengths and ley-line membership per
//! board size. Indices are cell positions in row-major layout order.

use crate::types::Family;

pub const MIN_SIZE: u8 = 1;
pub const MAX_SIZE: u8 = 5;

/// Cells on the largest board (size 5).
pub const MAX_CELLS: usize = 25;
/// Lines per family on the largest board.
pub const MAX_LINES: usize = MAX_SIZE as usize + 1;

type Lines = &'static [&'static [u8]];

#[derive(Debug, PartialEq, Eq)]
pub struct Layout {
    pub size: u8,
    pub rows: &'static [u8],
    pub left: Lines,
    pub right: Lines,
    pub horizontal: Lines,
}

impl Layout {
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|&r| r as usize).sum()
    }

    /// Ley-lines per family (`size + 1`).
    #[inline]
    pub fn line_count(&self) -> usize {
        self.size as usize + 1
    }

    #[inline]
    pub fn lines(&self, family: Family) -> Lines {
        match family {
            Family::LeftDiagonal => self.left,
            Family::RightDiagonal => self.right,
            Family::Horizontal => self.horizontal,
        }
    }

    /// Total ley-lines over all three families.
    #[inline]
    pub fn total_lines(&self) -> usize {
        3 * self.line_count()
    }

    /// Captured lines a single player needs to end the game.
    #[inline]
    pub fn game_over_threshold(&self) -> usize {
        self.total_lines().div_ceil(2)
    }
}

/// Owned cells needed to capture a line of `len` cells.
#[inline]
pub const fn line_threshold(len: usize) -> usize {
    len.div_ceil(2)
}

static LAYOUTS: [Layout; MAX_SIZE as usize] = [
    Layout {
        size: 1,
        rows: &[2, 1],
        left: &[&[2, 1], &[0]],
        right: &[&[0, 2], &[1]],
        horizontal: &[&[0, 1], &[2]],
    },
    Layout {
        size: 2,
        rows: &[2, 3, 2],
        left: &[&[6, 4], &[5, 3, 1], &[2, 0]],
        right: &[&[2, 5], &[0, 3, 6], &[1, 4]],
        horizontal: &[&[0, 1], &[2, 3, 4], &[5, 6]],
    },
    Layout {
        size: 3,
        rows: &[2, 3, 4, 3],
        left: &[&[11, 8], &[10, 7, 4], &[9, 6, 3, 1], &[5, 2, 0]],
        right: &[&[5, 9], &[2, 6, 10], &[0, 3, 7, 11], &[1, 4, 8]],
        horizontal: &[&[0, 1], &[2, 3, 4], &[5, 6, 7, 8], &[9, 10, 11]],
    },
    Layout {
        size: 4,
        rows: &[2, 3, 4, 5, 4],
        left: &[
            &[17, 13],
            &[16, 12, 8],
            &[15, 11, 7, 4],
            &[14, 10, 6, 3, 1],
            &[9, 5, 2, 0],
        ],
        right: &[
            &[9, 14],
            &[5, 10, 15],
            &[2, 6, 11, 16],
            &[0, 3, 7, 12, 17],
            &[1, 4, 8, 13],
        ],
        horizontal: &[
            &[0, 1],
            &[2, 3, 4],
            &[5, 6, 7, 8],
            &[9, 10, 11, 12, 13],
            &[14, 15, 16, 17],
        ],
    },
    Layout {
        size: 5,
        rows: &[2, 3, 4, 5, 6, 5],
        left: &[
            &[24, 19],
            &[23, 18, 13],
            &[22, 17, 12, 8],
            &[21, 16, 11, 7, 4],
            &[20, 15, 10, 6, 3, 1],
            &[14, 9, 5, 2, 0],
        ],
        right: &[
            &[14, 20],
            &[9, 15, 21],
            &[5, 10, 16, 22],
            &[2, 6, 11, 17, 23],
            &[0, 3, 7, 12, 18, 24],
            &[1, 4, 8, 13, 19],
        ],
        horizontal: &[
            &[0, 1],
            &[2, 3, 4],
            &[5, 6, 7, 8],
            &[9, 10, 11, 12, 13],
            &[14, 15, 16, 17, 18, 19],
            &[20, 21, 22, 23, 24],
        ],
    },
];

/// Layout for a supported board size, `None` outside `MIN_SIZE..=MAX_SIZE`.
#[inline]
pub fn layout(size: u8) -> Option<&'static Layout> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Some(&LAYOUTS[usize::from(size - 1)])
    } else {
        None
    }
}
