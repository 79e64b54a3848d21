use crate::error::{Error, Result};
use crate::geometry::{self, Layout, MAX_CELLS, MAX_LINES};
use crate::types::{Family, Owner};

/// Cell ownership plus the capture tag of every ley-line.
///
/// Storage is sized for the largest board so boards are plain `Copy` values;
/// slots past the layout's cell or line count stay `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    // Cells laid out row-major, indexed by layout position
    cells: [Option<Owner>; MAX_CELLS],
    // Capture tags indexed by Family::index(), then line index
    lines: [[Option<Owner>; MAX_LINES]; 3],
}

impl Board {
    pub fn new(size: u8) -> Result<Self> {
        geometry::layout(size).ok_or(Error::Configuration { size })?;
        Ok(Self {
            size,
            cells: [None; MAX_CELLS],
            lines: [[None; MAX_LINES]; 3],
        })
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn layout(&self) -> &'static Layout {
        // size is validated on construction and never changes
        geometry::layout(self.size).unwrap_or_else(|| unreachable!("board size {} validated", self.size))
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.layout().cell_count()
    }

    #[inline]
    pub fn get(&self, idx: u8) -> Option<Owner> {
        self.cells.get(idx as usize).copied().flatten()
    }

    /// Raw write of a cell owner. Does not resolve captures; use
    /// [`crate::apply_move`] to play a move.
    ///
    /// # Panics
    ///
    /// `idx` must be a cell of this board's layout (`idx < cell_count()`).
    #[inline]
    pub fn set(&mut self, idx: u8, owner: Option<Owner>) {
        debug_assert!(
            (idx as usize) < self.cell_count(),
            "cell {idx} outside size-{} board",
            self.size
        );
        self.cells[idx as usize] = owner;
    }

    #[inline]
    pub fn is_empty(&self, idx: u8) -> bool {
        (idx as usize) < self.cell_count() && self.cells[idx as usize].is_none()
    }

    #[inline]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Unclaimed cell indices in layout order.
    pub fn empty_cells(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.cell_count() as u8).filter(move |&idx| self.cells[idx as usize].is_none())
    }

    #[inline]
    pub fn line(&self, family: Family, idx: usize) -> Option<Owner> {
        self.lines[family.index()][idx]
    }

    /// Raw write of a capture tag. Does not check the latch.
    ///
    /// # Panics
    ///
    /// `idx` must be a line of this board's layout (`idx <= size`).
    #[inline]
    pub fn set_line(&mut self, family: Family, idx: usize, tag: Option<Owner>) {
        debug_assert!(
            idx < self.layout().line_count(),
            "line {idx} outside size-{} board",
            self.size
        );
        self.lines[family.index()][idx] = tag;
    }

    /// Capture tags of one family, `size + 1` entries.
    #[inline]
    pub fn lines(&self, family: Family) -> &[Option<Owner>] {
        &self.lines[family.index()][..self.layout().line_count()]
    }

    /// Cells owned by each player on one ley-line, as `(p1, p2)`.
    pub fn line_counts(&self, family: Family, idx: usize) -> (usize, usize) {
        let cells = self.layout().lines(family)[idx];
        cells.iter().fold((0, 0), |(p1, p2), &c| match self.get(c) {
            Some(Owner::P1) => (p1 + 1, p2),
            Some(Owner::P2) => (p1, p2 + 1),
            None => (p1, p2),
        })
    }

    /// Ley-lines captured by `owner` across all three families.
    pub fn captured_count(&self, owner: Owner) -> usize {
        Family::all()
            .iter()
            .map(|&f| self.lines(f).iter().filter(|&&tag| tag == Some(owner)).count())
            .sum()
    }
}
