use crate::board::Board;
use crate::error::Result;
use crate::rules::Rules;
use crate::types::{Move, Owner};

/// Immutable game position: board plus side to move. Moves produce new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub next: Owner,
}

impl GameState {
    /// Empty board with `rules.first` to move.
    pub fn new(rules: Rules) -> Result<Self> {
        Ok(Self {
            board: Board::new(rules.size)?,
            next: rules.first,
        })
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.board.size()
    }

    /// Ley-lines captured by `owner`.
    #[inline]
    pub fn captured(&self, owner: Owner) -> usize {
        self.board.captured_count(owner)
    }

    #[inline]
    pub fn game_over_threshold(&self) -> usize {
        self.board.layout().game_over_threshold()
    }

    /// True once `owner` holds enough ley-lines to end the game.
    #[inline]
    pub fn has_threshold(&self, owner: Owner) -> bool {
        self.captured(owner) >= self.game_over_threshold()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.has_threshold(Owner::P1) || self.has_threshold(Owner::P2)
    }

    /// Unclaimed cells in layout order, empty once the game is over.
    /// Layout order is the tie-break order of every search.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.empty_cells().map(Move::new).collect()
    }

    #[inline]
    pub fn is_legal(&self, mv: Move) -> bool {
        !self.is_over() && self.board.is_empty(mv.cell)
    }
}

#[inline]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    state.legal_moves()
}

#[inline]
pub fn is_over(state: &GameState) -> bool {
    state.is_over()
}
