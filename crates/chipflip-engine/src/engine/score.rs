use serde::{Deserialize, Serialize};

use crate::{Board, PlayerSide};

/// A player's scoring walk over every chip on the board.
///
/// - A walks row by row, left to right, starting at `(0, 0)`.
/// - B walks column by column, bottom to top, starting at `(x - 1, 0)`.
///
/// Each side's baseline is its starting corner.
#[derive(Debug, Clone, Copy)]
pub struct Traversal<'a> {
    board: &'a Board,
    side: PlayerSide,
}

/// One step of a [`Traversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalStep {
    pub state: bool,
    /// Whether `state` differs from the previous step (or the baseline for the first step).
    pub changed: bool,
}

impl<'a> Traversal<'a> {
    #[must_use]
    pub fn new(board: &'a Board, side: PlayerSide) -> Self {
        Self { board, side }
    }

    #[must_use]
    pub fn side(&self) -> PlayerSide {
        self.side
    }

    /// `(row, col)` of the `i`-th chip in this traversal.
    #[must_use]
    pub fn position(&self, i: usize) -> (usize, usize) {
        let x = self.board.size().get();
        match self.side {
            PlayerSide::A => (i / x, i % x),
            PlayerSide::B => (x - 1 - i % x, i / x),
        }
    }

    #[must_use]
    pub fn baseline(&self) -> bool {
        let x = self.board.size().get();
        match self.side {
            PlayerSide::A => self.board.read(0, 0),
            PlayerSide::B => self.board.read(x - 1, 0),
        }
    }

    pub fn states(&self) -> impl Iterator<Item = bool> + 'a {
        let this = *self;
        (0..self.board.size().cell_count()).map(move |i| {
            let (row, col) = this.position(i);
            this.board.read(row, col)
        })
    }

    pub fn steps(&self) -> impl Iterator<Item = TraversalStep> + 'a {
        self.states().scan(self.baseline(), |prev, state| {
            let changed = state != *prev;
            *prev = state;
            Some(TraversalStep { state, changed })
        })
    }

    /// Number of state changes along the walk.
    #[must_use]
    pub fn score(&self) -> usize {
        self.steps().filter(|step| step.changed).count()
    }
}

/// Both players' scores for one board position.
///
/// Always derived from the board as a whole, never updated incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{a},{b}")]
pub struct Score {
    pub a: usize,
    pub b: usize,
}

impl Score {
    #[must_use]
    pub fn compute(board: &Board) -> Self {
        Self {
            a: Traversal::new(board, PlayerSide::A).score(),
            b: Traversal::new(board, PlayerSide::B).score(),
        }
    }

    /// Higher score wins; a tie goes to `to_move`, the side that did not make the
    /// final flip.
    #[must_use]
    pub const fn winner(&self, to_move: PlayerSide) -> PlayerSide {
        if self.a > self.b {
            PlayerSide::A
        } else if self.b > self.a {
            PlayerSide::B
        } else {
            to_move
        }
    }
}
