use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, MoveError};

/// Side length of a square board, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    pub const MIN: usize = 1;
    pub const MAX: usize = 9;

    pub const fn new(size: usize) -> Result<Self, ConfigError> {
        if size < Self::MIN || size > Self::MAX {
            return Err(ConfigError { size });
        }
        Ok(Self(size))
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of chips on the board.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.0 * self.0
    }

    #[must_use]
    pub const fn is_even(self) -> bool {
        self.0 % 2 == 0
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = ConfigError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// The two most recently flipped chips, newest first.
///
/// Neither of them may be flipped again until two other flips push them out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StickyChips {
    slots: ArrayVec<usize, 2>,
}

impl StickyChips {
    /// Most recently flipped chip.
    #[must_use]
    pub fn latest(&self) -> Option<usize> {
        self.slots.first().copied()
    }

    /// Chip flipped just before [`latest`](Self::latest).
    #[must_use]
    pub fn previous(&self) -> Option<usize> {
        self.slots.get(1).copied()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.slots.contains(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().copied()
    }

    fn push(&mut self, index: usize) {
        if self.slots.is_full() {
            self.slots.pop();
        }
        self.slots.insert(0, index);
    }
}

/// Grid of chips plus the sticky memory guarding it.
///
/// Chips are stored row-major, so the chip at `(row, col)` has index
/// `row * size + col`. The only mutation is [`flip`](Self::flip).
///
/// # Initial layout
///
/// Odd sizes start with the center chip set and already sticky; even sizes
/// start with the central 2×2 block set and no sticky chips.
///
/// ```
/// use chipflip_engine::{Board, BoardSize};
///
/// let board = Board::new(BoardSize::new(3).unwrap());
/// assert!(board.read(1, 1));
/// assert!(!board.read(0, 0));
/// assert_eq!(board.sticky().latest(), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<bool>,
    sticky: StickyChips,
}

impl Board {
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        let x = size.get();
        let half = x / 2;
        let is_center = |i: usize| {
            if size.is_even() {
                i == half || i + 1 == half
            } else {
                i == half
            }
        };
        let cells = (0..size.cell_count())
            .map(|index| is_center(index / x) && is_center(index % x))
            .collect();

        let mut sticky = StickyChips::default();
        if !size.is_even() {
            sticky.push(size.cell_count() / 2);
        }

        Self {
            size,
            cells,
            sticky,
        }
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    #[must_use]
    pub fn sticky(&self) -> &StickyChips {
        &self.sticky
    }

    /// State of the chip at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the board.
    #[must_use]
    pub fn read(&self, row: usize, col: usize) -> bool {
        let x = self.size.get();
        assert!(row < x && col < x, "({row}, {col}) is outside a {x}x{x} board");
        self.cells[row * x + col]
    }

    /// Chip states in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Toggles the chip at `index` and makes it the latest sticky chip.
    ///
    /// Fails without touching the board if the chip is sticky or off the board.
    pub fn flip(&mut self, index: usize) -> Result<(), MoveError> {
        if self.sticky.contains(index) {
            return Err(MoveError::StuckChip);
        }
        let cell = self.cells.get_mut(index).ok_or(MoveError::InvalidChip)?;
        *cell = !*cell;
        self.sticky.push(index);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn set(&mut self, row: usize, col: usize, state: bool) {
        let x = self.size.get();
        self.cells[row * x + col] = state;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn board(size: usize) -> Board {
        Board::new(BoardSize::new(size).unwrap())
    }

    #[test]
    fn test_board_size_bounds() {
        assert_eq!(BoardSize::new(0), Err(ConfigError { size: 0 }));
        assert_eq!(BoardSize::new(10), Err(ConfigError { size: 10 }));
        for size in BoardSize::MIN..=BoardSize::MAX {
            assert_eq!(BoardSize::new(size).unwrap().get(), size);
        }
    }

    #[test]
    fn test_initial_board_center() {
        for size in BoardSize::MIN..=BoardSize::MAX {
            let board = board(size);
            let half = size / 2;
            for row in 0..size {
                for col in 0..size {
                    let expected = if size % 2 == 0 {
                        (half - 1..=half).contains(&row) && (half - 1..=half).contains(&col)
                    } else {
                        row == half && col == half
                    };
                    assert_eq!(
                        board.read(row, col),
                        expected,
                        "unexpected chip at ({row}, {col}) on a {size}x{size} board",
                    );
                }
            }
        }
    }

    #[test]
    fn test_initial_sticky() {
        for size in BoardSize::MIN..=BoardSize::MAX {
            let board = board(size);
            if size % 2 == 0 {
                assert_eq!(board.sticky().latest(), None);
            } else {
                assert_eq!(board.sticky().latest(), Some(size * size / 2));
            }
            assert_eq!(board.sticky().previous(), None);
        }
    }

    #[test]
    fn test_flip_toggles_and_shifts_sticky() {
        let mut board = board(3);
        board.flip(0).unwrap();
        assert!(board.read(0, 0));
        assert_eq!(board.sticky().latest(), Some(0));
        assert_eq!(board.sticky().previous(), Some(4));

        board.flip(8).unwrap();
        assert!(board.read(2, 2));
        assert_eq!(board.sticky().latest(), Some(8));
        assert_eq!(board.sticky().previous(), Some(0));

        // 4 has been forgotten and may be flipped again
        board.flip(4).unwrap();
        assert!(!board.read(1, 1));
        assert_eq!(board.sticky().iter().collect::<Vec<_>>(), [4, 8]);
    }

    #[test]
    fn test_flip_stuck_chip() {
        let mut board = board(3);
        board.flip(0).unwrap();
        let before = board.clone();
        assert_eq!(board.flip(0), Err(MoveError::StuckChip));
        assert_eq!(board.flip(4), Err(MoveError::StuckChip));
        assert_eq!(board, before);
    }

    #[test]
    fn test_flip_out_of_range() {
        let mut board = board(3);
        let before = board.clone();
        assert_eq!(board.flip(9), Err(MoveError::InvalidChip));
        assert_eq!(board, before);
    }

    #[test]
    fn test_even_board_has_no_sticky_chip() {
        let mut board = board(4);
        board.flip(5).unwrap();
        assert!(!board.read(1, 1));
        assert_eq!(board.sticky().latest(), Some(5));
        assert_eq!(board.sticky().previous(), None);
    }

    fn board_and_moves() -> impl Strategy<Value = (usize, Vec<usize>)> {
        (BoardSize::MIN..=BoardSize::MAX).prop_flat_map(|size| {
            (
                Just(size),
                prop::collection::vec(0..size * size, 0..64),
            )
        })
    }

    proptest! {
        #[test]
        fn test_sticky_chips_never_flip((size, moves) in board_and_moves()) {
            let mut board = board(size);
            for index in moves {
                let _ = board.flip(index);
            }
            for index in board.sticky().iter().collect::<Vec<_>>() {
                let before = board.clone();
                prop_assert_eq!(board.flip(index), Err(MoveError::StuckChip));
                prop_assert_eq!(&board, &before);
            }
        }

        #[test]
        fn test_successful_flip_updates_memory((size, moves) in board_and_moves()) {
            let mut board = board(size);
            for index in moves {
                let before = board.clone();
                match board.flip(index) {
                    Ok(()) => {
                        prop_assert_eq!(board.sticky().latest(), Some(index));
                        prop_assert_eq!(board.sticky().previous(), before.sticky().latest());
                        let changed = board
                            .cells()
                            .iter()
                            .zip(before.cells())
                            .filter(|(a, b)| a != b)
                            .count();
                        prop_assert_eq!(changed, 1);
                    }
                    Err(err) => {
                        prop_assert_eq!(err, MoveError::StuckChip);
                        prop_assert_eq!(&board, &before);
                    }
                }
                if let (Some(latest), Some(previous)) =
                    (board.sticky().latest(), board.sticky().previous())
                {
                    prop_assert_ne!(latest, previous);
                }
            }
        }
    }
}
