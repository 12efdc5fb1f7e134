use crate::Board;

/// Returns `true` while neither diagonal of the board is uniform.
///
/// The main diagonal is compared against `(0, 0)` and the anti-diagonal against
/// `(x - 1, 0)`. As soon as either has no chip differing from its corner the
/// game is over.
#[must_use]
pub fn is_live(board: &Board) -> bool {
    let x = board.size().get();
    let main_broken = (0..x).any(|i| board.read(i, i) != board.read(0, 0));
    if !main_broken {
        return false;
    }
    (0..x).any(|i| board.read(i, x - 1 - i) != board.read(x - 1, 0))
}
