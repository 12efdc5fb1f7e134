use std::io;

use crate::{Board, GameOutcome, MoveError, PlayerSide, Score};

/// Display sink for the local terminal.
///
/// Styling is entirely up to the implementation. Any error returned here ends
/// the session as a disconnect.
pub trait GameView {
    /// Called once per cycle, and once more when the game ends.
    ///
    /// Scores are always freshly computed from `board`. Traversals can be
    /// rebuilt from the board with [`Traversal`](crate::Traversal).
    fn show_board(&mut self, board: &Board, score: Score) -> io::Result<()>;

    /// Called before each read of a move, including retries.
    fn prompt(&mut self, player: PlayerSide, is_local: bool) -> io::Result<()>;

    /// Called only for moves rejected from the local player.
    fn move_rejected(&mut self, player: PlayerSide, error: MoveError) -> io::Result<()>;

    fn game_over(&mut self, outcome: &GameOutcome) -> io::Result<()>;
}
