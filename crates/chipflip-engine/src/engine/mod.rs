//! Game flow on top of the core board.
//!
//! - [`GameSession`] - Everything one match owns (board, scores, turn, channels)
//! - [`TurnEngine`] - The turn state machine driving a session to its end
//! - [`Traversal`] / [`Score`] - Transition-counting scores for both players
//! - [`is_live`] - Diagonal-based end-of-game check
//! - [`Channels`] / [`GameView`] - What the hosting process plugs in
//!
//! # Game Flow
//!
//! 1. The board is drawn with both traversals and scores
//! 2. The player to move sends a chip code over their channel
//! 3. The code is decoded and the chip flipped, unless it is invalid or sticky
//! 4. The confirmed code goes to the remote side (and to the local echo for local moves)
//! 5. The turn passes; the game ends once either diagonal is uniform
//!
//! # Example
//!
//! ```
//! use std::io::{self, Cursor};
//!
//! use chipflip_engine::{
//!     Board, Channels, GameOutcome, GameSession, GameView, MoveError, PlayerSide, Score,
//!     TurnEngine,
//! };
//!
//! struct Quiet;
//!
//! impl GameView for Quiet {
//!     fn show_board(&mut self, _: &Board, _: Score) -> io::Result<()> { Ok(()) }
//!     fn prompt(&mut self, _: PlayerSide, _: bool) -> io::Result<()> { Ok(()) }
//!     fn move_rejected(&mut self, _: PlayerSide, _: MoveError) -> io::Result<()> { Ok(()) }
//!     fn game_over(&mut self, _: &GameOutcome) -> io::Result<()> { Ok(()) }
//! }
//!
//! let channels = Channels {
//!     local_input: Box::new(Cursor::new("A1\n")),
//!     local_output: Box::new(io::sink()),
//!     remote_input: Box::new(Cursor::new("")),
//!     remote_output: Box::new(io::sink()),
//! };
//! let session = GameSession::new(2, PlayerSide::A, channels).unwrap();
//! let outcome = TurnEngine::new(session, Quiet).run().unwrap();
//! assert_eq!(outcome.winner, PlayerSide::B);
//! ```

pub use self::{
    channel::Channels, game_session::*, score::*, termination::is_live, turn::*, view::GameView,
};

pub(crate) mod channel;
mod game_session;
mod score;
mod termination;
mod turn;
mod view;
