use std::io;

use crate::{GameError, GameOutcome, GameSession, MoveError, chip_id};

use super::{channel::disconnected, termination::is_live, view::GameView};

/// Where the engine is within the current turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum TurnPhase {
    /// Waiting for the current player's move. The board is redrawn first unless
    /// this is a retry after a rejected move.
    AwaitingMove { render: bool },
    ValidatingMove(String),
    /// A decoded chip, with the text it was read from.
    ApplyingMove { index: usize, text: String },
    Announcing(usize),
    NextPlayer,
    GameOver,
    /// A channel failed. Terminal, like `GameOver`, but without a result.
    Disconnected,
}

/// Drives a [`GameSession`] from the first prompt to the final result.
///
/// Every step runs synchronously; reading a move blocks until the player's
/// channel produces a line or fails.
#[derive(Debug)]
pub struct TurnEngine<V> {
    session: GameSession,
    view: V,
    phase: TurnPhase,
}

impl<V> TurnEngine<V>
where
    V: GameView,
{
    pub fn new(session: GameSession, view: V) -> Self {
        Self {
            session,
            view,
            phase: TurnPhase::AwaitingMove { render: true },
        }
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    /// Plays until one diagonal is uniform, then reports the winner.
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        while !self.phase.is_game_over() {
            self.step()?;
        }

        let outcome = self.session.outcome();
        self.view
            .show_board(self.session.board(), outcome.score)
            .map_err(disconnected)?;
        self.view.game_over(&outcome).map_err(disconnected)?;
        tracing::info!(
            winner = %outcome.winner,
            score = %outcome.score,
            moves = outcome.moves.len(),
            "game over"
        );
        Ok(outcome)
    }

    /// Advances by one phase.
    ///
    /// A channel failure moves the engine to [`TurnPhase::Disconnected`], and
    /// every later step fails again.
    pub fn step(&mut self) -> Result<(), GameError> {
        let phase = std::mem::replace(&mut self.phase, TurnPhase::Disconnected);
        self.phase = self.advance(phase)?;
        Ok(())
    }

    fn advance(&mut self, phase: TurnPhase) -> Result<TurnPhase, GameError> {
        let next = match phase {
            TurnPhase::AwaitingMove { render } => {
                let player = self.session.current();
                if render {
                    let score = self.session.rescore();
                    self.view
                        .show_board(self.session.board(), score)
                        .map_err(disconnected)?;
                }
                let is_local = self.session.channels.is_local(player);
                self.view.prompt(player, is_local).map_err(disconnected)?;
                TurnPhase::ValidatingMove(self.session.channels.read_move(player)?)
            }
            TurnPhase::ValidatingMove(text) => {
                match chip_id::decode(&text, self.session.board().size()) {
                    Ok(index) => TurnPhase::ApplyingMove { index, text },
                    Err(err) => self.reject(&text, err)?,
                }
            }
            TurnPhase::ApplyingMove { index, text } => {
                match self.session.board_mut().flip(index) {
                    Ok(()) => TurnPhase::Announcing(index),
                    Err(err) => self.reject(&text, err)?,
                }
            }
            TurnPhase::Announcing(index) => {
                let player = self.session.current();
                let code = chip_id::encode(index, self.session.board().size());
                tracing::debug!(player = %player, chip = %code, "move accepted");
                self.session.channels.publish(player, &code)?;
                self.session.record_move(code);
                TurnPhase::NextPlayer
            }
            TurnPhase::NextPlayer => {
                self.session.advance_player();
                if is_live(self.session.board()) {
                    TurnPhase::AwaitingMove { render: true }
                } else {
                    TurnPhase::GameOver
                }
            }
            TurnPhase::GameOver => TurnPhase::GameOver,
            TurnPhase::Disconnected => {
                return Err(GameError::Disconnected(io::ErrorKind::NotConnected.into()));
            }
        };
        Ok(next)
    }

    fn reject(&mut self, text: &str, err: MoveError) -> Result<TurnPhase, GameError> {
        let player = self.session.current();
        if self.session.channels.is_local(player) {
            tracing::debug!(player = %player, input = text, error = %err, "local move rejected");
            self.view.move_rejected(player, err).map_err(disconnected)?;
        } else {
            tracing::debug!(player = %player, input = text, error = %err, "remote move rejected");
        }
        Ok(TurnPhase::AwaitingMove { render: false })
    }
}
