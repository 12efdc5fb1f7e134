use serde::{Deserialize, Serialize};

use crate::{Board, BoardSize, GameError, PlayerSide, Score};

use super::channel::{ChannelTable, Channels};

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub size: BoardSize,
    pub local_seat: PlayerSide,
    pub winner: PlayerSide,
    pub score: Score,
    /// Confirmed moves in play order, as chip codes.
    pub moves: Vec<String>,
}

/// Everything one match owns: board, scores, turn, and the channels to both
/// players.
///
/// Created once per match and driven by [`TurnEngine`](crate::TurnEngine).
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    score: Score,
    current: PlayerSide,
    local_seat: PlayerSide,
    moves: Vec<String>,
    pub(crate) channels: ChannelTable,
}

impl GameSession {
    /// Sets up a fresh board of `size` with player A to move.
    ///
    /// Fails with [`GameError::Config`] if the size is unsupported.
    pub fn new(size: usize, local_seat: PlayerSide, channels: Channels) -> Result<Self, GameError> {
        let size = BoardSize::new(size)?;
        let board = Board::new(size);
        tracing::info!(size = %size, local_seat = %local_seat, "session created");
        Ok(Self {
            score: Score::compute(&board),
            board,
            current: PlayerSide::A,
            local_seat,
            moves: Vec::new(),
            channels: ChannelTable::new(channels, local_seat),
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Scores as of the last render.
    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// Player to move.
    #[must_use]
    pub fn current(&self) -> PlayerSide {
        self.current
    }

    #[must_use]
    pub fn local_seat(&self) -> PlayerSide {
        self.local_seat
    }

    #[must_use]
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn rescore(&mut self) -> Score {
        self.score = Score::compute(&self.board);
        self.score
    }

    pub(crate) fn record_move(&mut self, code: String) {
        self.moves.push(code);
    }

    pub(crate) fn advance_player(&mut self) {
        self.current = self.current.opponent();
    }

    pub(crate) fn outcome(&mut self) -> GameOutcome {
        let score = self.rescore();
        GameOutcome {
            size: self.board.size(),
            local_seat: self.local_seat,
            winner: score.winner(self.current),
            score,
            moves: self.moves.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::channel::test_util::channels;

    #[test]
    fn test_rejects_unsupported_size() {
        for size in [0, 10, 100] {
            let (channels, _) = channels("", "");
            let err = GameSession::new(size, PlayerSide::A, channels).unwrap_err();
            assert!(err.is_config(), "size {size} should be rejected");
        }
    }

    #[test]
    fn test_new_session() {
        let (channels, _) = channels("", "");
        let session = GameSession::new(5, PlayerSide::B, channels).unwrap();
        assert_eq!(session.current(), PlayerSide::A);
        assert_eq!(session.local_seat(), PlayerSide::B);
        assert_eq!(session.board().size().get(), 5);
        assert_eq!(session.score(), Score::compute(session.board()));
        assert!(session.moves().is_empty());
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = GameOutcome {
            size: BoardSize::new(2).unwrap(),
            local_seat: PlayerSide::A,
            winner: PlayerSide::B,
            score: Score { a: 1, b: 2 },
            moves: vec!["A1".to_owned()],
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "size": 2,
                "local_seat": "A",
                "winner": "B",
                "score": { "a": 1, "b": 2 },
                "moves": ["A1"],
            })
        );
        let back: GameOutcome = serde_json::from_value(json).unwrap();
        assert_eq!(back, outcome);
    }

    #[test]
    fn test_outcome_rejects_bad_size() {
        let json = serde_json::json!({
            "size": 12,
            "local_seat": "A",
            "winner": "B",
            "score": { "a": 1, "b": 2 },
            "moves": [],
        });
        assert!(serde_json::from_value::<GameOutcome>(json).is_err());
    }
}
