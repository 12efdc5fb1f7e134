use std::io;

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Board size outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("board size {size} is not supported (expected {min}..={max})", min = BoardSize::MIN, max = BoardSize::MAX)]
pub struct ConfigError {
    size: usize,
}

/// Recoverable move rejection. The grid is never mutated when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum MoveError {
    #[display("Invalid Chip ID")]
    InvalidChip,
    #[display("Chip is Stuck")]
    StuckChip,
}

/// Fatal session error.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From, derive_more::IsVariant)]
pub enum GameError {
    #[display("{_0}")]
    Config(#[error(source)] ConfigError),
    #[display("Disconnected, Game Over")]
    #[from(ignore)]
    Disconnected(#[error(source)] io::Error),
}
