use serde::{Deserialize, Serialize};

/// One of the two seats at the board.
///
/// Player A always moves first. Each side scores along its own traversal of the
/// board (see [`Traversal`](crate::Traversal)).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum PlayerSide {
    #[display("A")]
    A,
    #[display("B")]
    B,
}

impl PlayerSide {
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Position of this side in per-player tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}
