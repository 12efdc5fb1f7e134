pub use self::{board::*, player::*};

pub(crate) mod board;
pub mod chip_id;
pub(crate) mod player;
