use std::path::PathBuf;

use anyhow::Context as _;
use chipflip_engine::{BoardSize, GameSession, PlayerSide, TurnEngine};

use crate::{
    record::ResultRecord,
    transport::{self, Peer},
    ui::TerminalView,
    util,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Seat {
    A,
    B,
}

impl From<Seat> for PlayerSide {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::A => PlayerSide::A,
            Seat::B => PlayerSide::B,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Board size (1-9)
    #[clap(long, default_value_t = 5)]
    pub(crate) size: usize,
    /// Seat played by this process (A moves first)
    #[clap(long, value_enum, default_value_t = Seat::A)]
    pub(crate) seat: Seat,
    /// Wait for the opponent to connect on this address
    #[clap(long, conflicts_with = "connect", required_unless_present = "connect")]
    pub(crate) listen: Option<String>,
    /// Connect to an opponent waiting on this address
    #[clap(long)]
    pub(crate) connect: Option<String>,
    /// Write the final result as JSON to this file
    #[clap(long)]
    pub(crate) result_json: Option<PathBuf>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        size,
        seat,
        listen,
        connect,
        result_json,
    } = arg;

    println!("chipflip {}", env!("CARGO_PKG_VERSION"));

    // fail on a bad size before waiting for a peer
    BoardSize::new(*size).context("invalid board size")?;

    let peer = match (listen, connect) {
        (Some(addr), _) => Peer::Listen(addr.clone()),
        (None, Some(addr)) => Peer::Connect(addr.clone()),
        (None, None) => anyhow::bail!("either --listen or --connect is required"),
    };
    let channels = transport::open(&peer)?;

    let session = GameSession::new(*size, PlayerSide::from(*seat), channels)
        .context("failed to set up the game")?;
    let mut engine = TurnEngine::new(session, TerminalView::stdout());
    let outcome = engine.run()?;

    if let Some(path) = result_json {
        util::save_json(&ResultRecord::new(outcome), path)?;
    }

    Ok(())
}
