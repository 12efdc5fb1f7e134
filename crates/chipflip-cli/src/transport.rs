use std::{
    io::{self, BufReader},
    net::{TcpListener, TcpStream},
};

use anyhow::Context as _;
use chipflip_engine::Channels;

/// How to reach the remote player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Peer {
    Listen(String),
    Connect(String),
}

/// Opens the connection to the remote player and wires it up with the
/// terminal.
///
/// Local input is stdin and the local echo goes to stdout.
pub(crate) fn open(peer: &Peer) -> anyhow::Result<Channels> {
    let stream = connect(peer)?;
    stream
        .set_nodelay(true)
        .context("Failed to configure connection")?;
    let remote_output = stream
        .try_clone()
        .context("Failed to clone connection handle")?;

    Ok(Channels {
        local_input: Box::new(io::stdin().lock()),
        local_output: Box::new(io::stdout()),
        remote_input: Box::new(BufReader::new(stream)),
        remote_output: Box::new(remote_output),
    })
}

fn connect(peer: &Peer) -> anyhow::Result<TcpStream> {
    match peer {
        Peer::Listen(addr) => {
            let listener =
                TcpListener::bind(addr).with_context(|| format!("Failed to listen on {addr}"))?;
            println!("Waiting for opponent on {addr}...");
            let (stream, remote) = listener
                .accept()
                .with_context(|| format!("Failed to accept opponent on {addr}"))?;
            tracing::info!(%remote, "opponent connected");
            Ok(stream)
        }
        Peer::Connect(addr) => {
            let stream =
                TcpStream::connect(addr).with_context(|| format!("Failed to connect to {addr}"))?;
            tracing::info!(remote = %addr, "connected to opponent");
            Ok(stream)
        }
    }
}
