use std::{
    fmt,
    io::{self, BufRead, Write},
};

use crate::{GameError, PlayerSide};

/// The four line-oriented endpoints a session talks through.
///
/// Supplied by the hosting process. The engine never cares what is behind
/// them; a terminal, a socket, and an in-memory buffer all work the same way.
pub struct Channels {
    /// Moves typed by the local player.
    pub local_input: Box<dyn BufRead>,
    /// Echo of moves confirmed for the local player.
    pub local_output: Box<dyn Write>,
    /// Moves sent by the remote player.
    pub remote_input: Box<dyn BufRead>,
    /// Every confirmed move, sent to the remote player.
    pub remote_output: Box<dyn Write>,
}

impl fmt::Debug for Channels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channels").finish_non_exhaustive()
    }
}

/// Channels resolved per seat.
pub(crate) struct ChannelTable {
    local_seat: PlayerSide,
    inputs: [Box<dyn BufRead>; 2],
    local_output: Box<dyn Write>,
    remote_output: Box<dyn Write>,
}

impl fmt::Debug for ChannelTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelTable")
            .field("local_seat", &self.local_seat)
            .finish_non_exhaustive()
    }
}

impl ChannelTable {
    pub(crate) fn new(channels: Channels, local_seat: PlayerSide) -> Self {
        let Channels {
            local_input,
            local_output,
            remote_input,
            remote_output,
        } = channels;
        let inputs = match local_seat {
            PlayerSide::A => [local_input, remote_input],
            PlayerSide::B => [remote_input, local_input],
        };
        Self {
            local_seat,
            inputs,
            local_output,
            remote_output,
        }
    }

    pub(crate) fn is_local(&self, side: PlayerSide) -> bool {
        side == self.local_seat
    }

    /// Reads one line from `side`'s input, without its line terminator.
    ///
    /// End of stream counts as a disconnect.
    pub(crate) fn read_move(&mut self, side: PlayerSide) -> Result<String, GameError> {
        let mut line = String::new();
        let n = self.inputs[side.index()]
            .read_line(&mut line)
            .map_err(disconnected)?;
        if n == 0 {
            return Err(disconnected(io::ErrorKind::UnexpectedEof.into()));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Sends a confirmed move to the remote player, and echoes it locally when
    /// the local player made it.
    pub(crate) fn publish(&mut self, side: PlayerSide, code: &str) -> Result<(), GameError> {
        if self.is_local(side) {
            write_line(&mut self.local_output, code)?;
        }
        write_line(&mut self.remote_output, code)
    }
}

fn write_line(out: &mut dyn Write, line: &str) -> Result<(), GameError> {
    writeln!(out, "{line}").map_err(disconnected)?;
    out.flush().map_err(disconnected)
}

pub(crate) fn disconnected(err: io::Error) -> GameError {
    tracing::error!(error = %err, "channel failed");
    GameError::Disconnected(err)
}


#[cfg(test)]
mod tests {
    use super::{test_util::*, *};

    #[test]
    fn test_inputs_routed_by_seat() {
        let (channels, _) = channels("local\n", "remote\n");
        let mut table = ChannelTable::new(channels, PlayerSide::B);
        assert_eq!(table.read_move(PlayerSide::A).unwrap(), "remote");
        assert_eq!(table.read_move(PlayerSide::B).unwrap(), "local");
    }

    #[test]
    fn test_line_terminators_stripped() {
        let (channels, _) = channels("A1\r\nB2\nC3", "");
        let mut table = ChannelTable::new(channels, PlayerSide::A);
        assert_eq!(table.read_move(PlayerSide::A).unwrap(), "A1");
        assert_eq!(table.read_move(PlayerSide::A).unwrap(), "B2");
        assert_eq!(table.read_move(PlayerSide::A).unwrap(), "C3");
    }

    #[test]
    fn test_end_of_stream_is_disconnect() {
        let (channels, _) = channels("", "");
        let mut table = ChannelTable::new(channels, PlayerSide::A);
        let err = table.read_move(PlayerSide::B).unwrap_err();
        assert!(err.is_disconnected());
    }

    #[test]
    fn test_publish_echoes_local_moves_only() {
        let (channels, outputs) = channels("", "");
        let mut table = ChannelTable::new(channels, PlayerSide::A);
        table.publish(PlayerSide::A, "A1").unwrap();
        table.publish(PlayerSide::B, "C3").unwrap();
        assert_eq!(outputs.local_output.contents(), "A1\n");
        assert_eq!(outputs.remote_output.contents(), "A1\nC3\n");
    }

    #[test]
    fn test_write_failure_is_disconnect() {
        let (mut channels, _) = channels("", "");
        channels.remote_output = Box::new(BrokenPipe);
        let mut table = ChannelTable::new(channels, PlayerSide::A);
        let err = table.publish(PlayerSide::B, "A1").unwrap_err();
        assert!(err.is_disconnected());
    }
}
