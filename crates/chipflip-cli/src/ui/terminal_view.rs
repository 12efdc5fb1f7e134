use std::io::{self, Stdout, Write};

use chipflip_engine::{
    Board, GameOutcome, GameView, MoveError, PlayerSide, Score, Traversal,
};
use crossterm::style::ContentStyle;

use super::style;

const SEPARATOR: &str = " │ ";

fn glyph(state: bool) -> char {
    if state { 'X' } else { 'O' }
}

/// Line-by-line terminal renderer.
///
/// Draws the board as a box grid with column letters across the top and row
/// digits down the side, followed by each player's traversal and the scores.
#[derive(Debug)]
pub struct TerminalView<W> {
    out: W,
}

impl TerminalView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> TerminalView<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_grid(&mut self, board: &Board) -> io::Result<()> {
        let x = board.size().get();
        let divider = format!(" ├{}───┤", "───┼".repeat(x));
        let head = divider.replace('├', "┌").replace('┼', "┬").replace('┤', "┐");
        let foot = divider.replace('├', "└").replace('┼', "┴").replace('┤', "┘");

        writeln!(self.out, "{head}")?;
        write!(self.out, "{SEPARATOR} ")?;
        for letter in ('A'..).take(x) {
            write!(self.out, "{SEPARATOR}{letter}")?;
        }
        writeln!(self.out, "{SEPARATOR}")?;

        for row in 0..x {
            writeln!(self.out, "{divider}")?;
            write!(self.out, "{SEPARATOR}{}", row + 1)?;
            for col in 0..x {
                let state = board.read(row, col);
                let style = if board.sticky().contains(row * x + col) {
                    style::sticky_chip(state)
                } else {
                    style::chip(state)
                };
                write!(self.out, "{SEPARATOR}{}", style.apply(glyph(state)))?;
            }
            writeln!(self.out, "{SEPARATOR}")?;
        }

        writeln!(self.out, "{foot}")
    }

    fn draw_traversal(&mut self, traversal: &Traversal<'_>) -> io::Result<()> {
        write!(self.out, "{}: ", traversal.side())?;
        for step in traversal.steps() {
            let style = if step.changed {
                style::transition()
            } else {
                ContentStyle::new()
            };
            write!(self.out, "{} ", style.apply(glyph(step.state)))?;
        }
        writeln!(self.out)
    }
}

impl<W> GameView for TerminalView<W>
where
    W: Write,
{
    fn show_board(&mut self, board: &Board, score: Score) -> io::Result<()> {
        self.draw_grid(board)?;
        for side in PlayerSide::ALL {
            self.draw_traversal(&Traversal::new(board, side))?;
        }
        writeln!(self.out, "Score: {score}")?;
        writeln!(self.out)?;
        self.out.flush()
    }

    fn prompt(&mut self, player: PlayerSide, is_local: bool) -> io::Result<()> {
        if is_local {
            write!(self.out, "Col-Row to flip ({player}) ")?;
        } else {
            writeln!(self.out, "Waiting for player {player}...")?;
        }
        self.out.flush()
    }

    fn move_rejected(&mut self, _player: PlayerSide, error: MoveError) -> io::Result<()> {
        writeln!(self.out, "{}", style::invalid().apply(error))?;
        self.out.flush()
    }

    fn game_over(&mut self, outcome: &GameOutcome) -> io::Result<()> {
        writeln!(self.out, "Player {} Wins {}", outcome.winner, outcome.score)?;
        self.out.flush()
    }
}
