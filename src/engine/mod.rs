//! The engine wraps a [`Board`] into a line-based command loop: it reads
//! commands from the input stream, applies them to the board and writes the
//! results to the output stream.
//!
//! [`Engine::run`] is the "main loop" of the binary.
//!
//! Diagnostics (unknown commands, rejected coordinates, illegal moves) are
//! reported as `info string <message>` lines and never stop the loop.
use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use itertools::Itertools;

use crate::chess::board::Board;
use crate::chess::core::{Color, Piece};
use crate::engine::command::Command;

mod command;

/// The Engine connects the board with I/O and plays the role of the caller
/// that applies moves.
pub struct Engine<'a, R: BufRead, W: Write> {
    board: Board,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Engine<'a, R, W> {
    /// Creates a new instance of the engine with given board and provided
    /// I/O.
    #[must_use]
    pub fn new(board: Board, input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            board,
            input,
            output,
        }
    }

    /// Current state of the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Continuously reads the input stream and executes commands until `quit`
    /// is sent or the input is exhausted.
    ///
    /// Supported commands:
    ///
    /// - `placement <FEN placement>`: replace the board.
    /// - `init <white|black>`: put the pieces of one side into their initial
    ///   layout.
    /// - `clear`: remove all pieces.
    /// - `put <COORDINATE> <SYMBOL>` and `remove <COORDINATE>`: edit a single
    ///   cell.
    /// - `get <COORDINATE>`: print the piece symbol or `-`.
    /// - `moves <COORDINATE>`: print destinations separated by spaces.
    /// - `move <FROM> <TO>`: move a piece to one of its destinations.
    /// - `d`: draw the board; `fen`: print the placement.
    /// - `quit`.
    ///
    /// # Errors
    ///
    /// Only I/O failures are returned. Rejected commands are reported to the
    /// output stream and the loop continues.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let mut line = String::new();
            if self
                .input
                .read_line(&mut line)
                .context("reading from input")?
                == 0
            {
                break;
            }
            let outcome = match Command::parse(&line) {
                Command::SetPlacement { placement } => self.handle_placement(&placement),
                Command::Initialize { color } => {
                    self.handle_initialize(color);
                    Ok(())
                },
                Command::Clear => {
                    self.board = Board::empty();
                    Ok(())
                },
                Command::Put { coordinate, symbol } => self.handle_put(&coordinate, symbol),
                Command::Remove { coordinate } => self.handle_remove(&coordinate),
                Command::Get { coordinate } => self.handle_get(&coordinate),
                Command::Moves { coordinate } => self.handle_moves(&coordinate),
                Command::Move { from, to } => self.handle_move(&from, &to),
                Command::Draw => {
                    writeln!(self.output, "{:?}", self.board).map_err(anyhow::Error::from)
                },
                Command::Placement => {
                    writeln!(self.output, "{}", self.board).map_err(anyhow::Error::from)
                },
                Command::Quit => break,
                Command::Unknown(command) => {
                    writeln!(self.output, "info string Unsupported command: {command:?}")?;
                    Ok(())
                },
            };
            if let Err(e) = outcome {
                writeln!(self.output, "info string {e:#}")?;
            }
        }
        Ok(())
    }

    fn handle_placement(&mut self, placement: &str) -> anyhow::Result<()> {
        self.board = Board::try_from(placement)?;
        Ok(())
    }

    fn handle_initialize(&mut self, color: Color) {
        self.board.initialize_pieces(color);
    }

    fn handle_put(&mut self, coordinate: &str, symbol: char) -> anyhow::Result<()> {
        let piece = Piece::try_from(symbol)?;
        let _ = self.board.set(coordinate, Some(piece))?;
        Ok(())
    }

    fn handle_remove(&mut self, coordinate: &str) -> anyhow::Result<()> {
        let _ = self.board.set(coordinate, None)?;
        Ok(())
    }

    fn handle_get(&mut self, coordinate: &str) -> anyhow::Result<()> {
        match self.board.get(coordinate)? {
            Some(piece) => writeln!(self.output, "{piece}")?,
            None => writeln!(self.output, "-")?,
        }
        Ok(())
    }

    fn handle_moves(&mut self, coordinate: &str) -> anyhow::Result<()> {
        let moves = self.board.valid_moves(coordinate)?;
        if moves.is_empty() {
            writeln!(self.output, "(none)")?;
        } else {
            writeln!(self.output, "{}", moves.iter().join(" "))?;
        }
        Ok(())
    }

    /// Moves the piece standing on `from` to `to`, capturing whatever stood
    /// there. Pawns lose the double step after their first move.
    fn handle_move(&mut self, from: &str, to: &str) -> anyhow::Result<()> {
        let destinations = self
            .board
            .valid_moves(from)
            .with_context(|| format!("can not move from {from}"))?;
        if !destinations.iter().any(|destination| destination == to) {
            bail!(
                "{to} is not reachable from {from}, expected one of: [{}]",
                destinations.iter().join(", ")
            );
        }
        let mut piece = self
            .board
            .set(from, None)?
            .with_context(|| format!("no piece on {from}"))?;
        piece.mark_moved();
        let _ = self.board.set(to, Some(piece))?;
        Ok(())
    }
}
