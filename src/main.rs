use std::io;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mirrorboard::chess::board::Board;
use mirrorboard::chess::core::Color;
use mirrorboard::Engine;

/// Interactive board: reads commands from stdin and prints the results.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
    /// Pieces on the board before the first command.
    #[arg(long, value_enum, default_value_t = Setup::Starting)]
    setup: Setup,
    /// FEN piece placement to start from. Takes precedence over `--setup`.
    #[arg(long)]
    placement: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Setup {
    /// Both sides in their initial layout.
    Starting,
    Empty,
    /// Only the white pieces.
    White,
    /// Only the black pieces.
    Black,
}

impl Setup {
    fn board(self) -> Board {
        match self {
            Self::Starting => Board::starting(),
            Self::Empty => Board::empty(),
            Self::White => one_side(Color::White),
            Self::Black => one_side(Color::Black),
        }
    }
}

fn one_side(color: Color) -> Board {
    let mut board = Board::empty();
    board.initialize_pieces(color);
    board
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    mirrorboard::print_engine_info();
    mirrorboard::print_binary_info();
    let board = match &config.placement {
        Some(placement) => Board::try_from(placement.as_str())
            .with_context(|| format!("parsing --placement {placement:?}"))?,
        None => config.setup.board(),
    };
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    Engine::new(board, &mut input, &mut output).run()
}
