//! Square-centric ("mailbox") [`Board`]: an 8x8 grid of optional pieces
//! addressed either by grid indices or by algebraic coordinates.
//!
//! The board is a plain value: it owns every piece placed on it and never
//! moves or removes pieces on its own. Applying moves is left to the caller,
//! which can use [`Board::get`] and [`Board::set`] for that.

use std::fmt::{self, Write};
use std::mem;

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::chess::core::{Color, File, Piece, PieceKind, Rank, Square, BOARD_WIDTH};
use crate::chess::movegen::{self, MoveList};
use crate::error::{Error, Result};

const WIDTH: usize = BOARD_WIDTH as usize;

/// Back rank layout by grid column. Both colors share it.
const BACKRANK: [PieceKind; WIDTH] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement on the board. Each cell holds at most one piece.
///
/// [`fmt::Display`] and [`TryFrom<&str>`] use the piece placement field of
/// [Forsyth-Edwards Notation]: ranks from 8 down to 1, files from `A` to `H`
/// within each rank.
///
/// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; WIDTH]; WIDTH],
}

impl Board {
    /// Creates a board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; WIDTH]; WIDTH],
        }
    }

    /// Creates a board with both sides in their initial layout.
    ///
    /// ```
    /// use mirrorboard::chess::board::Board;
    ///
    /// assert_eq!(
    ///     Board::starting().to_string(),
    ///     "RNBKQBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbkqbnr"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for color in Color::iter() {
            board.initialize_pieces(color);
        }
        board
    }

    /// Puts the pieces of `color` into their initial layout: a row of pawns in
    /// front of the back rank. Whatever occupied those cells before is
    /// overwritten.
    pub fn initialize_pieces(&mut self, color: Color) {
        let pawns = usize::from(Rank::pawns_starting(color).row());
        let backrank = usize::from(Rank::backrank(color).row());
        for (column, kind) in BACKRANK.into_iter().enumerate() {
            self.cells[pawns][column] = Some(Piece::pawn(color));
            self.cells[backrank][column] = Some(Piece::new(color, kind));
        }
    }

    /// Returns the piece standing on `coordinate`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinate`] for malformed coordinates.
    pub fn get(&self, coordinate: &str) -> Result<Option<Piece>> {
        Ok(self.at(Square::try_from(coordinate)?))
    }

    /// Overwrites the cell at `coordinate` and returns its previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinate`] for malformed coordinates.
    pub fn set(&mut self, coordinate: &str, piece: Option<Piece>) -> Result<Option<Piece>> {
        Ok(self.place(Square::try_from(coordinate)?, piece))
    }

    /// Returns the piece standing on `square`, if any.
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.cells[square.rank().row() as usize][square.file().column() as usize]
    }

    /// Overwrites the cell at `square` and returns its previous contents.
    pub fn place(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        mem::replace(&mut self.cells[square.row()][square.column()], piece)
    }

    /// Checks whether signed grid indices address a cell of the board. Any
    /// index arithmetic has to go through this before touching the grid.
    ///
    /// ```
    /// use mirrorboard::chess::board::Board;
    ///
    /// assert!(Board::inside_board(0, 7));
    /// assert!(!Board::inside_board(-1, 3));
    /// assert!(!Board::inside_board(3, 8));
    /// ```
    #[must_use]
    pub const fn inside_board(row: isize, column: isize) -> bool {
        0 <= row && row < WIDTH as isize && 0 <= column && column < WIDTH as isize
    }

    /// Returns the square `rows` and `columns` away from `square`, or `None`
    /// if that falls off the board.
    #[must_use]
    pub fn shift(square: Square, rows: isize, columns: isize) -> Option<Square> {
        let row = isize::from(square.rank().row()) + rows;
        let column = isize::from(square.file().column()) + columns;
        if !Self::inside_board(row, column) {
            return None;
        }
        Square::from_indices(usize::try_from(row).ok()?, usize::try_from(column).ok()?).ok()
    }

    /// Converts grid indices to an algebraic coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if either index is outside the
    /// grid.
    pub fn indices_to_coordinate(row: usize, column: usize) -> Result<String> {
        Ok(Square::from_indices(row, column)?.to_string())
    }

    /// Converts an algebraic coordinate to grid indices.
    ///
    /// ```
    /// use mirrorboard::chess::board::Board;
    ///
    /// assert_eq!(Board::coordinate_to_indices("A1").unwrap(), (0, 7));
    /// assert_eq!(Board::coordinate_to_indices("H8").unwrap(), (7, 0));
    /// assert!(Board::coordinate_to_indices("Z9").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinate`] for malformed coordinates.
    pub fn coordinate_to_indices(coordinate: &str) -> Result<(usize, usize)> {
        let square = Square::try_from(coordinate)?;
        Ok((square.row(), square.column()))
    }

    /// Iterates over occupied squares in [`Square::all`] order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.at(square).map(|piece| (square, piece)))
    }

    /// Destinations of the piece standing on `position`, see
    /// [`movegen::valid_moves`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinate`] for malformed coordinates and
    /// [`Error::EmptySquare`] if there is nothing to move.
    pub fn valid_moves(&self, position: &str) -> Result<Vec<String>> {
        movegen::valid_moves(self, position)
    }

    /// Typed counterpart of [`Board::valid_moves`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySquare`] if there is nothing to move.
    pub fn generate_moves(&self, from: Square) -> Result<MoveList> {
        movegen::generate_moves(self, from)
    }

    /// Parses the piece placement field of FEN. Pawns standing on their
    /// starting rank are considered unmoved, all others have moved already.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPlacement`] if the number of ranks or the width
    /// of any rank is not 8, or an unknown symbol is encountered.
    pub fn from_placement(placement: &str) -> Result<Self> {
        let ranks = placement.split('/').collect_vec();
        if ranks.len() != WIDTH {
            return Err(Error::InvalidPlacement(format!(
                "expected {BOARD_WIDTH} ranks, got {} in {placement:?}",
                ranks.len()
            )));
        }
        let mut board = Self::empty();
        for (rank, rank_placement) in Rank::iter().rev().zip(ranks) {
            let mut files = File::iter();
            for symbol in rank_placement.chars() {
                if let Some(skip) = symbol.to_digit(10) {
                    if !(1..=u32::from(BOARD_WIDTH)).contains(&skip) {
                        return Err(Error::InvalidPlacement(format!("empty run should be 1..=8, got {skip}")));
                    }
                    for _ in 0..skip {
                        if files.next().is_none() {
                            return Err(Error::InvalidPlacement(format!(
                                "rank {rank} is wider than {BOARD_WIDTH}: {rank_placement:?}"
                            )));
                        }
                    }
                    continue;
                }
                let mut piece = Piece::try_from(symbol)?;
                let Some(file) = files.next() else {
                    return Err(Error::InvalidPlacement(format!(
                        "rank {rank} is wider than {BOARD_WIDTH}: {rank_placement:?}"
                    )));
                };
                if rank != Rank::pawns_starting(piece.color) {
                    piece.mark_moved();
                }
                let _ = board.place(Square::new(file, rank), Some(piece));
            }
            if files.next().is_some() {
                return Err(Error::InvalidPlacement(format!(
                    "rank {rank} is narrower than {BOARD_WIDTH}: {rank_placement:?}"
                )));
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<&str> for Board {
    type Error = Error;

    /// Cleans up the input (surrounding whitespace, optional `placement `
    /// prefix) and parses it with [`Board::from_placement`].
    fn try_from(input: &str) -> Result<Self> {
        let input = input.trim();
        Self::from_placement(input.strip_prefix("placement ").unwrap_or(input))
    }
}

impl fmt::Display for Board {
    /// Prints the piece placement field of FEN.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, rank) in Rank::iter().rev().enumerate() {
            if index != 0 {
                f.write_char('/')?;
            }
            let mut empty_run = 0;
            for file in File::iter() {
                match self.at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty_run != 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{piece}")?;
                    },
                    None => empty_run += 1,
                }
            }
            if empty_run != 0 {
                write!(f, "{empty_run}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Draws the board with rank 8 on top, files labelled below.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{rank}")?;
            for file in File::iter() {
                match self.at(Square::new(file, rank)) {
                    Some(piece) => write!(f, " {piece}")?,
                    None => f.write_str(" .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for file in File::iter() {
            write!(f, " {file}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_board_has_no_pieces() {
        assert_eq!(Board::empty().pieces().count(), 0);
        assert_eq!(Board::default(), Board::empty());
        assert_eq!(Board::empty().to_string(), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn debug_diagram() {
        let board = Board::try_from("8/8/8/8/4Q3/8/8/k7").unwrap();
        assert_eq!(
            format!("{board:?}"),
            "8 . . . . . . . .\n\
             7 . . . . . . . .\n\
             6 . . . . . . . .\n\
             5 . . . . . . . .\n\
             4 . . . . Q . . .\n\
             3 . . . . . . . .\n\
             2 . . . . . . . .\n\
             1 k . . . . . . .\n  \
             A B C D E F G H"
        );
    }

    #[test]
    fn shift_stays_on_board() {
        let corner = Square::try_from("A1").unwrap();
        assert_eq!(Board::shift(corner, -1, 0), None);
        assert_eq!(Board::shift(corner, 0, 1), None);
        assert_eq!(
            Board::shift(corner, 1, -1),
            Some(Square::try_from("B2").unwrap())
        );
    }
}
