//! Chess primitives commonly used within [`crate::chess`].
//!
//! The board grid is addressed by `(row, column)` pairs while the outside
//! world uses algebraic coordinates such as `"E2"`. The mapping between the two
//! is fixed:
//!
//! - Rank digit `r` lives on row `r - 1`.
//! - Files are mirrored: [`File::A`] is column 7 and [`File::H`] is column 0.

use std::fmt::{self, Write};

use anyhow::bail;
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::error::{Error, Result};

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// A cell of the board, known both by its algebraic coordinate and by its
/// position in the grid.
///
/// ```
/// use mirrorboard::chess::core::{File, Rank, Square};
///
/// let square = Square::try_from("E2").unwrap();
/// assert_eq!(square, Square::new(File::E, Rank::Two));
/// assert_eq!((square.row(), square.column()), (1, 3));
/// assert_eq!(square.to_string(), "E2");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    file: File,
    rank: Rank,
}

impl Square {
    /// Connects file (column) and rank (row) to form a full square.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self { file, rank }
    }

    /// Resolves grid indices into a square.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] unless both indices are within
    /// `0..BOARD_WIDTH`.
    pub fn from_indices(row: usize, column: usize) -> Result<Self> {
        let out_of_bounds = || Error::IndexOutOfBounds { row, column };
        let rank = u8::try_from(row)
            .ok()
            .and_then(Rank::from_row)
            .ok_or_else(out_of_bounds)?;
        let file = u8::try_from(column)
            .ok()
            .and_then(File::from_column)
            .ok_or_else(out_of_bounds)?;
        Ok(Self::new(file, rank))
    }

    /// Returns file on which the square is located.
    #[must_use]
    pub const fn file(self) -> File {
        self.file
    }

    /// Returns rank on which the square is located.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Grid row of the square.
    #[must_use]
    pub fn row(self) -> usize {
        usize::from(self.rank.row())
    }

    /// Grid column of the square.
    #[must_use]
    pub fn column(self) -> usize {
        usize::from(self.file.column())
    }

    /// All 64 squares, rank by rank starting from [`Rank::One`], files in
    /// alphabetical order within a rank.
    pub fn all() -> impl Iterator<Item = Self> {
        Rank::iter()
            .cartesian_product(File::iter())
            .map(|(rank, file)| Self::new(file, rank))
    }
}

impl TryFrom<&str> for Square {
    type Error = Error;

    /// Parses an algebraic coordinate: uppercase file followed by rank digit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinate`] if the input is not exactly two
    /// chars or either of them is outside the allowed range.
    fn try_from(coordinate: &str) -> Result<Self> {
        let invalid = || Error::InvalidCoordinate(coordinate.to_string());
        let (file, rank) = coordinate
            .chars()
            .collect_tuple::<(char, char)>()
            .ok_or_else(invalid)?;
        let file = File::try_from(file).map_err(|_| invalid())?;
        let rank = Rank::try_from(rank).map_err(|_| invalid())?;
        Ok(Self::new(file, rank))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

/// Represents a column (vertical line) of the chessboard. In algebraic
/// coordinates it is written as an uppercase letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter)]
#[allow(missing_docs)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    /// Grid column of the file. The order is mirrored: `A` is the last column.
    #[must_use]
    pub const fn column(self) -> u8 {
        match self {
            Self::A => 7,
            Self::B => 6,
            Self::C => 5,
            Self::D => 4,
            Self::E => 3,
            Self::F => 2,
            Self::G => 1,
            Self::H => 0,
        }
    }

    /// Inverse of [`File::column`].
    #[must_use]
    pub const fn from_column(column: u8) -> Option<Self> {
        match column {
            7 => Some(Self::A),
            6 => Some(Self::B),
            5 => Some(Self::C),
            4 => Some(Self::D),
            3 => Some(Self::E),
            2 => Some(Self::F),
            1 => Some(Self::G),
            0 => Some(Self::H),
            _ => None,
        }
    }

    const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::H => 'H',
        }
    }
}

impl TryFrom<char> for File {
    type Error = Error;

    fn try_from(file: char) -> Result<Self> {
        Self::iter()
            .find(|candidate| candidate.letter() == file)
            .ok_or_else(|| Error::InvalidCoordinate(file.to_string()))
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.letter())
    }
}

/// Represents a horizontal line of the chessboard. In algebraic coordinates it
/// is written as a digit. The implementation assumes zero-based values (i.e.
/// rank 1 would be 0), which is also the grid row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter)]
#[allow(missing_docs)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    /// Grid row of the rank.
    #[must_use]
    pub const fn row(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Rank::row`].
    #[must_use]
    pub const fn from_row(row: u8) -> Option<Self> {
        match row {
            0 => Some(Self::One),
            1 => Some(Self::Two),
            2 => Some(Self::Three),
            3 => Some(Self::Four),
            4 => Some(Self::Five),
            5 => Some(Self::Six),
            6 => Some(Self::Seven),
            7 => Some(Self::Eight),
            _ => None,
        }
    }

    /// Rank holding the rooks, knights, bishops, queen and king of `color` in
    /// the initial layout.
    #[must_use]
    pub const fn backrank(color: Color) -> Self {
        match color {
            Color::White => Self::Eight,
            Color::Black => Self::One,
        }
    }

    /// Rank in front of the [`Rank::backrank`] where the pawns of `color`
    /// start.
    #[must_use]
    pub const fn pawns_starting(color: Color) -> Self {
        match color {
            Color::White => Self::Seven,
            Color::Black => Self::Two,
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = Error;

    fn try_from(rank: char) -> Result<Self> {
        match rank {
            '1'..='8' => Self::from_row(rank as u8 - b'1')
                .ok_or_else(|| Error::InvalidCoordinate(rank.to_string())),
            _ => Err(Error::InvalidCoordinate(rank.to_string())),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.row() + 1)
    }
}

/// A standard game of chess is played between two sides: White and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a single pawn push. White pawns start next to the
    /// highest row and advance towards row 0, Black pawns do the opposite.
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(color: &str) -> anyhow::Result<Self> {
        match color {
            "white" | "w" => Ok(Self::White),
            "black" | "b" => Ok(Self::Black),
            _ => bail!("color should be 'white' or 'black', got '{color}'"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::White => "white",
            Self::Black => "black",
        })
    }
}

/// Standard [chess pieces].
///
/// Pawns additionally track whether they have moved yet: the double step is
/// only available while `unmoved` is `true`. The flag flips exactly once,
/// when a move is applied to the board (see [`Piece::mark_moved`]); move
/// generation never touches it.
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn { unmoved: bool },
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::Pawn { .. } => 'p',
            Self::Rook => 'r',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Queen => 'q',
            Self::King => 'k',
        })
    }
}

/// Represents a specific piece owned by a side.
///
/// ```
/// use mirrorboard::chess::core::{Color, Piece, PieceKind};
///
/// let mut pawn = Piece::pawn(Color::White);
/// assert!(pawn.is_unmoved_pawn());
/// pawn.mark_moved();
/// assert_eq!(pawn.kind, PieceKind::Pawn { unmoved: false });
/// assert_eq!(pawn.to_string(), "P");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub color: Color,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Creates a pawn that has not moved yet.
    #[must_use]
    pub const fn pawn(color: Color) -> Self {
        Self::new(color, PieceKind::Pawn { unmoved: true })
    }

    /// Returns `true` for pawns that are still eligible for the double step.
    #[must_use]
    pub const fn is_unmoved_pawn(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn { unmoved: true })
    }

    /// Records that the piece has been moved. Only pawns carry this state;
    /// for other kinds this is a no-op.
    pub fn mark_moved(&mut self) {
        if let PieceKind::Pawn { unmoved } = &mut self.kind {
            *unmoved = false;
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = Error;

    /// Parses a FEN piece symbol: uppercase for White, lowercase for Black.
    /// Pawns are created unmoved.
    fn try_from(symbol: char) -> Result<Self> {
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match symbol.to_ascii_lowercase() {
            'p' => PieceKind::Pawn { unmoved: true },
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => {
                return Err(Error::InvalidPlacement(format!(
                    "piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'"
                )))
            },
        };
        Ok(Self::new(color, kind))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.to_string();
        match self.color {
            Color::White => f.write_str(&symbol.to_ascii_uppercase()),
            Color::Black => f.write_str(&symbol),
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn files_are_mirrored() {
        assert_eq!(
            File::iter().map(File::column).collect_vec(),
            vec![7, 6, 5, 4, 3, 2, 1, 0]
        );
        for file in File::iter() {
            assert_eq!(File::from_column(file.column()), Some(file));
        }
        assert_eq!(File::from_column(BOARD_WIDTH), None);
    }

    #[test]
    fn ranks_are_zero_based() {
        assert_eq!(Rank::try_from('1'), Ok(Rank::One));
        assert_eq!(Rank::try_from('8'), Ok(Rank::Eight));
        assert_eq!(Rank::Eight.row(), 7);
        assert!(Rank::try_from('0').is_err());
        assert!(Rank::try_from('9').is_err());
    }

    #[test]
    fn square_count() {
        assert_eq!(Square::all().count(), usize::from(BOARD_SIZE));
        assert_eq!(Square::all().unique().count(), usize::from(BOARD_SIZE));
    }

    #[test]
    fn lowercase_files_are_rejected() {
        assert_eq!(
            Square::try_from("e2"),
            Err(Error::InvalidCoordinate("e2".to_string()))
        );
    }

    #[test]
    fn malformed_coordinates() {
        for coordinate in ["", "E", "E22", "I1", "A0", "A9", "2E", "♔1"] {
            assert_eq!(
                Square::try_from(coordinate),
                Err(Error::InvalidCoordinate(coordinate.to_string())),
                "{coordinate}"
            );
        }
    }

    #[test]
    fn piece_symbols() {
        for symbol in "KQRBNPkqrbnp".chars() {
            let piece = Piece::try_from(symbol).unwrap();
            assert_eq!(piece.to_string(), symbol.to_string());
        }
        assert!(Piece::try_from('x').is_err());
    }

    #[test]
    fn mark_moved_only_affects_pawns() {
        let mut rook = Piece::new(Color::Black, PieceKind::Rook);
        rook.mark_moved();
        assert_eq!(rook.kind, PieceKind::Rook);
        let mut pawn = Piece::pawn(Color::Black);
        pawn.mark_moved();
        assert!(!pawn.is_unmoved_pawn());
    }

    #[test]
    fn colors() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::try_from("b").unwrap(), Color::Black);
        assert!(Color::try_from("red").is_err());
    }
}
