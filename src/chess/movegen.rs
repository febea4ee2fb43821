//! Move generation: destinations a piece can reach from its square.
//!
//! The rules are pseudo-legal: check, castling, en passant and promotion are
//! not considered. A destination is produced only if it is on the board and
//! either empty or held by the opponent. Every offset is validated with
//! [`Board::inside_board`] (through [`Board::shift`]) before the grid is read.
//!
//! Destinations are produced in a fixed order so that the output is
//! reproducible:
//!
//! - Pawn: double step, single step, capture towards column - 1, capture
//!   towards column + 1.
//! - Sliding pieces: one ray after another in [`ROOK_DIRECTIONS`] and
//!   [`BISHOP_DIRECTIONS`] order (rook rays first for the queen), each walked
//!   outwards from the source.
//! - Knight and king: [`KNIGHT_OFFSETS`] and [`KING_OFFSETS`] order.

use arrayvec::ArrayVec;

use crate::chess::board::Board;
use crate::chess::core::{Color, Piece, PieceKind, Square};
use crate::error::{Error, Result};

/// Queen in the middle of an empty board has the most destinations.
pub const MAX_DESTINATIONS: usize = 27;

/// Destinations of a single piece, kept on the stack.
pub type MoveList = ArrayVec<Square, MAX_DESTINATIONS>;

/// `(rows, columns)` steps of the rook rays.
pub const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
/// `(rows, columns)` steps of the bishop rays.
pub const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
#[allow(missing_docs)]
pub const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
#[allow(missing_docs)]
pub const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Produces destinations of the piece standing on `position` as algebraic
/// coordinates.
///
/// ```
/// use mirrorboard::chess::board::Board;
/// use mirrorboard::chess::movegen::valid_moves;
///
/// let board = Board::starting();
/// // White pawns advance towards rank 1.
/// assert_eq!(valid_moves(&board, "E7").unwrap(), vec!["E5", "E6"]);
/// assert_eq!(valid_moves(&board, "B8").unwrap(), vec!["C6", "A6"]);
/// assert!(valid_moves(&board, "E4").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidCoordinate`] for malformed coordinates and
/// [`Error::EmptySquare`] if there is no piece on `position`.
pub fn valid_moves(board: &Board, position: &str) -> Result<Vec<String>> {
    let from = Square::try_from(position)?;
    Ok(generate_moves(board, from)?
        .iter()
        .map(Square::to_string)
        .collect())
}

/// Dispatches on the kind of the piece standing on `from`.
///
/// # Errors
///
/// Returns [`Error::EmptySquare`] if there is no piece on `from`.
pub fn generate_moves(board: &Board, from: Square) -> Result<MoveList> {
    let piece = board
        .at(from)
        .ok_or_else(|| Error::EmptySquare(from.to_string()))?;
    let mut moves = MoveList::new();
    match piece.kind {
        PieceKind::Pawn { .. } => return Ok(pawn_valid_moves(board, from, piece)),
        PieceKind::Rook => slide(board, from, piece.color, &ROOK_DIRECTIONS, &mut moves),
        PieceKind::Bishop => slide(board, from, piece.color, &BISHOP_DIRECTIONS, &mut moves),
        PieceKind::Queen => {
            slide(board, from, piece.color, &ROOK_DIRECTIONS, &mut moves);
            slide(board, from, piece.color, &BISHOP_DIRECTIONS, &mut moves);
        },
        PieceKind::Knight => jump(board, from, piece.color, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::King => jump(board, from, piece.color, &KING_OFFSETS, &mut moves),
    }
    Ok(moves)
}

/// Pawn destinations. `pawn` is the piece standing on `from`; only its color
/// and whether it has moved yet matter.
///
/// The double step requires both the skipped and the destination squares to
/// be empty. Captures are only possible diagonally forward, onto a piece of
/// the opposite color.
#[must_use]
pub fn pawn_valid_moves(board: &Board, from: Square, pawn: Piece) -> MoveList {
    let forward = pawn.color.forward();
    let mut moves = MoveList::new();
    let single = Board::shift(from, forward, 0).filter(|&square| board.at(square).is_none());
    if pawn.is_unmoved_pawn() {
        if let Some(double) = single.and_then(|_| Board::shift(from, 2 * forward, 0)) {
            if board.at(double).is_none() {
                moves.push(double);
            }
        }
    }
    if let Some(single) = single {
        moves.push(single);
    }
    for side in [-1, 1] {
        if let Some(target) = Board::shift(from, forward, side) {
            if board
                .at(target)
                .is_some_and(|occupant| occupant.color != pawn.color)
            {
                moves.push(target);
            }
        }
    }
    moves
}

fn slide(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(isize, isize)],
    moves: &mut MoveList,
) {
    for &(rows, columns) in directions {
        let mut current = from;
        while let Some(target) = Board::shift(current, rows, columns) {
            match board.at(target) {
                None => moves.push(target),
                Some(occupant) => {
                    if occupant.color != color {
                        moves.push(target);
                    }
                    break;
                },
            }
            current = target;
        }
    }
}

fn jump(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(isize, isize)],
    moves: &mut MoveList,
) {
    for &(rows, columns) in offsets {
        if let Some(target) = Board::shift(from, rows, columns) {
            if board
                .at(target)
                .map_or(true, |occupant| occupant.color != color)
            {
                moves.push(target);
            }
        }
    }
}
