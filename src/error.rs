//! Failure conditions of board access and move generation.

/// Errors produced by [`crate::chess`] operations. Every variant corresponds to
/// a violated precondition: callers are expected to either validate the input
/// upfront or match on the condition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Coordinate is not a two-char string of file `'A'..='H'` followed by
    /// rank `'1'..='8'`.
    #[error("invalid coordinate {0:?}: expected file 'A'..='H' followed by rank '1'..='8'")]
    InvalidCoordinate(String),
    /// Move generation was requested for a square without a piece.
    #[error("no piece on {0}")]
    EmptySquare(String),
    /// Grid indices do not address a cell of the board.
    #[error("grid index ({row}, {column}) is outside of the board")]
    IndexOutOfBounds {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        column: usize,
    },
    /// Board placement string could not be parsed.
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),
}

/// Shorthand for results of [`crate::chess`] operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
