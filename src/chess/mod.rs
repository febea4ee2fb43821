//! Implementation of the chess board, its coordinate system and the rules of
//! piece movement.

pub mod board;
pub mod core;
pub mod movegen;
