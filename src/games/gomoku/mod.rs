//! Gomoku (five-in-a-row).
//!
//! Two players alternate placing stones on a square board; the first to
//! line up five horizontally, vertically, or diagonally wins. Win detection
//! scans only the four lines through the stone just placed, since no other
//! line can have been completed by that move.

mod board;
mod game;

pub use board::{Board, Cell, Stone, DEFAULT_BOARD_SIZE};
pub use game::{GameStatus, GomokuGame, MoveError, MoveOutcome, WIN_LENGTH};
