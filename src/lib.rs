//! # rust-minigames
//!
//! Three classic console minigames behind small, pure game engines:
//!
//! - **Gomoku** (five-in-a-row): alternating turns on a square board, win
//!   detection centered on the stone just placed.
//! - **Snake**: a growing path on a fixed grid, with exact tail-vacation
//!   timing for self-collision.
//! - **Twenty-four**: four numbers guaranteed solvable, answers checked by
//!   a small precedence-honoring expression evaluator.
//!
//! ## Design Principles
//!
//! 1. **Engines are pure**: no I/O, no blocking, no global state. Every
//!    operation is a total function from input to a status or error value;
//!    malformed input never panics.
//!
//! 2. **Randomness is injected**: all random draws go through
//!    [`core::GameRng`], so any game can be replayed from a seed.
//!
//! 3. **No shared engine**: the three games are independent leaf modules.
//!
//! The console frontends in [`console`] are thin drivers: they read raw
//! input, call the engine, and print the engine's text output.
//!
//! ## Modules
//!
//! - `core`: seeded RNG shared by the engines
//! - `games`: the three game engines
//! - `console`: terminal frontends used by the binaries

pub mod console;
pub mod core;
pub mod games;

// Re-export commonly used types
pub use crate::core::GameRng;

pub use crate::games::gomoku::{
    Board, Cell, GameStatus, GomokuGame, MoveError, MoveOutcome, Stone,
};

pub use crate::games::snake::{Direction, Point, SnakeGame, TickOutcome};

pub use crate::games::twenty_four::{
    has_solution, CheckError, CheckOutcome, TwentyFourGame,
};
