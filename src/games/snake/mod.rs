//! Snake on a fixed-size grid.
//!
//! The snake advances one cell per tick, grows when it reaches the food,
//! and dies on wall exit or self-collision. Tail timing is exact: a tick
//! that follows a growth tick treats the tail cell as solid, while one that
//! follows a normal tick lets the head enter the cell the tail is vacating.

mod game;

pub use game::{
    Direction, Point, SnakeGame, TickOutcome, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
