//! Move validation, win detection, and turn state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::{Board, Stone, DEFAULT_BOARD_SIZE};

/// Stones in a row required to win.
pub const WIN_LENGTH: usize = 5;

/// The four line directions checked for a win. The opposite orientation of
/// each is scanned as the negated delta, so four entries cover all eight
/// rays.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// A player completed a five-in-a-row line.
    Won(Stone),
    /// The board filled without a winning line.
    Draw,
}

/// Result of a legal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Stone placed; play passes to the opponent.
    Moved,
    /// Stone placed and completed a winning line.
    Won(Stone),
    /// Stone placed into the last empty cell without completing a line.
    Draw,
}

/// Rejected move. The board is unchanged in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates outside the board.
    OutOfBounds { row: usize, col: usize },
    /// The target cell already holds a stone.
    CellOccupied { row: usize, col: usize },
    /// The game already ended.
    GameOver,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OutOfBounds { row, col } => {
                write!(f, "Position ({row}, {col}) is out of bounds")
            }
            MoveError::CellOccupied { row, col } => {
                write!(f, "Position ({row}, {col}) is already occupied")
            }
            MoveError::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Five-in-a-row game state.
///
/// Two players alternate placing stones; the first to line up
/// [`WIN_LENGTH`] stones horizontally, vertically, or diagonally wins.
/// Filling the board without a line ends the game in a draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GomokuGame {
    board: Board,
    to_move: Stone,
    status: GameStatus,
    moves_played: u32,
}

impl GomokuGame {
    /// Create a game on the standard 15x15 board.
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }

    /// Create a game on a board of the given side length.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        Self {
            board: Board::new(size),
            to_move: Stone::Black,
            status: GameStatus::InProgress,
            moves_played: 0,
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    /// Current game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game reached a terminal status.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Stones placed so far.
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Place the current player's stone at `(row, col)`.
    ///
    /// On success the turn passes to the opponent unless the move ended the
    /// game. Rejected moves leave the board, turn, and status untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the status is terminal.
    /// - [`MoveError::OutOfBounds`] if either coordinate is outside the board.
    /// - [`MoveError::CellOccupied`] if the cell already holds a stone.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if row >= self.board.size() || col >= self.board.size() {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !self.board.is_empty_at(row, col) {
            return Err(MoveError::CellOccupied { row, col });
        }

        let stone = self.to_move;
        self.board.set(row, col, stone);
        self.moves_played += 1;

        if self.completes_line(row, col, stone) {
            self.status = GameStatus::Won(stone);
            debug!(player = %stone, row, col, "five in a row");
            return Ok(MoveOutcome::Won(stone));
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            debug!(moves = self.moves_played, "board full, draw");
            return Ok(MoveOutcome::Draw);
        }

        self.to_move = stone.opponent();
        Ok(MoveOutcome::Moved)
    }

    /// Whether the stone just placed at `(row, col)` completes a winning
    /// line.
    ///
    /// Only lines through the placed cell can have been completed by this
    /// move, so each direction is scanned outward from it in both
    /// orientations, counting the placed cell once.
    fn completes_line(&self, row: usize, col: usize, stone: Stone) -> bool {
        DIRECTIONS.iter().any(|&(dr, dc)| {
            let count =
                1 + self.run_length(row, col, dr, dc, stone) + self.run_length(row, col, -dr, -dc, stone);
            count >= WIN_LENGTH
        })
    }

    /// Contiguous same-stone cells extending from (but excluding)
    /// `(row, col)` along the `(dr, dc)` ray.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, stone: Stone) -> usize {
        let mut len = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;

        while r >= 0 && c >= 0 && self.board.stone_at(r as usize, c as usize) == Some(stone) {
            len += 1;
            r += dr;
            c += dc;
        }

        len
    }
}

impl Default for GomokuGame {
    fn default() -> Self {
        Self::new()
    }
}
