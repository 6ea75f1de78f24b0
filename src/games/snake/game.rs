//! Snake movement, growth, and collision rules.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt::Write as _;
use tracing::debug;

use crate::core::GameRng;

/// Default grid width.
pub const DEFAULT_WIDTH: usize = 20;
/// Default grid height.
pub const DEFAULT_HEIGHT: usize = 20;

/// Grid coordinate. Row 0 is the top row, column 0 the left column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Facing direction of the snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The 180-degree reverse of this direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Row/column delta of one step.
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake advanced one cell.
    Moved,
    /// The snake reached the food and grew by one cell.
    Ate,
    /// The head left the grid; the game is over.
    HitWall,
    /// The head ran into the snake's own body; the game is over.
    HitSelf,
    /// The game was already over; nothing changed.
    AlreadyOver,
}

/// Snake game state.
///
/// The body is stored head-first; `occupied` mirrors it as a set for O(1)
/// collision checks and food placement, in the style of a board occupancy
/// cache.
///
/// The `growing` flag records whether the previous tick grew the snake.
/// It decides whether the tail cell belongs to the collision set: after a
/// growth tick the tail did not vacate and remains solid; after a normal
/// tick the tail is about to vacate and may be entered.
#[derive(Clone, Debug)]
pub struct SnakeGame {
    width: usize,
    height: usize,
    /// Body cells, head first.
    body: SmallVec<[Point; 16]>,
    /// Cells covered by the body.
    occupied: FxHashSet<Point>,
    facing: Direction,
    food: Point,
    score: u32,
    game_over: bool,
    growing: bool,
    rng: GameRng,
}

impl SnakeGame {
    /// Create a game on a `width` x `height` grid.
    ///
    /// The snake starts as a single cell at the grid center facing right,
    /// with food spawned at a random free cell.
    #[must_use]
    pub fn new(width: usize, height: usize, mut rng: GameRng) -> Self {
        assert!(width >= 2 && height >= 2, "Grid must be at least 2x2");

        let start = Point::new(height / 2, width / 2);
        let mut occupied = FxHashSet::default();
        occupied.insert(start);

        let food = Self::random_free_cell(width, height, &occupied, &mut rng);

        let mut body = SmallVec::new();
        body.push(start);

        Self {
            width,
            height,
            body,
            occupied,
            facing: Direction::Right,
            food,
            score: 0,
            game_over: false,
            growing: false,
            rng,
        }
    }

    /// Grid width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Body cells, head first.
    #[must_use]
    pub fn body(&self) -> &[Point] {
        &self.body
    }

    /// The head cell.
    #[must_use]
    pub fn head(&self) -> Point {
        self.body[0]
    }

    /// The food cell.
    #[must_use]
    pub fn food(&self) -> Point {
        self.food
    }

    /// Food eaten so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current facing direction.
    #[must_use]
    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Whether the previous tick grew the snake.
    #[must_use]
    pub fn is_growing(&self) -> bool {
        self.growing
    }

    /// Change the facing direction, effective on the next tick.
    ///
    /// A direction that is the exact reverse of the current facing is
    /// ignored, so a single keypress can never fold the snake onto its own
    /// neck.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction != self.facing.opposite() {
            self.facing = direction;
        }
    }

    /// Advance the snake one step in the facing direction.
    ///
    /// Wall exit and self-collision end the game and report the fatal
    /// outcome; they leave the body as it stood. Once over, further ticks
    /// return [`TickOutcome::AlreadyOver`] without mutating anything.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::AlreadyOver;
        }

        let next = match self.step_from(self.head()) {
            Some(point) => point,
            None => {
                self.game_over = true;
                debug!(head = ?self.head(), facing = ?self.facing, "hit wall");
                return TickOutcome::HitWall;
            }
        };

        // After a normal tick the tail vacates its cell this step, so the
        // head may enter it. After a growth tick it does not.
        let vacating = (!self.growing).then(|| self.body[self.body.len() - 1]);
        if self.occupied.contains(&next) && Some(next) != vacating {
            self.game_over = true;
            debug!(head = ?next, "hit body");
            return TickOutcome::HitSelf;
        }

        if next == self.food {
            self.body.insert(0, next);
            self.occupied.insert(next);
            self.score += 1;
            self.growing = true;
            debug!(score = self.score, length = self.body.len(), "food eaten");

            if self.occupied.len() == self.width * self.height {
                // The snake covers the whole grid; there is nowhere left
                // to spawn food or move.
                self.game_over = true;
            } else {
                self.food =
                    Self::random_free_cell(self.width, self.height, &self.occupied, &mut self.rng);
            }
            TickOutcome::Ate
        } else {
            // Drop the tail before adding the head: in a tail-chase the two
            // are the same cell, and removing it last would corrupt the
            // occupancy set.
            if let Some(tail) = self.body.pop() {
                self.occupied.remove(&tail);
            }
            self.body.insert(0, next);
            self.occupied.insert(next);
            self.growing = false;
            TickOutcome::Moved
        }
    }

    /// One step from `point` along the facing direction, or `None` off the
    /// grid.
    fn step_from(&self, point: Point) -> Option<Point> {
        let (dr, dc) = self.facing.delta();
        let row = point.row as isize + dr;
        let col = point.col as isize + dc;

        if row < 0 || col < 0 || row >= self.height as isize || col >= self.width as isize {
            None
        } else {
            Some(Point::new(row as usize, col as usize))
        }
    }

    /// Uniformly random cell outside `occupied`, by rejection sampling.
    ///
    /// The caller must ensure at least one free cell exists.
    fn random_free_cell(
        width: usize,
        height: usize,
        occupied: &FxHashSet<Point>,
        rng: &mut GameRng,
    ) -> Point {
        loop {
            let candidate = Point::new(rng.gen_range_usize(0..height), rng.gen_range_usize(0..width));
            if !occupied.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Render the grid with borders, head (`@`), body (`O`), and food (`*`).
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let border: String = "-".repeat(self.width * 2 + 1);

        let _ = writeln!(out, " {border}");
        for row in 0..self.height {
            out.push('|');
            for col in 0..self.width {
                let point = Point::new(row, col);
                let glyph = if point == self.head() {
                    '@'
                } else if self.occupied.contains(&point) {
                    'O'
                } else if point == self.food {
                    '*'
                } else {
                    ' '
                };
                if col > 0 {
                    out.push(' ');
                }
                out.push(glyph);
            }
            out.push_str("|\n");
        }
        let _ = writeln!(out, " {border}");

        out
    }
}
