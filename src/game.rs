use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{
    GridSize, BASE_TICK_INTERVAL_MS, INITIAL_SNAKE_LEN, MIN_TICK_INTERVAL_MS, POINTS_PER_FOOD,
    SCORE_PER_SPEEDUP_MS,
};
use crate::food;
use crate::input::{Command, Direction};
use crate::snake::{Position, Snake};
use crate::view::GameView;

/// Complete mutable game state for one process lifetime.
///
/// The engine performs no I/O: it consumes [`Command`]s, advances on
/// [`tick`](Self::tick), and hands the renderer a read-only [`GameView`].
/// `reset` (via `Command::Restart`) reinitializes everything except the
/// high score and the grid bounds.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub high_score: u32,
    pub is_over: bool,
    direction: Direction,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a state with entropy-seeded food placement.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::from_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::from_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn from_rng(bounds: GridSize, rng: StdRng) -> Self {
        let mut state = Self {
            snake: Snake::from_segments(Vec::new()),
            food: Position { x: 0, y: 0 },
            score: 0,
            high_score: 0,
            is_over: false,
            direction: Direction::Right,
            bounds,
            rng,
        };
        state.reset();
        state
    }

    /// Reinitializes snake, direction, food, score, and the game-over flag.
    /// High score and bounds survive.
    pub fn reset(&mut self) {
        self.snake = Snake::centered_in(self.bounds, INITIAL_SNAKE_LEN);
        self.direction = Direction::Right;
        self.score = 0;
        self.is_over = false;
        self.place_food();
    }

    /// Applies one command.
    ///
    /// `Quit` is a driver-level signal and a no-op here. `Restart` only
    /// takes effect after a game over. A move that exactly reverses the
    /// current direction is rejected; any other move takes effect
    /// immediately, so the last valid input before a tick wins.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::Quit => {}
            Command::Restart => {
                if self.is_over {
                    self.reset();
                }
            }
            Command::Move(direction) => {
                if !self.is_over && direction != self.direction.opposite() {
                    self.direction = direction;
                }
            }
        }
    }

    /// Advances the simulation by one step. A no-op once the game is over.
    pub fn tick(&mut self) {
        if self.is_over {
            return;
        }

        let new_head = self.snake.head().step(self.direction);

        if new_head.hits_wall(self.bounds) || self.snake.occupies(new_head) {
            self.end_game();
            return;
        }

        self.snake.push_head(new_head);

        if new_head == self.food {
            self.score += POINTS_PER_FOOD;
            self.place_food();
        } else {
            self.snake.pop_tail();
        }
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the grid bounds, wall ring included.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns a read-only projection for rendering.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView::new(self)
    }

    fn end_game(&mut self) {
        self.is_over = true;
        self.high_score = self.high_score.max(self.score);
    }

    fn place_food(&mut self) {
        match food::spawn(&mut self.rng, self.bounds, &self.snake) {
            Some(position) => self.food = position,
            // The snake covers every playable cell; nowhere left to go.
            None => self.end_game(),
        }
    }
}

/// Tick interval for the driver loop: shrinks by one millisecond per 50
/// points, never below the floor. Recomputed from the score after every
/// tick; the engine keeps no timer of its own.
#[must_use]
pub fn tick_interval_for_score(score: u32) -> Duration {
    let interval = BASE_TICK_INTERVAL_MS
        .saturating_sub(u64::from(score / SCORE_PER_SPEEDUP_MS))
        .max(MIN_TICK_INTERVAL_MS);
    Duration::from_millis(interval)
}
