use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{
    Board, SCORE_BASE, SCORE_PER_SEGMENT, SIZE_INTERVAL, SPEED_FLOOR_MS, SPEED_INTERVAL_MS,
    SPEED_SIZE_CAP, SPEED_START_MS,
};
use crate::error::GameError;
use crate::food::Food;
use crate::input::{Direction, GameInput, direction_change_is_valid};
use crate::snake::{Cell, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Why the last session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of one gameplay tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The snake moved; the next tick is due after the given delay.
    Continue(Duration),
    /// The snake crashed on this tick; no further tick is scheduled.
    GameOver(DeathReason),
    /// The session is not running, nothing happened.
    Idle,
}

/// Effect of one input event on the session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputEffect {
    /// The next tick will move in the new direction.
    Steered,
    /// The session was rebuilt; the first tick is due after the given delay.
    Restarted(Duration),
    /// The player asked to leave.
    Quit,
    /// The input does not apply in the current state.
    Ignored,
}

/// Score awarded for eating food at the given post-growth size.
#[must_use]
pub fn points_for_size(size: usize) -> u32 {
    let segments = u32::try_from(size).unwrap_or(u32::MAX);
    SCORE_BASE.saturating_add(SCORE_PER_SEGMENT.saturating_mul(segments))
}

/// Tick interval in milliseconds for a snake of `size` cells.
#[must_use]
pub fn speed_for_size(size: usize) -> u64 {
    let steps = u64::try_from(size / SIZE_INTERVAL).unwrap_or(u64::MAX);
    SPEED_START_MS
        .saturating_sub(steps.saturating_mul(SPEED_INTERVAL_MS))
        .max(SPEED_FLOOR_MS)
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    pub tick_count: u64,
    speed_ms: u64,
    direction: Direction,
    heading: Direction,
    board: Board,
    rng: StdRng,
}

impl GameSession {
    /// Starts a session with an entropy-seeded food sequence.
    pub fn new(board: Board) -> Result<Self, GameError> {
        Self::with_rng(board, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    pub fn new_with_seed(board: Board, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(board, StdRng::seed_from_u64(seed))
    }

    fn with_rng(board: Board, mut rng: StdRng) -> Result<Self, GameError> {
        let snake = initial_snake(board);
        let food = Food::spawn(&mut rng, board, &snake)?;

        log::info!(
            "new session on {0}x{0} board, food at ({1}, {2})",
            board.cells_per_side(),
            food.position.x,
            food.position.y
        );

        Ok(Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Running,
            death_reason: None,
            tick_count: 0,
            speed_ms: SPEED_START_MS,
            direction: Direction::Right,
            heading: Direction::Right,
            board,
            rng,
        })
    }

    /// Rebuilds the session in place exactly as at program start.
    ///
    /// The random stream carries on, so the new session gets fresh food.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let snake = initial_snake(self.board);
        let food = Food::spawn(&mut self.rng, self.board, &snake)?;

        self.snake = snake;
        self.food = food;
        self.score = 0;
        self.status = GameStatus::Running;
        self.death_reason = None;
        self.tick_count = 0;
        self.speed_ms = SPEED_START_MS;
        self.direction = Direction::Right;
        self.heading = Direction::Right;

        log::info!("session restarted");
        Ok(())
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> Result<TickOutcome, GameError> {
        if self.status != GameStatus::Running {
            return Ok(TickOutcome::Idle);
        }

        self.tick_count += 1;
        self.heading = self.direction;

        let new_head = self.snake.head().step(self.direction, self.board.unit);
        let grow = new_head == self.food.position;
        self.snake.advance(new_head, grow);

        if grow {
            self.eat()?;
        }

        if let Some(reason) = self.collision() {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(reason);
            log::info!(
                "game over after {} ticks: {reason:?}, size {}, score {}",
                self.tick_count,
                self.snake.size(),
                self.score
            );
            return Ok(TickOutcome::GameOver(reason));
        }

        Ok(TickOutcome::Continue(self.tick_interval()))
    }

    /// Requests a new direction for the next tick.
    ///
    /// Reversals are rejected against both the pending direction and the
    /// direction of the last move, so two quick turns cannot fold the head
    /// back onto the neck. Returns whether the request was accepted.
    pub fn change_direction(&mut self, requested: Direction) -> bool {
        if !direction_change_is_valid(self.direction, requested)
            || !direction_change_is_valid(self.heading, requested)
        {
            log::debug!("ignored reversal to {requested:?} while heading {:?}", self.heading);
            return false;
        }

        self.direction = requested;
        true
    }

    /// Applies one external input event.
    pub fn apply_input(&mut self, input: GameInput) -> Result<InputEffect, GameError> {
        let effect = match (self.status, input) {
            (_, GameInput::Quit) => InputEffect::Quit,
            (GameStatus::Running, GameInput::Direction(direction)) => {
                if self.change_direction(direction) {
                    InputEffect::Steered
                } else {
                    InputEffect::Ignored
                }
            }
            (GameStatus::GameOver, GameInput::Restart) => {
                self.reset()?;
                InputEffect::Restarted(self.tick_interval())
            }
            (GameStatus::Running, GameInput::Restart)
            | (GameStatus::GameOver, GameInput::Direction(_)) => InputEffect::Ignored,
        };

        Ok(effect)
    }

    /// Delay before the next tick at the current speed.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    #[must_use]
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// Direction the next tick will move in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    fn eat(&mut self) -> Result<(), GameError> {
        let size = self.snake.size();
        self.score = self.score.saturating_add(points_for_size(size));

        if size <= SPEED_SIZE_CAP {
            let speed = speed_for_size(size);
            if speed != self.speed_ms {
                log::info!("speed {} -> {speed} ms at size {size}", self.speed_ms);
            }
            self.speed_ms = speed;
        }

        self.food = Food::spawn(&mut self.rng, self.board, &self.snake)?;
        log::debug!(
            "ate food at size {size}, score {}, next food at ({}, {})",
            self.score,
            self.food.position.x,
            self.food.position.y
        );
        Ok(())
    }

    fn collision(&self) -> Option<DeathReason> {
        if !self.snake.head().is_within_bounds(self.board) {
            return Some(DeathReason::WallCollision);
        }

        if self.snake.head_collides_with_body() {
            return Some(DeathReason::SelfCollision);
        }

        None
    }
}

/// Two-cell snake in the top-left corner, head to the right.
fn initial_snake(board: Board) -> Snake {
    Snake::from_cells(vec![Cell::new(board.unit, 0), Cell::new(0, 0)])
}
