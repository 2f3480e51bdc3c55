use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::POINTS_PER_FOOD;
use crate::difficulty::{speed_level_for_score, tick_interval_for_level};
use crate::food::Food;
use crate::grid::GridSize;
use crate::input::Direction;
use crate::snake::{Snake, Velocity};

/// High-level session phase.
///
/// `Idle` and `Over` both show a static board; they differ only in whether
/// a finished game's score is on display. `Over` is terminal for a game
/// instance and reachable only from `Running` via collision.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Over,
}

/// Signals produced by one `step` call, consumed by the runtime to drive
/// the render and audio collaborators.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct StepOutcome {
    /// A successful tick completed and the board changed.
    pub frame_ready: bool,
    /// The snake ate the food this tick.
    pub ate_food: bool,
    /// The game just ended; carries the final score.
    pub game_over: Option<u32>,
    /// The speed level changed; the tick timer must swap to this cadence.
    pub new_tick_interval: Option<Duration>,
}

impl StepOutcome {
    /// Outcome of a step that did nothing (phase was not `Running`).
    #[must_use]
    pub fn skipped() -> Self {
        Self::default()
    }
}

/// Complete mutable state for one game session.
///
/// Owns everything exclusively; no globals, so independent sessions can
/// coexist (and tests run in parallel).
#[derive(Debug, Clone)]
pub struct GameSession {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub speed_level: u32,
    pub phase: Phase,
    bounds: GridSize,
    rng: StdRng,
}

impl GameSession {
    /// Creates an idle session with a deterministic RNG.
    ///
    /// The board renders statically until `start` is called: a single
    /// centered snake cell with zero velocity, and food already placed.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let snake = Snake::new(bounds.center(), Velocity::STILL);
        let food = Food::place(&mut rng, bounds, &snake);

        Self {
            snake,
            food,
            score: 0,
            speed_level: 1,
            phase: Phase::Idle,
            bounds,
            rng,
        }
    }

    /// Returns the grid dimensions for this session.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the tick cadence for the current speed level.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        tick_interval_for_level(self.speed_level)
    }

    /// Starts a new game from `Idle` or `Over`.
    ///
    /// Resets the snake to a single centered cell moving rightward, score
    /// to 0, speed level to 1, and places fresh food. Returns the tick
    /// interval to schedule, or `None` when a game is already in progress
    /// (`Running` or `Paused`).
    pub fn start(&mut self) -> Option<Duration> {
        if matches!(self.phase, Phase::Running | Phase::Paused) {
            return None;
        }
        Some(self.reset_and_run())
    }

    /// Stops whatever is in progress and starts a fresh game.
    ///
    /// Unlike `start`, this works from any phase. Returns the tick
    /// interval to schedule.
    pub fn restart(&mut self) -> Duration {
        self.reset_and_run()
    }

    /// Toggles between `Running` and `Paused`; no-op in `Idle` or `Over`.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
    }

    /// Requests a direction change, applied before the next tick.
    ///
    /// Reversals along the moving axis are a silent no-op (see
    /// `Snake::steer`). Ignored outside `Running`, which keeps the
    /// velocity zero until the first game starts.
    pub fn request_direction(&mut self, direction: Direction) {
        if self.phase == Phase::Running {
            self.snake.steer(direction);
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// No-op unless `Running`. The candidate head is tested against the
    /// walls and the full pre-move body before anything mutates: moving
    /// onto the current tail cell is fatal even though the tail would
    /// vacate it this tick. That matches the classic rules here; keep it.
    pub fn step(&mut self) -> StepOutcome {
        if self.phase != Phase::Running {
            return StepOutcome::skipped();
        }

        let candidate = self.snake.candidate_head();
        if !candidate.is_within_bounds(self.bounds) || self.snake.occupies(candidate) {
            self.phase = Phase::Over;
            return StepOutcome {
                game_over: Some(self.score),
                ..StepOutcome::default()
            };
        }

        let ate_food = candidate == self.food.position;
        self.snake.advance_to(candidate, ate_food);

        let mut outcome = StepOutcome {
            frame_ready: true,
            ate_food,
            ..StepOutcome::default()
        };

        if ate_food {
            self.score += POINTS_PER_FOOD;
            let level = speed_level_for_score(self.score);
            if level != self.speed_level {
                self.speed_level = level;
                outcome.new_tick_interval = Some(tick_interval_for_level(level));
            }
            self.food = Food::place(&mut self.rng, self.bounds, &self.snake);
        }

        outcome
    }

    fn reset_and_run(&mut self) -> Duration {
        self.snake = Snake::new(self.bounds.center(), Velocity::RIGHT);
        self.score = 0;
        self.speed_level = 1;
        self.food = Food::place(&mut self.rng, self.bounds, &self.snake);
        self.phase = Phase::Running;
        self.tick_interval()
    }
}
