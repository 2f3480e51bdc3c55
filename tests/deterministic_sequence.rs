use std::time::{Duration, Instant};

use slither::config::BOARD;
use slither::food::Food;
use slither::game::{GameSession, Phase};
use slither::grid::Cell;
use slither::input::Direction;
use slither::scheduler::TickScheduler;
use slither::snake::{Snake, Velocity};

#[test]
fn stepwise_food_collection_then_wall_collision() {
    let mut session = GameSession::new_with_seed(BOARD, 42);
    assert!(session.start().is_some());
    session.snake = Snake::new(Cell { x: 17, y: 1 }, Velocity::RIGHT);
    session.food = Food::at(Cell { x: 18, y: 1 });

    // Tick 1: eat the food at (18,1).
    let outcome = session.step();
    assert!(outcome.ate_food);
    assert_eq!(session.score, 10);
    assert_eq!(session.snake.len(), 2);
    assert_eq!(session.snake.head(), Cell { x: 18, y: 1 });
    assert!(!session.snake.occupies(session.food.position));

    // Tick 2: turn up and move to the top row.
    session.request_direction(Direction::Up);
    let outcome = session.step();
    assert!(outcome.frame_ready);
    assert_eq!(session.snake.head(), Cell { x: 18, y: 0 });

    // Tick 3: the candidate head leaves the grid; game over, snake frozen.
    let outcome = session.step();
    assert_eq!(outcome.game_over, Some(10));
    assert_eq!(session.phase, Phase::Over);
    assert_eq!(session.snake.head(), Cell { x: 18, y: 0 });
    assert_eq!(session.snake.len(), 2);

    // Over is terminal: further ticks do nothing.
    assert!(session.step().game_over.is_none());
    assert_eq!(session.phase, Phase::Over);
}

#[test]
fn level_boundary_swaps_the_tick_cadence_cleanly() {
    let mut session = GameSession::new_with_seed(BOARD, 7);
    let start = Instant::now();

    let interval = session.start().expect("idle session should start");
    assert_eq!(interval, Duration::from_millis(200));
    let mut scheduler = TickScheduler::new(interval);
    scheduler.schedule(start, interval);

    // Feed the snake a food per tick by planting it on the path.
    let mut now = start;
    for eaten in 1..=3u32 {
        session.food = Food::at(session.snake.candidate_head());

        now += scheduler.interval();
        assert!(scheduler.poll(now));
        let outcome = session.step();

        assert!(outcome.ate_food);
        assert_eq!(session.score, eaten * 10);

        if let Some(new_interval) = outcome.new_tick_interval {
            scheduler.schedule(now, new_interval);
        }

        // 30 points is the level-2 boundary; the cadence swaps exactly once.
        let expected_ms = if session.score >= 30 { 188 } else { 200 };
        assert_eq!(scheduler.interval(), Duration::from_millis(expected_ms));

        // No residual tick from the pre-swap schedule.
        assert!(!scheduler.poll(now));
    }

    assert_eq!(session.speed_level, 2);
}

#[test]
fn full_reset_cycle_after_game_over() {
    let mut session = GameSession::new_with_seed(BOARD, 9);
    assert!(session.start().is_some());
    session.score = 200;
    session.speed_level = 7;
    session.snake = Snake::new(Cell { x: 0, y: 0 }, Velocity { dx: 0, dy: -1 });

    assert_eq!(session.step().game_over, Some(200));

    let interval = session.start().expect("over session should restart");
    assert_eq!(interval, Duration::from_millis(200));
    assert_eq!(session.phase, Phase::Running);
    assert_eq!(session.score, 0);
    assert_eq!(session.speed_level, 1);
    assert_eq!(session.snake.head(), Cell { x: 10, y: 10 });
    assert_eq!(session.snake.velocity(), Velocity::RIGHT);
}
