use serpent::config::GridSize;
use serpent::game::GameState;
use serpent::input::{Command, Direction};
use serpent::snake::Position;

#[test]
fn stepwise_food_collection_wall_death_and_restart() {
    let bounds = GridSize {
        width: 8,
        height: 6,
    };
    let mut state = GameState::new_with_seed(bounds, 42);

    // Fresh game: three segments centered, heading right.
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.head(), Position { x: 4, y: 3 });

    // Put food directly in the snake's path and eat it.
    state.food = Position { x: 5, y: 3 };
    state.tick();
    assert_eq!(state.score, 10);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.head(), Position { x: 5, y: 3 });

    // Park the regenerated food out of the way for the rest of the run.
    state.food = Position { x: 1, y: 1 };

    // Drive up into the top wall.
    state.handle_command(Command::Move(Direction::Up));
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 5, y: 2 });
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 5, y: 1 });
    assert!(!state.is_over);

    state.tick();
    assert!(state.is_over);
    assert_eq!(state.high_score, 10);

    // Game over freezes the simulation.
    state.tick();
    assert_eq!(state.snake.head(), Position { x: 5, y: 1 });
    assert_eq!(state.snake.len(), 4);

    // Restart begins a fresh run but keeps the high score.
    state.handle_command(Command::Restart);
    assert!(!state.is_over);
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.head(), Position { x: 4, y: 3 });
    assert_eq!(state.high_score, 10);

    state.tick();
    assert_eq!(state.snake.head(), Position { x: 5, y: 3 });
}
