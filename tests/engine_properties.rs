use proptest::prelude::*;

use tile_snake::config::GameConfig;
use tile_snake::game::{GameState, TickOutcome};
use tile_snake::input::Direction;
use tile_snake::snake::{Position, Snake};

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn config() -> impl Strategy<Value = GameConfig> {
    (11u16..40, 11u16..40, any::<bool>()).prop_map(|(width, height, easy_mode)| GameConfig {
        easy_mode,
        ..GameConfig::with_grid(width, height)
    })
}

#[test]
fn eaten_fruit_moves_elsewhere() {
    let config = GameConfig::default();
    let start = Position::new(10, 10);
    let eaten = start.step(Direction::Right);

    let mut respawned_in_place = 0;
    for seed in 0..200 {
        let mut state = GameState::new_with_seed(config, seed);
        state.snake = Snake::new(start, Direction::Right);
        state.fruit = eaten;

        assert_eq!(state.advance(), TickOutcome::AteFruit);
        if state.fruit == eaten {
            respawned_in_place += 1;
        }
    }

    // One tile in 2500 on the default grid; a handful would already be suspicious.
    assert!(respawned_in_place <= 2, "fruit respawned in place {respawned_in_place} times");
}

proptest! {
    #[test]
    fn surviving_ticks_stay_in_bounds_with_exact_length(
        config in config(),
        seed in any::<u64>(),
        moves in prop::collection::vec(prop::option::of(direction()), 1..200),
    ) {
        let mut state = GameState::new_with_seed(config, seed);

        for command in moves {
            if let Some(direction) = command {
                state.set_pending_direction(direction);
            }

            let outcome = state.advance();
            if outcome.is_dead() {
                break;
            }

            prop_assert!(state.snake.head().is_within_bounds(state.bounds()));
            prop_assert_eq!(state.snake.len(), state.snake_length());
            prop_assert!(state.spawn_area().contains(state.fruit));
        }
    }

    #[test]
    fn reversal_leaves_pending_direction_unchanged(
        config in config(),
        seed in any::<u64>(),
        first in direction(),
    ) {
        let mut state = GameState::new_with_seed(config, seed);
        state.set_pending_direction(first);
        let pending = state.pending_facing();

        prop_assert!(!state.set_pending_direction(state.facing().opposite()));
        prop_assert_eq!(state.pending_facing(), pending);
    }

    #[test]
    fn reset_produces_fresh_game(config in config(), seed in any::<u64>()) {
        let mut state = GameState::new_with_seed(config, seed);
        state.advance();
        state.reset();

        let bounds = state.bounds();
        let head = state.snake.head();
        prop_assert_eq!(state.snake_length(), 1);
        prop_assert_eq!(state.snake.len(), 1);
        prop_assert!(head.x >= 5 && head.x <= i32::from(bounds.width) - 6);
        prop_assert!(head.y >= 5 && head.y <= i32::from(bounds.height) - 6);
        prop_assert!(state.spawn_area().contains(state.fruit));
        prop_assert_eq!(state.speed(), config.initial_speed);
        prop_assert_eq!(state.score(), 0);
    }

    #[test]
    fn eating_grows_by_one_and_speeds_up(
        config in config(),
        seed in any::<u64>(),
        facing in direction(),
    ) {
        let mut state = GameState::new_with_seed(config, seed);
        let start = Position::new(5, 5);
        state.snake = Snake::new(start, facing);
        state.fruit = start.step(facing);
        let speed = state.speed();

        prop_assert_eq!(state.advance(), TickOutcome::AteFruit);
        prop_assert_eq!(state.snake_length(), 2);
        prop_assert_eq!(state.speed(), speed + config.speed_increment);
        prop_assert!(state.spawn_area().contains(state.fruit));
    }
}
