use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GameConfig, GridSize, SPAWN_EDGE_INSET};
use crate::fruit::SpawnArea;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Result of one [`GameState::advance`] call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    Alive,
    AteFruit,
    Dead(DeathReason),
}

impl TickOutcome {
    #[must_use]
    pub fn is_dead(self) -> bool {
        matches!(self, Self::Dead(_))
    }
}

/// Complete mutable game state for one session.
///
/// The engine has no notion of pause or menus; it only resets, buffers a
/// direction, and advances.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub fruit: Position,
    speed: f32,
    death: Option<DeathReason>,
    tick_count: u64,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh game seeded from system entropy.
    ///
    /// # Panics
    ///
    /// Panics when the config has a zero-sized grid. Run
    /// [`GameConfig::validate`] first.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    ///
    /// # Panics
    ///
    /// Panics when the config has a zero-sized grid. Run
    /// [`GameConfig::validate`] first.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        debug_assert!(config.validate().is_ok());

        let snake = spawn_snake(&mut rng, config.grid());
        let fruit = SpawnArea::new(config.grid(), config.easy_mode).sample(&mut rng);

        Self {
            snake,
            fruit,
            speed: config.initial_speed,
            death: None,
            tick_count: 0,
            config,
            rng,
        }
    }

    /// Replaces the whole state with a new game, keeping config and RNG.
    ///
    /// # Panics
    ///
    /// Panics when the config has a zero-sized grid. Run
    /// [`GameConfig::validate`] first.
    pub fn reset(&mut self) {
        let rng = self.rng.clone();
        *self = Self::with_rng(self.config, rng);
    }

    /// Buffers `direction` for the next tick unless it reverses the facing.
    ///
    /// Returns whether the direction was accepted.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        self.snake.set_pending_direction(direction)
    }

    /// Advances simulation by one tick.
    ///
    /// Fruit pickup is resolved before the tail is trimmed, and trimming
    /// happens before collision checks, so the tile vacated by the tail this
    /// tick is free. Once dead, the state is frozen until [`GameState::reset`].
    pub fn advance(&mut self) -> TickOutcome {
        if let Some(reason) = self.death {
            return TickOutcome::Dead(reason);
        }

        self.tick_count += 1;
        let head = self.snake.push_head();

        let ate_fruit = head == self.fruit;
        if ate_fruit {
            self.snake.grow();
            self.speed += self.config.speed_increment;
            self.fruit = self.spawn_area().sample(&mut self.rng);
        }

        self.snake.trim();

        if !head.is_within_bounds(self.bounds()) {
            return self.die(DeathReason::WallCollision);
        }

        if self.snake.head_overlaps_body() {
            return self.die(DeathReason::SelfCollision);
        }

        if ate_fruit {
            TickOutcome::AteFruit
        } else {
            TickOutcome::Alive
        }
    }

    fn die(&mut self, reason: DeathReason) -> TickOutcome {
        self.death = Some(reason);
        TickOutcome::Dead(reason)
    }

    /// Fruit eaten this game. The starting segment does not count.
    #[must_use]
    pub fn score(&self) -> u32 {
        u32::try_from(self.snake.target_len() - 1).unwrap_or(u32::MAX)
    }

    /// Logical snake length.
    #[must_use]
    pub fn snake_length(&self) -> usize {
        self.snake.target_len()
    }

    /// Current speed in ticks per second.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[must_use]
    pub fn facing(&self) -> Direction {
        self.snake.facing()
    }

    #[must_use]
    pub fn pending_facing(&self) -> Direction {
        self.snake.pending_facing()
    }

    /// Returns the reason of death, if the last tick killed the snake.
    #[must_use]
    pub fn death(&self) -> Option<DeathReason> {
        self.death
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Region new fruit is drawn from.
    #[must_use]
    pub fn spawn_area(&self) -> SpawnArea {
        SpawnArea::new(self.bounds(), self.config.easy_mode)
    }
}

/// Range of starting coordinates on one axis, keeping clear of the edges.
///
/// Axes too short for the inset start at their center tile.
#[must_use]
pub fn start_axis_range(len: u16) -> RangeInclusive<i32> {
    let last = i32::from(len) - 1;
    let inset = i32::from(SPAWN_EDGE_INSET);
    if last - inset >= inset {
        inset..=last - inset
    } else {
        let center = i32::from(len / 2);
        center..=center
    }
}

fn spawn_snake<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Snake {
    let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
    let start = Position {
        x: rng.gen_range(start_axis_range(bounds.width)),
        y: rng.gen_range(start_axis_range(bounds.height)),
    };

    Snake::new(start, direction)
}
