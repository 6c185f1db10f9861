use std::time::Duration;

use log::{debug, info};

use crate::config::{GameConfig, MIN_TICK_INTERVAL_MS};
use crate::game::{DeathReason, GameState, TickOutcome};
use crate::input::GameInput;

/// Screen-level state layered on top of the engine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ShellPhase {
    Start,
    Running,
    Paused,
    Dead { score: u32, reason: DeathReason },
}

/// What the main loop should do after handling an input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ShellControl {
    Continue,
    Quit,
}

/// Owns the single game state and drives it from inputs and ticks.
#[derive(Debug, Clone)]
pub struct Shell {
    state: GameState,
    phase: ShellPhase,
    /// False while the terminal is too small to show the board.
    board_visible: bool,
}

impl Shell {
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            phase: ShellPhase::Start,
            board_visible: true,
        }
    }

    #[must_use]
    pub fn with_config(config: GameConfig, seed: Option<u64>) -> Self {
        let state = match seed {
            Some(seed) => GameState::new_with_seed(config, seed),
            None => GameState::new(config),
        };
        Self::new(state)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> ShellPhase {
        self.phase
    }

    #[must_use]
    pub fn board_visible(&self) -> bool {
        self.board_visible
    }

    /// Records whether the last frame could show the board.
    ///
    /// A running game pauses when the board disappears, and inputs other than
    /// quit are ignored until it is visible again.
    pub fn set_board_visible(&mut self, visible: bool) {
        if visible == self.board_visible {
            return;
        }

        self.board_visible = visible;
        if !visible && self.phase == ShellPhase::Running {
            info!("board hidden by a small terminal, pausing");
            self.phase = ShellPhase::Paused;
        }
    }

    /// Applies one input event to the current phase.
    pub fn handle_input(&mut self, input: GameInput) -> ShellControl {
        if input == GameInput::Quit {
            info!("quit requested at score {}", self.state.score());
            return ShellControl::Quit;
        }

        if !self.board_visible {
            return ShellControl::Continue;
        }

        match (self.phase, input) {
            (ShellPhase::Start, _) => {
                info!("game started");
                if let GameInput::Direction(direction) = input {
                    self.state.set_pending_direction(direction);
                }
                self.phase = ShellPhase::Running;
            }
            (ShellPhase::Running, GameInput::Direction(direction)) => {
                if !self.state.set_pending_direction(direction) {
                    debug!("rejected reversal to {direction:?}");
                }
            }
            (ShellPhase::Running, GameInput::Pause) => {
                info!("paused");
                self.phase = ShellPhase::Paused;
            }
            (ShellPhase::Paused, GameInput::Pause) => {
                info!("resumed");
                self.phase = ShellPhase::Running;
            }
            (ShellPhase::Dead { .. }, GameInput::Confirm) => {
                self.state.reset();
                info!("new game after death");
                self.phase = ShellPhase::Running;
            }
            _ => {}
        }

        ShellControl::Continue
    }

    /// Advances the engine once when running with the board on screen;
    /// otherwise ticks are ignored.
    pub fn on_tick(&mut self) -> Option<TickOutcome> {
        if self.phase != ShellPhase::Running || !self.board_visible {
            return None;
        }

        let outcome = self.state.advance();
        match outcome {
            TickOutcome::AteFruit => {
                debug!(
                    "fruit eaten: score {}, speed {:.1}",
                    self.state.score(),
                    self.state.speed()
                );
            }
            TickOutcome::Dead(reason) => {
                let score = self.state.score();
                info!("snake died ({reason:?}) with score {score}");
                self.phase = ShellPhase::Dead { score, reason };
            }
            TickOutcome::Alive => {}
        }

        Some(outcome)
    }

    /// Time between ticks at the engine's current speed.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        tick_interval_for_speed(self.state.speed())
    }
}

/// Converts a speed in ticks per second to a tick interval.
#[must_use]
pub fn tick_interval_for_speed(speed: f32) -> Duration {
    let floor = Duration::from_millis(MIN_TICK_INTERVAL_MS);
    if !speed.is_finite() || speed <= 0.0 {
        return floor;
    }

    Duration::from_secs_f32(1.0 / speed).max(floor)
}
