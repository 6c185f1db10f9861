//! Grid Snake: a pure game engine plus the terminal shell that drives it.
//!
//! [`game::GameState`] is the engine. It buffers a direction, advances one
//! tick at a time, and reports [`game::TickOutcome`]. Everything in
//! [`shell`], [`renderer`], and [`ui`] is presentation built on top of it.

pub mod config;
pub mod error;
pub mod fruit;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod shell;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
