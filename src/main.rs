use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{error, info, warn};
use tile_snake::config::GameConfig;
use tile_snake::error::AppError;
use tile_snake::input::InputHandler;
use tile_snake::logging::init_file_logger;
use tile_snake::shell::{Shell, ShellControl};
use tile_snake::terminal_runtime::{install_panic_hook, TerminalSession};

#[derive(Debug, Parser)]
#[command(version, about = "Grid Snake in the terminal")]
struct Cli {
    /// JSON config file. Defaults to the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid columns.
    #[arg(long)]
    width: Option<u16>,

    /// Grid rows.
    #[arg(long)]
    height: Option<u16>,

    /// Terminal columns per tile.
    #[arg(long = "tile-size")]
    tile_size: Option<u16>,

    /// Starting speed in ticks per second.
    #[arg(long)]
    speed: Option<f32>,

    /// Speed gained per fruit, in ticks per second.
    #[arg(long = "speed-increment")]
    speed_increment: Option<f32>,

    /// Keep fruit off the outer ring of the grid.
    #[arg(long)]
    easy: bool,

    /// Seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file. Filter with RUST_LOG.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut GameConfig) {
        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(tile_size) = self.tile_size {
            config.tile_size = tile_size;
        }
        if let Some(speed) = self.speed {
            config.initial_speed = speed;
        }
        if let Some(increment) = self.speed_increment {
            config.speed_increment = increment;
        }
        if self.easy {
            config.easy_mode = true;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("tile-snake: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    if let Some(path) = &cli.log_file {
        init_file_logger(path)?;
    }

    let (mut config, source) = GameConfig::discover(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    match source {
        Some(path) => info!("loaded config from {}", path.display()),
        None => info!("using built-in config"),
    }
    info!("config: {config:?}");
    if !config.fits_spawn_inset() {
        warn!(
            "grid {}x{} is smaller than the spawn inset; snake starts at the center",
            config.grid_width, config.grid_height
        );
    }

    let shell = Shell::with_config(config, cli.seed);

    install_panic_hook();
    let session = TerminalSession::enter()?;
    play(session, shell)
}

fn play(mut session: TerminalSession, mut shell: Shell) -> Result<(), AppError> {
    let mut input = InputHandler::new();
    let mut next_tick = Instant::now() + shell.tick_interval();
    let mut last_phase = shell.phase();

    loop {
        let board_drawn = session.draw(&shell)?;
        shell.set_board_visible(board_drawn);

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if let Some(game_input) = input.poll_input(timeout)? {
            if shell.handle_input(game_input) == ShellControl::Quit {
                break;
            }
        }

        if shell.phase() != last_phase {
            last_phase = shell.phase();
            next_tick = Instant::now() + shell.tick_interval();
            continue;
        }

        if Instant::now() >= next_tick {
            shell.on_tick();
            next_tick = Instant::now() + shell.tick_interval();
        }
    }

    info!("exiting");
    Ok(())
}
