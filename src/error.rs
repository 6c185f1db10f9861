use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Fatal errors that stop the program before or during a session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error("failed to open log file: {0}")]
    LogFile(#[source] io::Error),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
