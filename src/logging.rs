use std::fs::{self, File};
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::AppError;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Routes `log` records to `path`.
///
/// The terminal is in the alternate screen while playing, so records never go
/// to stderr. The filter honours `RUST_LOG`.
pub fn init_file_logger(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(AppError::LogFile)?;
    }

    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(AppError::LogFile)?;

    build_logger(file).try_init()?;
    Ok(())
}

fn build_logger(file: File) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.target(Target::Pipe(Box::new(file)));
    builder
}
