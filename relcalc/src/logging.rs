use log::LevelFilter;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(thiserror::Error, Debug)]
pub enum LoggingError {
    #[error("failed to create transcript file '{}': {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Renders one transcript line: `timestamp - level - message`.
pub fn format_line(timestamp: &str, level: log::Level, message: &fmt::Arguments<'_>) -> String {
    format!("{timestamp} - {level} - {message}")
}

/// Truncates `path` and routes this crate's log records into it.
///
/// Records from other crates (windowing, graphics backends) are dropped.
pub fn init_transcript_log(path: &Path, level: LevelFilter) -> Result<(), LoggingError> {
    let log_file = File::create(path).map_err(|source| LoggingError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    env_logger::Builder::new()
        .filter_level(LevelFilter::Off)
        .filter_module("relcalc", level)
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
            writeln!(buf, "{}", format_line(&timestamp, record.level(), record.args()))
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()?;
    Ok(())
}
