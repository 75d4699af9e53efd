//! Platform logging initialization for unzip_app.
//!
//! Writes logs to `./unzip_tool.log` in the current working directory.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./unzip_tool.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to ./unzip_tool.log in current directory.
    File,
    /// Write to both file and terminal.
    Both,
}

impl LogDestination {
    /// Debug builds echo to the terminal; release builds only keep the file.
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            LogDestination::Both
        } else {
            LogDestination::File
        }
    }

    fn echoes_to_terminal(self) -> bool {
        matches!(self, LogDestination::Both)
    }
}

/// Initialize the global logger. Failures are reported on stderr and otherwise ignored.
pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.echoes_to_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if let Some(file_logger) = create_file_logger(level, config) {
        loggers.push(file_logger);
    }
    if loggers.is_empty() {
        return;
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Info)
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let log_path = PathBuf::from(LOG_FILE);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_both_echoes_to_terminal() {
        assert!(LogDestination::Both.echoes_to_terminal());
        assert!(!LogDestination::File.echoes_to_terminal());
    }

    #[test]
    fn build_profile_picks_destination() {
        let expected = if cfg!(debug_assertions) {
            LogDestination::Both
        } else {
            LogDestination::File
        };
        assert_eq!(LogDestination::for_build(), expected);
    }
}
