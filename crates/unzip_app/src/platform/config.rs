use std::time::Duration;

use unzip_engine::WorkerSettings;

use super::logging::LogDestination;

/// Compiled-in settings for the desktop shell.
pub struct AppConfig {
    pub title: &'static str,
    pub width: f32,
    pub height: f32,
    /// Interval of the status-queue poll; re-armed every frame.
    pub poll_interval: Duration,
    pub log_destination: LogDestination,
    pub worker: WorkerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "My Unzip Tool. Version 0.9",
            width: 500.0,
            height: 400.0,
            poll_interval: Duration::from_millis(20),
            log_destination: LogDestination::for_build(),
            worker: WorkerSettings::default(),
        }
    }
}
