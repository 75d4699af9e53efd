mod app;
mod config;
mod dialogs;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
