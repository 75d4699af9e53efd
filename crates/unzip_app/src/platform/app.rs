use std::collections::VecDeque;
use std::time::Duration;

use eframe::egui;
use unzip_core::{update, AppState, Msg};
use unzip_logging::unzip_info;

use super::config::AppConfig;
use super::dialogs;
use super::effects::EffectRunner;
use super::logging;
use super::ui::render::{self, UiAction};

pub fn run_app() -> eframe::Result<()> {
    let config = AppConfig::default();
    logging::initialize(config.log_destination);
    unzip_info!("Starting {}", config.title);

    let viewport = egui::ViewportBuilder::default()
        .with_title(config.title)
        .with_inner_size([config.width, config.height])
        .with_resizable(false);
    let options = eframe::NativeOptions {
        centered: true,
        viewport,
        ..Default::default()
    };

    let title = config.title;
    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| Ok(Box::new(UnzipApp::new(config)))),
    )
}

/// Owns the coordinator state; every mutation happens on the UI thread.
struct UnzipApp {
    state: AppState,
    effects: EffectRunner,
    poll_interval: Duration,
}

impl UnzipApp {
    fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(),
            effects: EffectRunner::new(config.worker),
            poll_interval: config.poll_interval,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            inbox.extend(self.effects.run(effects));
        }
    }

    /// Drains the worker queue in arrival order and releases a finished worker.
    fn poll(&mut self) {
        for msg in self.effects.poll() {
            self.dispatch(msg);
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        let msg = match action {
            UiAction::Dispatch(msg) => msg,
            UiAction::BrowseArchive => match dialogs::browse_for_archive() {
                Ok(path) => Msg::ArchiveSelected(path),
                Err(err) => Msg::SelectionRejected(err.to_string()),
            },
            UiAction::BrowseDestination => match dialogs::browse_for_destination() {
                Ok(path) => Msg::DestinationSelected(path),
                Err(err) => Msg::SelectionRejected(err.to_string()),
            },
        };
        self.dispatch(msg);
    }
}

impl eframe::App for UnzipApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        let view = self.state.view();
        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| render::render(ui, &view))
            .inner;
        for action in actions {
            self.handle_action(action);
        }

        if self.state.consume_dirty() {
            ctx.request_repaint();
        }
        // Fire-and-reschedule: the next poll happens on the next tick whatever happened here.
        ctx.request_repaint_after(self.poll_interval);
    }
}
