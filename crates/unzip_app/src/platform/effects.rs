use unzip_core::{Effect, Msg, StatusLine};
use unzip_engine::{ExtractionHandle, StatusMessage, TaskRequest, WorkerSettings};
use unzip_logging::{unzip_error, unzip_info, unzip_warn};

/// Executes core effects and turns worker output back into messages.
///
/// Holds at most one worker handle at a time; the UI thread is the only caller.
pub struct EffectRunner {
    settings: WorkerSettings,
    current: Option<ExtractionHandle>,
}

impl EffectRunner {
    pub fn new(settings: WorkerSettings) -> Self {
        Self {
            settings,
            current: None,
        }
    }

    /// Runs effects; returns messages that must be dispatched immediately
    /// (only produced when a worker could not be started).
    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut feedback = Vec::new();
        for effect in effects {
            match effect {
                Effect::StartExtraction(request) => {
                    if self.current.is_some() {
                        unzip_warn!("StartExtraction ignored: a worker is still registered");
                        continue;
                    }
                    unzip_info!(
                        "StartExtraction archive={:?} destination={:?}",
                        request.archive_path,
                        request.destination_path
                    );
                    let request = TaskRequest::new(request.archive_path, request.destination_path);
                    match ExtractionHandle::spawn_with(request, &self.settings) {
                        Ok(handle) => self.current = Some(handle),
                        Err(err) => {
                            unzip_error!("Failed to spawn worker thread: {}", err);
                            feedback.push(Msg::WorkerStatus(StatusLine::error(format!(
                                "Error: {err}"
                            ))));
                            feedback.push(Msg::WorkerFinished);
                        }
                    }
                }
                Effect::CancelExtraction => match &self.current {
                    Some(handle) => {
                        unzip_info!("Cancellation requested");
                        handle.cancel();
                    }
                    None => unzip_warn!("CancelExtraction with no registered worker"),
                },
            }
        }
        feedback
    }

    /// One poll tick: queued status messages in arrival order, followed by
    /// `WorkerFinished` once the completion signal is seen.
    pub fn poll(&mut self) -> Vec<Msg> {
        let Some(handle) = &self.current else {
            return Vec::new();
        };

        // Read the signal before draining so no message sent ahead of it is left behind.
        let finished = handle.is_finished();
        let mut msgs: Vec<Msg> = handle.drain().into_iter().map(status_msg).collect();

        if finished {
            unzip_info!("Worker finished; releasing handle");
            self.current = None;
            msgs.push(Msg::WorkerFinished);
        }
        msgs
    }

    #[cfg(test)]
    fn is_busy(&self) -> bool {
        self.current.is_some()
    }
}

fn status_msg(message: StatusMessage) -> Msg {
    let line = if message.is_error {
        StatusLine::error(message.text)
    } else {
        StatusLine::info(message.text)
    };
    Msg::WorkerStatus(line)
}
