use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use unzip_logging::unzip_info;

use crate::extract::{run_task, ChannelStatusSink};
use crate::{CancelToken, CompletionSignal, StatusMessage, TaskRequest};

#[derive(Debug, Clone)]
pub struct WorkerSettings {
    pub thread_name: String,
}

impl Default for WorkerSettings {
    fn default() -> Self {
        Self {
            thread_name: "unzip-worker".to_string(),
        }
    }
}

/// Shell-side handle to one running extraction worker.
///
/// The worker thread is detached: dropping the handle does not join it, and
/// process exit does not wait for it.
pub struct ExtractionHandle {
    messages: mpsc::Receiver<StatusMessage>,
    cancel: CancelToken,
    finished: CompletionSignal,
    thread: thread::JoinHandle<()>,
}

impl ExtractionHandle {
    pub fn spawn(request: TaskRequest) -> io::Result<Self> {
        Self::spawn_with(request, &WorkerSettings::default())
    }

    pub fn spawn_with(request: TaskRequest, settings: &WorkerSettings) -> io::Result<Self> {
        let (tx, messages) = mpsc::channel();
        let cancel = CancelToken::new();
        let finished = CompletionSignal::new();

        let worker_cancel = cancel.clone();
        let worker_finished = finished.clone();
        let thread = thread::Builder::new()
            .name(settings.thread_name.clone())
            .spawn(move || {
                let sink = ChannelStatusSink::new(tx);
                run_task(&request, &sink, &worker_cancel, &worker_finished);
            })?;

        unzip_info!("Spawned worker thread {:?}", settings.thread_name);
        Ok(Self {
            messages,
            cancel,
            finished,
            thread,
        })
    }

    /// Next queued status message, if any. Never blocks.
    pub fn try_recv(&self) -> Option<StatusMessage> {
        self.messages.try_recv().ok()
    }

    /// Everything queued so far, in the order the worker sent it.
    pub fn drain(&self) -> Vec<StatusMessage> {
        self.messages.try_iter().collect()
    }

    /// Ask the worker to stop at its pre-extraction checkpoint.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancel_requested(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// True once the worker has sent its elapsed-time message.
    pub fn is_finished(&self) -> bool {
        self.finished.is_set()
    }

    pub fn is_alive(&self) -> bool {
        !self.thread.is_finished()
    }

    /// Blocks until the completion signal is raised or `timeout` passes.
    ///
    /// The desktop shell polls instead; this is for headless callers and tests.
    pub fn wait_for_completion(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while !self.is_finished() {
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(Duration::from_millis(5));
        }
        true
    }
}
