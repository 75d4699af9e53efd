//! Unzip engine: the background extraction worker and its reporting plumbing.
mod destination;
mod engine;
mod error;
mod extract;
mod signal;
mod types;

pub use destination::{ensure_destination_dir, DirStatus};
pub use engine::{ExtractionHandle, WorkerSettings};
pub use error::{DestinationError, ExtractError};
pub use extract::{run_extraction, run_task, ChannelStatusSink, StatusSink};
pub use signal::{CancelToken, CompletionSignal};
pub use types::{ExtractionReport, StatusMessage, TaskRequest};
