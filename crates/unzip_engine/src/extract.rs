use std::fs::File;
use std::io::BufReader;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use unzip_logging::{unzip_debug, unzip_error, unzip_info, unzip_warn};
use zip::ZipArchive;

use crate::{
    ensure_destination_dir, CancelToken, CompletionSignal, DirStatus, ExtractError,
    ExtractionReport, StatusMessage, TaskRequest,
};

pub trait StatusSink: Send + Sync {
    fn emit(&self, message: StatusMessage);
}

/// Forwards status messages into the queue the shell drains on its tick.
pub struct ChannelStatusSink {
    tx: mpsc::Sender<StatusMessage>,
}

impl ChannelStatusSink {
    pub fn new(tx: mpsc::Sender<StatusMessage>) -> Self {
        Self { tx }
    }
}

impl StatusSink for ChannelStatusSink {
    fn emit(&self, message: StatusMessage) {
        // A dropped receiver means nobody is listening any more.
        let _ = self.tx.send(message);
    }
}

/// Validates the request, prepares the destination and extracts every entry.
///
/// Informational progress goes to `sink`; the terminal failure, if any, is
/// returned so the caller decides how to report it. `cancel` is checked exactly
/// once, after the archive has been opened and before anything is written.
pub fn run_extraction(
    request: &TaskRequest,
    sink: &dyn StatusSink,
    cancel: &CancelToken,
) -> Result<ExtractionReport, ExtractError> {
    if request.archive_path.is_empty() {
        return Err(ExtractError::MissingArchive);
    }
    let archive_path = Path::new(&request.archive_path);
    if !archive_path.is_file() {
        return Err(ExtractError::ArchiveNotFound);
    }
    if request.destination_path.is_empty() {
        return Err(ExtractError::MissingDestination);
    }
    let destination = Path::new(&request.destination_path);

    let destination_created = match ensure_destination_dir(destination)? {
        DirStatus::Created => {
            sink.emit(StatusMessage::info(format!(
                "Output directory {} created.",
                request.destination_path
            )));
            true
        }
        DirStatus::Existing => false,
    };

    sink.emit(StatusMessage::info("Unzipping in progress..."));

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;
    if cancel.is_cancelled() {
        return Err(ExtractError::Cancelled);
    }

    let entries = archive.len();
    unzip_debug!(
        "Extracting {} entries from {:?} into {:?}",
        entries,
        archive_path,
        destination
    );
    // Existing files at the destination are overwritten.
    archive.extract(destination)?;
    sink.emit(StatusMessage::info("Unzipped successfully!"));

    Ok(ExtractionReport {
        entries,
        destination_created,
    })
}

/// Full worker body: one extraction attempt, its outcome, the elapsed time,
/// then the completion signal. Never panics into the caller.
pub fn run_task(
    request: &TaskRequest,
    sink: &dyn StatusSink,
    cancel: &CancelToken,
    finished: &CompletionSignal,
) {
    let started = Instant::now();
    unzip_info!(
        "Task started archive={:?} destination={:?}",
        request.archive_path,
        request.destination_path
    );

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        run_extraction(request, sink, cancel)
    }))
    .unwrap_or_else(|_| {
        Err(ExtractError::Unexpected(
            "extraction worker panicked".to_string(),
        ))
    });

    match outcome {
        Ok(report) => {
            unzip_info!(
                "Task succeeded entries={} destination_created={}",
                report.entries,
                report.destination_created
            );
        }
        Err(err) => {
            match &err {
                ExtractError::MalformedArchive(detail) => {
                    unzip_warn!("Malformed archive {:?}: {}", request.archive_path, detail);
                }
                ExtractError::Cancelled => unzip_info!("Task cancelled before extraction"),
                ExtractError::Unexpected(detail) => unzip_error!("Task failed: {}", detail),
                other => unzip_warn!("Task rejected: {}", other),
            }
            sink.emit(StatusMessage::error(err.to_string()));
        }
    }

    let elapsed = started.elapsed().as_secs_f64();
    sink.emit(StatusMessage::info(format!("Time taken: {elapsed:.3} seconds")));
    finished.set();
}
