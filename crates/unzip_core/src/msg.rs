#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User typed into the archive path field.
    ArchivePathChanged(String),
    /// User typed into the destination path field.
    DestinationPathChanged(String),
    /// File dialog returned a selection (empty when dismissed).
    ArchiveSelected(String),
    /// Folder dialog returned a selection (empty when dismissed).
    DestinationSelected(String),
    /// User clicked the start button.
    StartClicked,
    /// User clicked the stop button.
    StopClicked,
    /// Status message drained from the worker queue.
    WorkerStatus(crate::StatusLine),
    /// Poll loop observed the worker's completion signal.
    WorkerFinished,
    /// A dialog selection could not be used as a path string.
    SelectionRejected(String),
}
