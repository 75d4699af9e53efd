use crate::TaskRequest;

/// Side effects requested by `update`, executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Spawn exactly one extraction worker for this request.
    StartExtraction(TaskRequest),
    /// Raise the cancellation flag of the running worker.
    CancelExtraction,
}
