/// Paths for one extraction attempt, exactly as the user supplied them.
///
/// The worker validates both fields itself, so empty strings are representable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    pub archive_path: String,
    pub destination_path: String,
}

impl TaskRequest {
    pub fn new(archive_path: impl Into<String>, destination_path: impl Into<String>) -> Self {
        Self {
            archive_path: archive_path.into(),
            destination_path: destination_path.into(),
        }
    }
}

/// One line of worker output destined for the status display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Number of entries in the central directory, directories included.
    pub entries: usize,
    pub destination_created: bool,
}
