use crate::view_model::AppViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskState {
    #[default]
    Idle,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Error,
}

/// Text shown in the status line, coloured by severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub severity: Severity,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::info("Ready")
    }
}

/// Paths handed to one extraction worker. Fields are already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    pub archive_path: String,
    pub destination_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    archive_path: String,
    destination_path: String,
    task: TaskState,
    status: StatusLine,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            archive_path: self.archive_path.clone(),
            destination_path: self.destination_path.clone(),
            task: self.task,
            inputs_enabled: self.task == TaskState::Idle,
            status: self.status.clone(),
        }
    }

    pub fn task(&self) -> TaskState {
        self.task
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_archive_path(&mut self, path: String) {
        if self.archive_path != path {
            self.archive_path = path;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_destination_path(&mut self, path: String) {
        if self.destination_path != path {
            self.destination_path = path;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_status(&mut self, status: StatusLine) {
        self.status = status;
        self.mark_dirty();
    }

    /// Trimmed copy of both fields, as they would be handed to a worker.
    pub(crate) fn trimmed_paths(&self) -> (String, String) {
        (
            self.archive_path.trim().to_string(),
            self.destination_path.trim().to_string(),
        )
    }

    pub(crate) fn begin_task(&mut self) {
        self.task = TaskState::Running;
        self.mark_dirty();
    }

    pub(crate) fn finish_task(&mut self) {
        self.task = TaskState::Idle;
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
