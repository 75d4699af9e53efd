use crate::{StatusLine, TaskState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub archive_path: String,
    pub destination_path: String,
    pub task: TaskState,
    /// Path fields, browse buttons and the start button share this flag.
    pub inputs_enabled: bool,
    pub status: StatusLine,
}
