use crate::{AppState, Effect, Msg, StatusLine, TaskRequest, TaskState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ArchivePathChanged(text) => {
            if state.task() == TaskState::Idle {
                state.set_archive_path(text);
            }
            Vec::new()
        }
        Msg::DestinationPathChanged(text) => {
            if state.task() == TaskState::Idle {
                state.set_destination_path(text);
            }
            Vec::new()
        }
        Msg::ArchiveSelected(path) => {
            if !path.is_empty() && state.task() == TaskState::Idle {
                state.set_archive_path(path);
                state.set_status(StatusLine::info("Zip detected!"));
            }
            Vec::new()
        }
        Msg::DestinationSelected(path) => {
            if !path.is_empty() && state.task() == TaskState::Idle {
                state.set_destination_path(path);
                state.set_status(StatusLine::info("Output folder detected!"));
            }
            Vec::new()
        }
        Msg::StartClicked => start(&mut state),
        Msg::StopClicked => match state.task() {
            TaskState::Running => {
                // Advisory only: the worker looks at the flag once, right before extracting.
                state.set_status(StatusLine::info("Stopping unzip..."));
                vec![Effect::CancelExtraction]
            }
            TaskState::Idle => {
                state.set_status(StatusLine::info("No active unzip operation to stop."));
                Vec::new()
            }
        },
        Msg::WorkerStatus(status) => {
            state.set_status(status);
            Vec::new()
        }
        Msg::WorkerFinished => {
            if state.task() == TaskState::Running {
                state.finish_task();
            }
            Vec::new()
        }
        Msg::SelectionRejected(reason) => {
            state.set_status(StatusLine::error(reason));
            Vec::new()
        }
    };

    (state, effects)
}

fn start(state: &mut AppState) -> Vec<Effect> {
    let (archive_path, destination_path) = state.trimmed_paths();

    if archive_path.is_empty() {
        state.set_status(StatusLine::error("Error: Please select a zip file."));
        return Vec::new();
    }
    if destination_path.is_empty() {
        state.set_status(StatusLine::error("Error: Please select an output folder."));
        return Vec::new();
    }
    if state.task() == TaskState::Running {
        state.set_status(StatusLine::info("Unzip operation already in progress!"));
        return Vec::new();
    }

    state.begin_task();
    vec![Effect::StartExtraction(TaskRequest {
        archive_path,
        destination_path,
    })]
}
