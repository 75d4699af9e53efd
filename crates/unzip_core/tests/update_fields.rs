use unzip_core::{update, AppState, Msg, Severity, StatusLine, TaskState};

fn running_state() -> AppState {
    let (state, _) = update(AppState::new(), Msg::ArchiveSelected("a.zip".to_string()));
    let (state, _) = update(state, Msg::DestinationSelected("out".to_string()));
    let (state, _) = update(state, Msg::StartClicked);
    assert_eq!(state.task(), TaskState::Running);
    state
}

#[test]
fn initial_view_is_ready_and_enabled() {
    let mut state = AppState::new();
    let view = state.view();
    assert_eq!(view.task, TaskState::Idle);
    assert!(view.inputs_enabled);
    assert_eq!(view.status, StatusLine::info("Ready"));
    assert!(!state.consume_dirty());
}

#[test]
fn rejected_selection_reports_error_and_keeps_field() {
    let (state, _) = update(AppState::new(), Msg::ArchivePathChanged("keep.zip".into()));

    let (state, effects) = update(
        state,
        Msg::SelectionRejected("Error: Selected path is not valid UTF-8".into()),
    );

    let view = state.view();
    assert!(effects.is_empty());
    assert_eq!(view.archive_path, "keep.zip");
    assert_eq!(
        view.status,
        StatusLine::error("Error: Selected path is not valid UTF-8")
    );
}

#[test]
fn archive_selection_overwrites_field_and_reports() {
    let (state, _) = update(AppState::new(), Msg::ArchivePathChanged("old.zip".into()));
    let (mut state, effects) = update(state, Msg::ArchiveSelected("/tmp/new.zip".into()));

    let view = state.view();
    assert!(effects.is_empty());
    assert_eq!(view.archive_path, "/tmp/new.zip");
    assert_eq!(view.status, StatusLine::info("Zip detected!"));
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn destination_selection_overwrites_field_and_reports() {
    let (state, _) = update(AppState::new(), Msg::DestinationSelected("/tmp/out".into()));

    let view = state.view();
    assert_eq!(view.destination_path, "/tmp/out");
    assert_eq!(view.status.text, "Output folder detected!");
    assert_eq!(view.status.severity, Severity::Info);
}

#[test]
fn dismissed_dialog_changes_nothing() {
    let (state, _) = update(AppState::new(), Msg::ArchivePathChanged("keep.zip".into()));
    let (mut state, _) = update(state, Msg::DestinationPathChanged("keep".into()));
    assert!(state.consume_dirty());

    let (state, _) = update(state, Msg::ArchiveSelected(String::new()));
    let (mut state, _) = update(state, Msg::DestinationSelected(String::new()));

    let view = state.view();
    assert_eq!(view.archive_path, "keep.zip");
    assert_eq!(view.destination_path, "keep");
    assert_eq!(view.status, StatusLine::default());
    assert!(!state.consume_dirty());
}

#[test]
fn fields_are_locked_while_running() {
    let state = running_state();
    assert!(!state.view().inputs_enabled);

    let (state, _) = update(state, Msg::ArchivePathChanged("other.zip".into()));
    let (state, _) = update(state, Msg::DestinationSelected("elsewhere".into()));

    let view = state.view();
    assert_eq!(view.archive_path, "a.zip");
    assert_eq!(view.destination_path, "out");
}

#[test]
fn worker_status_overwrites_display() {
    let state = running_state();
    let (state, _) = update(
        state,
        Msg::WorkerStatus(StatusLine::info("Unzipping in progress...")),
    );
    let (state, _) = update(
        state,
        Msg::WorkerStatus(StatusLine::error("Error: Bad ZIP file!")),
    );

    let view = state.view();
    assert_eq!(view.status.text, "Error: Bad ZIP file!");
    assert!(view.status.is_error());
}
