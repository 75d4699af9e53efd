mod common;

use std::time::Duration;

use common::{is_elapsed_line, write_zip};
use tempfile::TempDir;
use unzip_engine::{ExtractionHandle, StatusMessage, TaskRequest, WorkerSettings};

const WAIT: Duration = Duration::from_secs(10);

#[test]
fn spawned_worker_reports_then_signals_completion() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("a.zip");
    write_zip(&archive, &[("a.txt", b"alpha"), ("b/c.txt", b"gamma")]);
    let out = temp.path().join("out");

    let handle = ExtractionHandle::spawn(TaskRequest::new(
        archive.to_string_lossy(),
        out.to_string_lossy(),
    ))
    .unwrap();
    assert!(handle.wait_for_completion(WAIT));

    let messages = handle.drain();
    let terminal: Vec<&StatusMessage> = messages
        .iter()
        .filter(|m| m.is_error || m.text == "Unzipped successfully!")
        .collect();
    assert_eq!(terminal.len(), 1);
    assert_eq!(terminal[0].text, "Unzipped successfully!");
    assert_eq!(messages.iter().filter(|m| is_elapsed_line(m)).count(), 1);
    assert!(is_elapsed_line(messages.last().unwrap()));
    assert!(out.join("b").join("c.txt").is_file());
    assert!(handle.try_recv().is_none());
}

#[test]
fn missing_archive_completes_with_single_error() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out");

    let handle = ExtractionHandle::spawn_with(
        TaskRequest::new(
            temp.path().join("missing.zip").to_string_lossy(),
            out.to_string_lossy(),
        ),
        &WorkerSettings {
            thread_name: "unzip-worker-test".to_string(),
        },
    )
    .unwrap();
    assert!(handle.wait_for_completion(WAIT));

    let messages = handle.drain();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], StatusMessage::error("Error: ZIP file not found!"));
    assert!(is_elapsed_line(&messages[1]));
    assert!(!out.exists());
}

#[test]
fn cancel_request_is_recorded_on_the_handle() {
    let temp = TempDir::new().unwrap();
    let handle = ExtractionHandle::spawn(TaskRequest::new(
        "",
        temp.path().join("out").to_string_lossy(),
    ))
    .unwrap();

    assert!(!handle.is_cancel_requested());
    handle.cancel();
    assert!(handle.is_cancel_requested());

    assert!(handle.wait_for_completion(WAIT));
    let first = handle.try_recv().unwrap();
    assert_eq!(first, StatusMessage::error("Error: No input file selected!"));
}

#[test]
fn worker_thread_exits_after_completion() {
    let temp = TempDir::new().unwrap();
    let handle = ExtractionHandle::spawn(TaskRequest::new(
        temp.path().join("missing.zip").to_string_lossy(),
        "",
    ))
    .unwrap();
    assert!(handle.wait_for_completion(WAIT));

    let deadline = std::time::Instant::now() + WAIT;
    while handle.is_alive() && std::time::Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(!handle.is_alive());
}
