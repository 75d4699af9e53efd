#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use unzip_engine::{StatusMessage, StatusSink};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Writes a stored (uncompressed) archive containing the given files.
pub fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, data) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap();
}

pub fn write_garbage(path: &Path) -> PathBuf {
    fs::write(path, b"this is definitely not a zip archive").unwrap();
    path.to_path_buf()
}

#[derive(Default, Clone)]
pub struct RecordingSink {
    messages: Arc<Mutex<Vec<StatusMessage>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<StatusMessage> {
        self.messages.lock().unwrap().drain(..).collect()
    }
}

impl StatusSink for RecordingSink {
    fn emit(&self, message: StatusMessage) {
        self.messages.lock().unwrap().push(message);
    }
}

pub fn texts(messages: &[StatusMessage]) -> Vec<&str> {
    messages.iter().map(|m| m.text.as_str()).collect()
}

pub fn is_elapsed_line(message: &StatusMessage) -> bool {
    !message.is_error
        && message
            .text
            .strip_prefix("Time taken: ")
            .and_then(|rest| rest.strip_suffix(" seconds"))
            .is_some_and(|secs| secs.parse::<f64>().is_ok())
}
