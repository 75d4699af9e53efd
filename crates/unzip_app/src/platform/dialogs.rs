use std::path::PathBuf;

use rfd::FileDialog;
use thiserror::Error;
use unzip_logging::{unzip_info, unzip_warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Error: Selected path is not valid UTF-8: {}", .0.display())]
    NonUtf8(PathBuf),
}

/// Native file picker filtered to ZIP archives. `Ok("")` when dismissed.
pub fn browse_for_archive() -> Result<String, SelectionError> {
    let picked = FileDialog::new()
        .set_title("Select a Zip File")
        .add_filter("Zip files", &["zip"])
        .add_filter("All files", &["*"])
        .pick_file();
    selection_to_string("archive", picked)
}

/// Native folder picker. `Ok("")` when dismissed.
pub fn browse_for_destination() -> Result<String, SelectionError> {
    let picked = FileDialog::new()
        .set_title("Select an Output Folder")
        .pick_folder();
    selection_to_string("destination", picked)
}

/// Path fields hold `String`s; a lossy conversion would point the worker at a
/// different file, so non-UTF-8 selections are refused.
fn selection_to_string(what: &str, picked: Option<PathBuf>) -> Result<String, SelectionError> {
    let Some(path) = picked else {
        return Ok(String::new());
    };
    match path.to_str() {
        Some(text) => {
            unzip_info!("Selected {} {:?}", what, path);
            Ok(text.to_owned())
        }
        None => {
            unzip_warn!("Rejected non-UTF-8 {} selection {:?}", what, path);
            Err(SelectionError::NonUtf8(path))
        }
    }
}
