use std::io;
use std::path::PathBuf;

use thiserror::Error;
use zip::result::ZipError;

/// Failure preparing the destination directory.
#[derive(Debug, Error)]
pub enum DestinationError {
    #[error("Output path {} exists and is not a directory", path.display())]
    NotADirectory { path: PathBuf },
    #[error("Could not create output directory {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Every way an extraction attempt can end early.
///
/// `Display` renders the exact text shown in the status line.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Error: No input file selected!")]
    MissingArchive,
    #[error("Error: ZIP file not found!")]
    ArchiveNotFound,
    #[error("No output directory selected!")]
    MissingDestination,
    #[error("Error: {0}")]
    Destination(#[from] DestinationError),
    /// Carries the library's diagnostic for the log; the user only sees the summary.
    #[error("Error: Bad ZIP file!")]
    MalformedArchive(String),
    #[error("Unzip operation cancelled.")]
    Cancelled,
    #[error("Error: {0}")]
    Unexpected(String),
}

impl From<io::Error> for ExtractError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ExtractError::ArchiveNotFound,
            _ => ExtractError::Unexpected(err.to_string()),
        }
    }
}

impl From<ZipError> for ExtractError {
    fn from(err: ZipError) -> Self {
        match err {
            // Entry data is read through io::Read, so CRC mismatches and
            // truncated entries surface as I/O errors.
            ZipError::Io(io_err) => match io_err.kind() {
                io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => {
                    ExtractError::MalformedArchive(io_err.to_string())
                }
                _ => io_err.into(),
            },
            ZipError::InvalidArchive(_) | ZipError::UnsupportedArchive(_) => {
                ExtractError::MalformedArchive(err.to_string())
            }
            other => ExtractError::Unexpected(other.to_string()),
        }
    }
}
