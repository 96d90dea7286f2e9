use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Book with ISBN {0} already exists.")]
    DuplicateIsbn(String),

    #[error("Book not found: ISBN {0}")]
    NotFound(String),

    #[error("Book is already issued: ISBN {0}")]
    AlreadyIssued(String),

    #[error("'{}' not found", .0.display())]
    FileMissing(PathBuf),

    #[error("'{}' is corrupted: {source}", path.display())]
    FileCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write '{}': {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
