use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Tag library error: {0}")]
    TagLibrary(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<lofty::error::LoftyError> for MetadataError {
    fn from(err: lofty::error::LoftyError) -> Self {
        MetadataError::TagLibrary(err.to_string())
    }
}

impl From<id3::Error> for MetadataError {
    fn from(err: id3::Error) -> Self {
        MetadataError::TagLibrary(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MetadataError>;
