//! Custom error types for logo extraction

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::extractor::Region;

/// Errors raised while extracting a logo and favicon
#[derive(Debug)]
pub enum ExtractError {
    /// The source image does not exist
    SourceNotFound(PathBuf),
    /// The source image could not be opened or decoded
    DecodeFailed {
        path: PathBuf,
        message: String,
    },
    /// The crop region does not fit inside the decoded image
    InvalidCropBounds {
        region: Region,
        width: u32,
        height: u32,
    },
    /// An output image could not be encoded
    EncodeFailed {
        path: PathBuf,
        message: String,
    },
    /// An output file could not be staged or moved into place
    WriteFailed {
        path: PathBuf,
        source: io::Error,
    },
    /// Invalid configuration value or file
    ConfigError(String),
    /// I/O error
    IoError(io::Error),
}

impl ExtractError {
    /// Whether this error happened after the source was found
    ///
    /// Everything except `SourceNotFound` counts as a processing error.
    pub fn is_processing_error(&self) -> bool {
        !matches!(self, ExtractError::SourceNotFound(_))
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::SourceNotFound(path) => write!(f, "Source file not found: {}", path.display()),
            ExtractError::DecodeFailed { path, message } => {
                write!(f, "Failed to decode {}: {}", path.display(), message)
            },
            ExtractError::InvalidCropBounds { region, width, height } => write!(
                f,
                "Crop region ({}, {}, {}, {}) does not fit inside a {}x{} image",
                region.left(), region.top(), region.right(), region.bottom(), width, height
            ),
            ExtractError::EncodeFailed { path, message } => {
                write!(f, "Failed to encode {}: {}", path.display(), message)
            },
            ExtractError::WriteFailed { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            },
            ExtractError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ExtractError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::WriteFailed { source, .. } => Some(source),
            ExtractError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ExtractError {
    fn from(error: io::Error) -> Self {
        ExtractError::IoError(error)
    }
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;
