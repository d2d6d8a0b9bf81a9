//! Error types for snapshelf

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a collection file failed to decode
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("file is shorter than the container header")]
    Truncated,

    #[error("missing container magic")]
    BadMagic,

    #[error("unsupported container version {0}")]
    UnsupportedVersion(u32),

    #[error("checksum mismatch (expected {expected:#010x}, found {actual:#010x})")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("malformed record data: {0}")]
    Body(#[source] bincode::Error),
}

/// Underlying cause of a failed persist
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("encoding failed: {0}")]
    Encode(#[from] bincode::Error),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Main error type for snapshelf
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Collection file does not exist: {0}")]
    FileDoesNotExist(PathBuf),

    #[error("No data could be read from {0}")]
    NoData(PathBuf),

    #[error("Failed to decode collection: {0}")]
    Decoding(#[from] DecodeError),

    #[error("Failed to save collection: {0}")]
    Saving(#[source] WriteError),

    #[error("Failed to save collection after delete: {0}")]
    Deleting(#[source] WriteError),

    #[error("Failed to save reordered collection: {0}")]
    Reordering(#[source] WriteError),

    #[error("Index {index} is out of range for a collection of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Not a snapshelf directory: {0}")]
    NotShelfDirectory(PathBuf),

    #[error("Image not found: {0}")]
    ImageNotFound(String),

    #[error("Not a supported image: {0}")]
    UnsupportedImage(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ShelfError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ShelfError::NotShelfDirectory(_) => 2,
            ShelfError::IndexOutOfRange { .. } | ShelfError::ImageNotFound(_) => 3,
            ShelfError::Decoding(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ShelfError::NotShelfDirectory(path) => {
                format!(
                    "Not a snapshelf directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'snapshelf init' in this directory to create a new shelf\n\
                    • Navigate to an existing shelf directory\n\
                    • Set SNAPSHELF_ROOT environment variable to your shelf path",
                    path.display()
                )
            }
            ShelfError::IndexOutOfRange { index, len } => {
                if *len == 0 {
                    format!("No image at index {}: the shelf is empty", index)
                } else {
                    format!(
                        "No image at index {}\n\n\
                        Valid indexes are 0 to {}.\n\
                        Use 'snapshelf list' to see the current order",
                        index,
                        len - 1
                    )
                }
            }
            ShelfError::ImageNotFound(id) => {
                format!(
                    "No image with id '{}'\n\n\
                    Use 'snapshelf list' to see stored ids",
                    id
                )
            }
            ShelfError::UnsupportedImage(path) => {
                format!(
                    "Not a supported image: {}\n\n\
                    Supported formats: png, jpeg, gif, webp, bmp, tiff, heic",
                    path.display()
                )
            }
            ShelfError::Decoding(_) => {
                format!(
                    "{}\n\n\
                    The collection file is damaged. Restore it from a backup,\n\
                    or point 'collection' at a new file: snapshelf config collection fresh.shelf",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;
