//! Error type for clipboard reads, writes and buffer decoding.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard store unavailable: {0}")]
    Store(String),
    #[error("Clipboard text does not start with the asset marker")]
    MissingMarker,
    #[error("Unknown clipboard type tag after marker: {0:?}")]
    UnknownTypeTag(String),
    #[error("Malformed transmission at byte {offset}: {reason}")]
    Malformed { offset: usize, reason: &'static str },
    #[error("Failed to (de)serialize item blob: {0}")]
    Blob(#[from] serde_json::Error),
}

pub type ClipboardResult<T> = Result<T, ClipboardError>;
