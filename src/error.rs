use std::io;

use symphonia::core::errors::Error as SymphoniaError;
use thiserror::Error;

/// Errors that can occur while loading an audio file into a [`SoundBuffer`].
///
/// The command-line report collapses every variant into a single failure
/// line; the variant itself only reaches the log.
///
/// [`SoundBuffer`]: crate::SoundBuffer
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// No container or codec matched the input.
    #[error("unsupported format: {0}")]
    Unsupported(String),
    /// The container holds no track with a decodable codec.
    #[error("no decodable audio track found")]
    NoTrack,
    /// Channel count or sample rate could not be determined.
    #[error("missing stream parameter: {0}")]
    MissingParameter(&'static str),
    /// The decoding library rejected the stream.
    #[error("decode error: {0}")]
    Decode(String),
    /// Raw samples do not describe a valid interleaved buffer.
    #[error("invalid sample layout: {0}")]
    InvalidLayout(String),
}

impl From<SymphoniaError> for LoadError {
    fn from(e: SymphoniaError) -> Self {
        match e {
            SymphoniaError::IoError(e) => LoadError::Io(e),
            SymphoniaError::Unsupported(what) => LoadError::Unsupported(what.to_string()),
            other => LoadError::Decode(other.to_string()),
        }
    }
}
