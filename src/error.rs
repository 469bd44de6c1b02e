//! Indigo Error Types
//!
//! Audio faults are recoverable and only ever logged; content faults are
//! configuration errors caught at startup.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while trying to play an audio cue
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Audio resource not found: {0:?}")]
    ResourceNotFound(PathBuf),

    #[error("Audio playback failed: {0}")]
    PlaybackFailure(String),

    #[error("Audio thread disconnected")]
    Disconnected,
}

/// Central error type for Indigo
#[derive(Error, Debug)]
pub enum IndigoError {
    #[error(transparent)]
    Audio(#[from] AudioError),

    #[error("Unknown language: {0}")]
    InvalidLanguage(String),

    #[error("Content table '{0}' is misconfigured: {1}")]
    EmptyContentSet(String, String),

}

/// Result type alias for Indigo operations
pub type IndigoResult<T> = Result<T, IndigoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_error_converts() {
        let err: IndigoError = AudioError::Disconnected.into();
        assert!(matches!(err, IndigoError::Audio(AudioError::Disconnected)));
        assert_eq!(err.to_string(), "Audio thread disconnected");
    }

    #[test]
    fn test_empty_content_message() {
        let err = IndigoError::EmptyContentSet("colors".into(), "row 'Twi' is empty".into());
        assert!(err.to_string().contains("row 'Twi' is empty"));
    }
}
