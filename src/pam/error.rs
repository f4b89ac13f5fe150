//! PAM error types

use std::io;
use thiserror::Error;

/// Result type for PAM operations
pub type PamResult<T> = Result<T, PamError>;

/// Errors that can occur while modulating, sampling or moving waveforms
#[derive(Error, Debug)]
pub enum PamError {
    /// Bad bit rate, sample rate, delay or parameter shape
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Mismatched lengths, non-finite values, non-binary bits
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// WAV container could not be read or written
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Plot dump could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PamError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }
}
