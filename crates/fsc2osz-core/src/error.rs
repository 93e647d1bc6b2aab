use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file {} does not exist", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to decode chart with all attempted encodings: {}", format_attempts(.attempts))]
    DecodeFailed { attempts: Vec<DecodeAttempt> },

    #[error("Invalid timing point #{index}: bpm must be positive, got {bpm}")]
    InvalidTimingPoint { index: usize, bpm: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// One failed attempt at reading the chart under a candidate encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeAttempt {
    pub encoding: &'static str,
    pub message: String,
}

fn format_attempts(attempts: &[DecodeAttempt]) -> String {
    attempts
        .iter()
        .map(|a| format!("{} ({})", a.encoding, a.message))
        .collect::<Vec<_>>()
        .join("; ")
}
