use std::path::PathBuf;

use thiserror::Error;

use crate::models::Centiseconds;

/// Fatal errors raised while preparing a data directory. None are recovered.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: malformed sub-utterance id '{id}': {reason}")]
    MalformedId {
        line: usize,
        id: String,
        reason: String,
    },

    #[error("line {line}: sub-utterance '{id}' has start {start} >= end {end}")]
    InvalidInterval {
        line: usize,
        id: String,
        start: Centiseconds,
        end: Centiseconds,
    },

    #[error(
        "line {line}: recording '{recording}' appears again after another recording; \
         input must be grouped by recording (use --sort)"
    )]
    RecordingNotContiguous { line: usize, recording: String },

    #[error(
        "line {line}: sub-utterance '{id}' starts at {start}, before the previous start {previous}; \
         input must be sorted by start time (use --sort)"
    )]
    StartOutOfOrder {
        line: usize,
        id: String,
        start: Centiseconds,
        previous: Centiseconds,
    },
}

impl PrepError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PrepError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type PrepResult<T> = std::result::Result<T, PrepError>;
