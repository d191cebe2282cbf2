// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PortmanteauError>;

#[derive(Error, Debug)]
pub enum PortmanteauError {
    #[error("could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("frequency list {path} could not be read as CSV: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("sound configuration {path} is invalid: {source}")]
    SoundConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The dictionary uses an onset the configured groups do not know about.
    #[error("no primary sound group contains the cluster /{0}/")]
    MissingClusterGroup(String),
    #[error("cluster /{0}/ appears in more than one primary sound group")]
    DuplicateCluster(String),
    #[error("at least one primary sound group must be configured")]
    EmptySoundGroups,
    #[error("pronunciation /{0}/ contains no vowel")]
    NoVowelInPronunciation(String),
    #[error("could not render output: {0}")]
    Render(#[from] serde_json::Error),
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

impl PortmanteauError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PortmanteauError::Io { path: path.into(), source }
    }

    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        PortmanteauError::MalformedRecord { line, reason: reason.into() }
    }

    /// Errors the matcher logs before moving on to the next entry. Malformed
    /// input records never get this far; the loaders drop them.
    pub fn is_skippable(&self) -> bool {
        matches!(self, PortmanteauError::NoVowelInPronunciation(_))
    }
}
