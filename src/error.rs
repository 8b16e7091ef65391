//! Error types for catalog retrieval and configuration.

use derive_more::{Display, Error};
use tracing::{error, instrument};

/// Which of the two catalog retrievals failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FetchStage {
    /// Primary attributes (`/pokemon/{id}`).
    #[display("primary attributes")]
    Pokemon,
    /// Taxonomic attributes (`/pokemon-species/{id}`).
    #[display("species attributes")]
    Species,
}

impl FetchStage {
    /// Catalog path segment for this retrieval.
    pub fn path(self) -> &'static str {
        match self {
            FetchStage::Pokemon => "pokemon",
            FetchStage::Species => "pokemon-species",
        }
    }
}

/// What went wrong during a retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FetchErrorKind {
    /// The service answered with a non-success status.
    #[display("HTTP status {_0}")]
    Status(u16),
    /// The request expired before a response arrived.
    #[display("request timed out")]
    Timeout,
    /// Connection-level failure.
    #[display("transport failure: {_0}")]
    Transport(String),
    /// The body was not the JSON document we expected.
    #[display("malformed response: {_0}")]
    Decode(String),
}

/// Failure to retrieve a subject from the catalog.
#[derive(Debug, Clone, Display, Error)]
#[display("Fetch error ({}): {} at {}:{}", stage, kind, file, line)]
pub struct FetchError {
    /// Retrieval that failed.
    pub stage: FetchStage,
    /// Failure category.
    pub kind: FetchErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl FetchError {
    /// Creates a new fetch error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(stage: FetchStage, kind: FetchErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        error!(%stage, %kind, "Fetch error created");
        Self {
            stage,
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Classifies a reqwest failure for the given stage.
    #[track_caller]
    pub fn from_reqwest(stage: FetchStage, err: &reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            FetchErrorKind::Timeout
        } else if err.is_decode() {
            FetchErrorKind::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchErrorKind::Status(status.as_u16())
        } else {
            FetchErrorKind::Transport(err.to_string())
        };
        Self::new(stage, kind)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
