//! Error types shared across reelscout.
//!
//! Two families live here. [`LookupError`] classifies why a single network
//! lookup produced no value; the pipeline always folds it into an absent
//! field. [`Error`] covers the boundary failures (bad input file, bad config,
//! failed export) that abort a whole run.

/// Why a provider or page lookup produced no value.
///
/// "No acceptable match" is not an error and is represented as `Ok(None)`
/// by the callers that return this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The request never produced a response (DNS, connect, timeout, body read).
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-success status code.
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// The body did not have the expected shape (bad JSON, missing field).
    #[error("Unexpected response shape: {0}")]
    UnexpectedResponse(String),
}

impl LookupError {
    /// Create a new Transport error.
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new UnexpectedResponse error.
    pub fn unexpected<S: Into<String>>(msg: S) -> Self {
        Self::UnexpectedResponse(msg.into())
    }

    /// Whether a repeat of the same request could plausibly succeed.
    ///
    /// Transport failures, rate limiting (429) and server errors (5xx) are
    /// retryable; every other status and any shape mismatch is not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status(code) => *code == 429 || (500..600).contains(code),
            Self::UnexpectedResponse(_) => false,
        }
    }
}

/// Boundary error type for reelscout.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input table could not be used.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The configuration is unusable.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Writing an export file failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new Config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new Export error.
    pub fn export<S: Into<String>>(msg: S) -> Self {
        Self::Export(msg.into())
    }
}

/// Result type alias using the boundary Error type.
pub type Result<T> = std::result::Result<T, Error>;
