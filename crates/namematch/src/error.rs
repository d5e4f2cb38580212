//! Error types for the namematch tool.

use namematch_core::MatchError;
use thiserror::Error;

/// Top-level error for loading configuration and running commands.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for a match config
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Matcher configuration rejected by the engine
    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Result type alias using the namematch Error.
pub type Result<T> = std::result::Result<T, Error>;
