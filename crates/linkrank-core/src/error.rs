//! Error types for linkrank

use thiserror::Error;

/// Result type alias using LinkRankError
pub type Result<T> = std::result::Result<T, LinkRankError>;

/// Error type alias for convenience
pub type Error = LinkRankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

/// Main error type for linkrank
#[derive(Debug, Error)]
pub enum LinkRankError {
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl LinkRankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound => exit_codes::NOT_FOUND,
            Self::InvalidGraph(_) | Self::InvalidParameter(_) | Self::Config(_) => {
                exit_codes::INVALID_INPUT
            }
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
