//! Error types
//!
//! None of these reach the user. The preference and the shell log them and
//! keep going with in-memory state.

/// Failure talking to the key-value store or the presentation root
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected operation: {0}")]
    Rejected(String),
}

/// Failure reading or writing the persisted preference
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("malformed stored value: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Invalid toggle configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config field `{0}` must be a non-empty token")]
    InvalidField(&'static str),
}
