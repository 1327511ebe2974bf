//! Error types for decoding word lists.

/// Input decoding errors.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Content was not a JSON array of strings.
    #[error("invalid JSON word list: {0}")]
    Json(#[from] serde_json::Error),

    /// Content was not a YAML sequence of strings.
    #[error("invalid YAML word list: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
