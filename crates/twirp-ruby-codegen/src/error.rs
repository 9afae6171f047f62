//! Generator errors.
//!
//! Every variant is fatal for the run: the plugin either produces a response
//! for all requested files or none at all.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    // ------------------------------------------------------------------
    // Input (request envelope / descriptor graph)
    // ------------------------------------------------------------------
    #[error("no files to generate")]
    NoFilesToGenerate,

    #[error("file to generate `{0}` is not part of the request")]
    UnknownFileToGenerate(String),

    #[error("invalid plugin parameter `{0}`")]
    InvalidParameter(String),

    #[error("malformed descriptor: {0}")]
    MalformedDescriptor(String),

    #[error("type `{0}` is defined more than once")]
    DuplicateType(String),

    #[error("failed to parse request JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------
    #[error("could not find message for `{type_name}`")]
    Lookup { type_name: String },
}

impl GenerateError {
    /// True for unresolvable type references (as opposed to a bad request).
    pub fn is_lookup(&self) -> bool {
        matches!(self, GenerateError::Lookup { .. })
    }
}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
