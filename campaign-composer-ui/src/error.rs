//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// UI composition layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum UiError {
    /// A submitted value failed a field constraint
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A caller supplied an argument outside the documented contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The routing collaborator could not produce a URL
    #[error("URL generation failed for route '{route}': {message}")]
    UrlGeneration { route: String, message: String },
}

impl UiError {
    /// Whether it is expected behavior (user input, known precondition) — used
    /// for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_) | Self::InvalidArgument(_) => true,
            Self::UrlGeneration { .. } => false,
        }
    }
}

/// UI layer Result type alias
pub type UiResult<T> = std::result::Result<T, UiError>;
