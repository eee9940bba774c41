//! Rendering errors

use quiver_domain::RequestError;
use thiserror::Error;

/// Terminal failures of a render call. Rendering is side-effect free, so a
/// caller may correct the input and simply call again.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The target id names an unknown language/library pair.
    #[error("unsupported target: {target:?}")]
    UnsupportedTarget {
        /// The id string that failed to resolve.
        target: String,
    },

    /// The request description is internally inconsistent.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),
}

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
