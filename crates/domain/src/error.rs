//! Request validation errors

use thiserror::Error;

/// Errors raised when a request description is internally inconsistent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// A body payload was given without a declared media type.
    #[error("body payload present but no content type declared")]
    MissingContentType,

    /// A media type was declared but the payload is empty.
    #[error("content type {media_type:?} declared but body payload is empty")]
    MissingPayload {
        /// The declared media type.
        media_type: String,
    },

    /// The declared media type does not parse as `type/subtype`.
    #[error("malformed media type: {given:?}")]
    MalformedMediaType {
        /// The string that failed to parse.
        given: String,
    },

    /// A multipart part has no name.
    #[error("multipart part {index} has no name")]
    UnnamedPart {
        /// Zero-based position of the offending part.
        index: usize,
    },

    /// The content-type header names a boundary different from the body's.
    #[error("boundary mismatch: header says {header:?}, body says {body:?}")]
    BoundaryMismatch {
        /// Boundary parameter found in the content-type header.
        header: String,
        /// Boundary literal carried by the multipart body.
        body: String,
    },

    /// A form body could not be URL-encoded.
    #[error("form body could not be encoded: {0}")]
    UnencodableForm(String),

    /// The HTTP method string is not a known verb.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

/// Result type alias for request validation.
pub type RequestResult<T> = Result<T, RequestError>;
