//! Request body types

use serde::{Deserialize, Serialize};

/// One named section of a multipart/form-data body.
///
/// Only text payloads are supported; fixtures for binary parts do not
/// exist, so `value` is a `String`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Field name carried in the `Content-Disposition` line.
    pub name: String,
    /// Literal text payload of the part.
    pub value: String,
    /// Optional file name for file-upload parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Optional per-part content type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl Part {
    /// Creates a plain text part.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            filename: None,
            content_type: None,
        }
    }

    /// Attaches a file name.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Attaches a per-part content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// The payload of a request, tagged by encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Body {
    /// No payload.
    #[default]
    None,
    /// Raw text with a declared media type.
    Raw {
        /// The declared media type (e.g. "application/json").
        media_type: String,
        /// The literal payload text.
        text: String,
    },
    /// URL-encoded form pairs, order-preserving.
    UrlEncoded {
        /// Form fields as (name, value) pairs.
        params: Vec<(String, String)>,
    },
    /// Multipart form data with an explicit boundary literal.
    Multipart {
        /// The boundary literal, without the leading `--` of delimiters.
        boundary: String,
        /// The parts, in input order.
        parts: Vec<Part>,
    },
}

impl Body {
    /// Creates a JSON body.
    #[must_use]
    pub fn json(text: impl Into<String>) -> Self {
        Self::Raw {
            media_type: "application/json".to_string(),
            text: text.into(),
        }
    }

    /// Creates a plain text body.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Raw {
            media_type: "text/plain".to_string(),
            text: text.into(),
        }
    }

    /// Whether there is no payload at all.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The effective content type of the payload, boundary parameter
    /// included for multipart bodies.
    #[must_use]
    pub fn content_type(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::Raw { media_type, .. } => Some(media_type.clone()),
            Self::UrlEncoded { .. } => Some("application/x-www-form-urlencoded".to_string()),
            Self::Multipart { boundary, .. } => {
                Some(format!("multipart/form-data; boundary={boundary}"))
            }
        }
    }
}
