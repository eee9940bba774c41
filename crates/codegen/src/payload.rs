//! Body payload assembly.
//!
//! Renderers treat every body as one opaque string: raw text verbatim,
//! form pairs URL-encoded, multipart bodies serialized to their literal
//! wire form. Escaping for the target language happens afterwards.

use quiver_domain::{Body, Part, Request, RequestError};

use crate::error::RenderResult;

/// Encodes form pairs as `application/x-www-form-urlencoded`, preserving
/// pair order.
///
/// # Errors
///
/// Returns an invalid-request error if a pair cannot be serialized.
pub fn urlencode(params: &[(String, String)]) -> RenderResult<String> {
    let encoded = serde_urlencoded::to_string(params)
        .map_err(|err| RequestError::UnencodableForm(err.to_string()))?;
    Ok(encoded)
}

/// Serializes multipart parts to the literal wire payload: `--boundary`
/// delimiters, per-part `Content-Disposition`/`Content-Type` lines, CRLF
/// line endings, and a closing `--boundary--` delimiter.
#[must_use]
pub fn multipart(boundary: &str, parts: &[Part]) -> String {
    let mut wire = String::new();
    for part in parts {
        wire.push_str("--");
        wire.push_str(boundary);
        wire.push_str("\r\n");
        wire.push_str(&format!(
            "Content-Disposition: form-data; name=\"{}\"",
            part.name
        ));
        if let Some(filename) = &part.filename {
            wire.push_str(&format!("; filename=\"{filename}\""));
        }
        wire.push_str("\r\n");
        if let Some(content_type) = &part.content_type {
            wire.push_str(&format!("Content-Type: {content_type}\r\n"));
        }
        wire.push_str("\r\n");
        wire.push_str(&part.value);
        wire.push_str("\r\n");
    }
    wire.push_str("--");
    wire.push_str(boundary);
    wire.push_str("--\r\n");
    wire
}

/// The opaque payload string for a request body, before any escaping.
/// `None` when there is no body.
///
/// # Errors
///
/// Returns an error if a form body cannot be URL-encoded.
pub fn body_literal(request: &Request) -> RenderResult<Option<String>> {
    match &request.body {
        Body::None => Ok(None),
        Body::Raw { text, .. } => Ok(Some(text.clone())),
        Body::UrlEncoded { params } => Ok(Some(urlencode(params)?)),
        Body::Multipart { boundary, parts } => Ok(Some(multipart(boundary, parts))),
    }
}
