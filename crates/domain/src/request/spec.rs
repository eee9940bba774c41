//! The request description consumed by renderers.

use serde::{Deserialize, Serialize};

use super::{Body, CookiePair, Headers, HttpMethod, QueryString, fold_cookies};
use crate::error::{RequestError, RequestResult};

/// An immutable HTTP request description.
///
/// Constructed once per conversion and handed to a renderer; nothing here
/// mutates after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method.
    pub method: HttpMethod,
    /// Target URL. May already contain a query string, which is emitted
    /// verbatim.
    pub url: String,
    /// Extra query parameters appended to the URL, order-preserving.
    #[serde(default)]
    pub query: QueryString,
    /// Headers in input order.
    #[serde(default)]
    pub headers: Headers,
    /// Cookies, folded into a single `cookie` header at render time.
    #[serde(default)]
    pub cookies: Vec<CookiePair>,
    /// Request payload.
    #[serde(default)]
    pub body: Body,
}

impl Request {
    /// Creates a request with the given method and URL and nothing else.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: QueryString::new(),
            headers: Headers::new(),
            cookies: Vec::new(),
            body: Body::None,
        }
    }

    /// Creates a GET request for the given URL.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Creates a POST request for the given URL.
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// The URL with the query parameters appended as a literal string.
    ///
    /// An existing query string in `url` stays verbatim; parameters are
    /// joined with `?` or `&` as appropriate and never re-encoded.
    #[must_use]
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let sep = if self.url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.url, sep, self.query.to_literal())
    }

    /// Headers in emission order: input headers as given, then the folded
    /// cookie header when any cookies are present.
    #[must_use]
    pub fn ordered_headers(&self) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = self
            .headers
            .iter()
            .map(|h| (h.name.clone(), h.value.clone()))
            .collect();
        if let Some(folded) = fold_cookies(&self.cookies) {
            out.push(("cookie".to_string(), folded));
        }
        out
    }

    /// The content type governing the payload: an explicit content-type
    /// header wins, otherwise the body's own declared type.
    #[must_use]
    pub fn content_type(&self) -> Option<String> {
        self.headers
            .get("content-type")
            .map(|h| h.value.clone())
            .or_else(|| self.body.content_type())
    }

    /// Whether the input headers already name a content type.
    #[must_use]
    pub fn has_content_type_header(&self) -> bool {
        self.headers.contains("content-type")
    }

    /// Checks the internal consistency rules a renderer relies on.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] when the payload and its declared media
    /// type disagree, the media type is malformed, a multipart part is
    /// unnamed, or a content-type header names a different boundary than
    /// the multipart body carries.
    pub fn validate(&self) -> RequestResult<()> {
        match &self.body {
            Body::None | Body::UrlEncoded { .. } => {}
            Body::Raw { media_type, text } => {
                if media_type.is_empty() && !text.is_empty() {
                    return Err(RequestError::MissingContentType);
                }
                if !media_type.is_empty() && text.is_empty() {
                    return Err(RequestError::MissingPayload {
                        media_type: media_type.clone(),
                    });
                }
                if !media_type.is_empty() && media_type.parse::<mime::Mime>().is_err() {
                    return Err(RequestError::MalformedMediaType {
                        given: media_type.clone(),
                    });
                }
            }
            Body::Multipart { boundary, parts } => {
                for (index, part) in parts.iter().enumerate() {
                    if part.name.is_empty() {
                        return Err(RequestError::UnnamedPart { index });
                    }
                }
                if let Some(header) = self.headers.get("content-type") {
                    if let Some(declared) = boundary_param(&header.value) {
                        if declared != boundary.as_str() {
                            return Err(RequestError::BoundaryMismatch {
                                header: declared.to_string(),
                                body: boundary.clone(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Extracts the `boundary` parameter from a content-type header value.
fn boundary_param(value: &str) -> Option<&str> {
    let rest = value.split_once("boundary=")?.1;
    Some(rest.split(';').next().unwrap_or(rest).trim())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::request::{Header, Part, QueryParam};
    use pretty_assertions::assert_eq;

    #[test]
    fn full_url_without_params_is_verbatim() {
        let req = Request::get("http://example.com/har?foo=bar&foo=baz&baz=abc&key=value");
        assert_eq!(
            req.full_url(),
            "http://example.com/har?foo=bar&foo=baz&baz=abc&key=value"
        );
    }

    #[test]
    fn full_url_appends_with_correct_separator() {
        let mut req = Request::get("http://example.com/har");
        req.query.add(QueryParam::new("key", "value"));
        assert_eq!(req.full_url(), "http://example.com/har?key=value");

        let mut req = Request::get("http://example.com/har?foo=bar");
        req.query.add(QueryParam::new("key", "value"));
        assert_eq!(req.full_url(), "http://example.com/har?foo=bar&key=value");
    }

    #[test]
    fn cookie_header_comes_after_explicit_headers() {
        let mut req = Request::get("http://example.com");
        req.headers.add(Header::new("accept", "application/json"));
        req.cookies.push(CookiePair::new("foo", "bar"));
        req.cookies.push(CookiePair::new("bar", "baz"));

        let headers = req.ordered_headers();
        assert_eq!(
            headers,
            vec![
                ("accept".to_string(), "application/json".to_string()),
                ("cookie".to_string(), "foo=bar; bar=baz".to_string()),
            ]
        );
    }

    #[test]
    fn header_content_type_wins_over_body() {
        let mut req = Request::post("http://example.com");
        req.headers
            .add(Header::new("content-type", "application/json; charset=utf-8"));
        req.body = Body::json(r#"{"a":1}"#);
        assert_eq!(
            req.content_type().as_deref(),
            Some("application/json; charset=utf-8")
        );
    }

    #[test]
    fn validate_rejects_payload_without_media_type() {
        let mut req = Request::post("http://example.com");
        req.body = Body::Raw {
            media_type: String::new(),
            text: "hello".to_string(),
        };
        assert_eq!(req.validate(), Err(RequestError::MissingContentType));
    }

    #[test]
    fn validate_rejects_media_type_without_payload() {
        let mut req = Request::post("http://example.com");
        req.body = Body::Raw {
            media_type: "application/json".to_string(),
            text: String::new(),
        };
        assert!(matches!(
            req.validate(),
            Err(RequestError::MissingPayload { .. })
        ));
    }

    #[test]
    fn validate_rejects_malformed_media_type() {
        let mut req = Request::post("http://example.com");
        req.body = Body::Raw {
            media_type: "not a media type".to_string(),
            text: "x".to_string(),
        };
        assert!(matches!(
            req.validate(),
            Err(RequestError::MalformedMediaType { .. })
        ));
    }

    #[test]
    fn validate_rejects_unnamed_part() {
        let mut req = Request::post("http://example.com");
        req.body = Body::Multipart {
            boundary: "xyz".to_string(),
            parts: vec![Part::new("", "bar")],
        };
        assert_eq!(req.validate(), Err(RequestError::UnnamedPart { index: 0 }));
    }

    #[test]
    fn validate_rejects_boundary_mismatch() {
        let mut req = Request::post("http://example.com");
        req.headers.add(Header::new(
            "content-type",
            "multipart/form-data; boundary=other",
        ));
        req.body = Body::Multipart {
            boundary: "xyz".to_string(),
            parts: vec![Part::new("foo", "bar")],
        };
        assert!(matches!(
            req.validate(),
            Err(RequestError::BoundaryMismatch { .. })
        ));
    }

    #[test]
    fn request_survives_a_json_round_trip() {
        let mut req = Request::post("http://example.com");
        req.headers.add(Header::new("accept", "*/*"));
        req.query.add(QueryParam::new("page", "1"));
        req.cookies.push(CookiePair::new("foo", "bar"));
        req.body = Body::json(r#"{"a":1}"#);

        let json = serde_json::to_string(&req).unwrap();
        let back: Request = serde_json::from_str(&json).unwrap();
        assert_eq!(req, back);
    }

    #[test]
    fn validate_accepts_matching_boundary() {
        let mut req = Request::post("http://example.com");
        req.headers.add(Header::new(
            "content-type",
            "multipart/form-data; boundary=---011000010111000001101001",
        ));
        req.body = Body::Multipart {
            boundary: "---011000010111000001101001".to_string(),
            parts: vec![Part::new("foo", "bar")],
        };
        assert_eq!(req.validate(), Ok(()));
    }
}
