//! Quiver Codegen - Snippet renderers
//!
//! Turns an immutable [`Request`] description into a source-code snippet
//! for a target language/library pair. Rendering is a pure function: no
//! I/O, no shared state, byte-identical output for identical inputs.

pub mod error;
pub mod escape;
pub mod payload;
mod targets;

pub use error::{RenderError, RenderResult};

use quiver_domain::{Request, Target};

/// Renders a snippet for the target named by `target_id` (a
/// `language/client` pair such as `"java/okhttp"`).
///
/// # Errors
///
/// Returns [`RenderError::UnsupportedTarget`] when the id is unknown and
/// [`RenderError::InvalidRequest`] when the request fails validation. No
/// partial output is ever produced.
pub fn render(request: &Request, target_id: &str) -> RenderResult<String> {
    let target = Target::from_id(target_id).ok_or_else(|| RenderError::UnsupportedTarget {
        target: target_id.to_string(),
    })?;
    render_target(request, target)
}

/// Renders a snippet for an already-resolved [`Target`].
///
/// # Errors
///
/// Returns [`RenderError::InvalidRequest`] when the request fails
/// validation.
pub fn render_target(request: &Request, target: Target) -> RenderResult<String> {
    request.validate()?;
    tracing::debug!(target_id = target.id(), method = %request.method, "rendering snippet");
    match target {
        Target::ShellCurl => targets::shell_curl::render(request),
        Target::PythonRequests => targets::python_requests::render(request),
        Target::JavascriptFetch => targets::javascript_fetch::render(request),
        Target::JavascriptAxios => targets::javascript_axios::render(request),
        Target::GoNative => targets::go_native::render(request),
        Target::JavaOkhttp => targets::java_okhttp::render(request),
        Target::JavaUnirest => targets::java_unirest::render(request),
        Target::KotlinOkhttp => targets::kotlin_okhttp::render(request),
        Target::CsharpHttpclient => targets::csharp_httpclient::render(request),
        Target::RubyNethttp => targets::ruby_nethttp::render(request),
        Target::PhpCurl => targets::php_curl::render(request),
        Target::SwiftUrlsession => targets::swift_urlsession::render(request),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use quiver_domain::Body;

    #[test]
    fn unknown_target_id_is_rejected() {
        let req = Request::get("http://example.com");
        let err = render(&req, "cobol/nonexistent").unwrap_err();
        assert!(matches!(
            err,
            RenderError::UnsupportedTarget { target } if target == "cobol/nonexistent"
        ));
    }

    #[test]
    fn invalid_request_is_rejected_before_dispatch() {
        let mut req = Request::post("http://example.com");
        req.body = Body::Raw {
            media_type: String::new(),
            text: "payload".to_string(),
        };
        let err = render(&req, "java/okhttp").unwrap_err();
        assert!(matches!(err, RenderError::InvalidRequest(_)));
    }

    #[test]
    fn every_target_renders_a_plain_get() {
        let req = Request::get("http://example.com");
        for target in Target::all() {
            let code = render_target(&req, *target).unwrap();
            assert!(!code.is_empty(), "empty snippet for {target:?}");
            assert!(code.contains("http://example.com"), "no URL in {target:?}");
        }
    }
}
