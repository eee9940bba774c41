//! Per-target renderers, one module per language/library pair.

pub(crate) mod csharp_httpclient;
pub(crate) mod go_native;
pub(crate) mod java_okhttp;
pub(crate) mod java_unirest;
pub(crate) mod javascript_axios;
pub(crate) mod javascript_fetch;
pub(crate) mod kotlin_okhttp;
pub(crate) mod php_curl;
pub(crate) mod python_requests;
pub(crate) mod ruby_nethttp;
pub(crate) mod shell_curl;
pub(crate) mod swift_urlsession;

use quiver_domain::{Request, fold_cookies};

/// Headers in emission order for targets whose header container must carry
/// the content type itself: input headers as given, a content-type entry
/// derived from the body when the input lacks one, then the folded cookie
/// header.
pub(crate) fn emission_headers(request: &Request) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = request
        .headers
        .iter()
        .map(|h| (h.name.clone(), h.value.clone()))
        .collect();
    if !request.has_content_type_header() {
        if let Some(content_type) = request.body.content_type() {
            out.push(("content-type".to_string(), content_type));
        }
    }
    if let Some(folded) = fold_cookies(&request.cookies) {
        out.push(("cookie".to_string(), folded));
    }
    out
}
