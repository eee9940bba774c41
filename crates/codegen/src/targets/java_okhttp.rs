//! Java + OkHttp renderer.
//!
//! Builder-chain style: client first, then a `MediaType`/`RequestBody`
//! pair when a payload exists, then the `Request.Builder` chain (url,
//! method, `addHeader` calls in input order), closed by a synchronous
//! `execute()`.

use quiver_domain::{HttpMethod, Request};

use crate::error::RenderResult;
use crate::escape::DOUBLE_QUOTED;
use crate::payload;

pub(crate) fn render(request: &Request) -> RenderResult<String> {
    let mut code = String::new();
    code.push_str("OkHttpClient client = new OkHttpClient();\n\n");

    let body = payload::body_literal(request)?;
    if let Some(text) = &body {
        let media_type = request.body.content_type().unwrap_or_default();
        code.push_str(&format!(
            "MediaType mediaType = MediaType.parse(\"{}\");\n",
            DOUBLE_QUOTED.apply(&media_type)
        ));
        code.push_str(&format!(
            "RequestBody body = RequestBody.create(mediaType, \"{}\");\n\n",
            DOUBLE_QUOTED.apply(text)
        ));
    }

    code.push_str("Request request = new Request.Builder()\n");
    code.push_str(&format!(
        "  .url(\"{}\")\n",
        DOUBLE_QUOTED.apply(&request.full_url())
    ));
    code.push_str(&format!(
        "  {}\n",
        method_call(request.method, body.is_some())
    ));
    for (name, value) in request.ordered_headers() {
        code.push_str(&format!(
            "  .addHeader(\"{}\", \"{}\")\n",
            DOUBLE_QUOTED.apply(&name),
            DOUBLE_QUOTED.apply(&value)
        ));
    }
    code.push_str("  .build();\n\n");
    code.push_str("Response response = client.newCall(request).execute();");
    Ok(code)
}

/// The builder call for the verb. OkHttp names calls for the common verbs
/// and falls back to `method(...)` for the rest.
fn method_call(method: HttpMethod, has_body: bool) -> String {
    match (method, has_body) {
        (HttpMethod::Get, false) => ".get()".to_string(),
        (HttpMethod::Head, false) => ".head()".to_string(),
        (HttpMethod::Delete, false) => ".delete()".to_string(),
        (
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch | HttpMethod::Delete,
            true,
        ) => format!(".{}(body)", method.as_lower_str()),
        (_, true) => format!(".method(\"{}\", body)", method.as_str()),
        (_, false) => format!(".method(\"{}\", null)", method.as_str()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quiver_domain::{Body, Header};

    #[test]
    fn get_without_body_has_no_body_object() {
        let req = Request::get("http://example.com");
        let code = render(&req).unwrap();
        assert!(!code.contains("RequestBody"));
        assert!(code.contains("  .get()\n"));
    }

    #[test]
    fn post_builds_media_type_then_body() {
        let mut req = Request::post("http://example.com");
        req.body = Body::json(r#"{"a":1}"#);
        let code = render(&req).unwrap();

        let media = code.find("MediaType mediaType").unwrap();
        let body = code.find("RequestBody body").unwrap();
        assert!(media < body);
        assert!(code.contains(r#"RequestBody.create(mediaType, "{\"a\":1}");"#));
        assert!(code.contains("  .post(body)\n"));
    }

    #[test]
    fn headers_keep_input_order() {
        let mut req = Request::get("http://example.com");
        req.headers.add(Header::new("x-first", "1"));
        req.headers.add(Header::new("x-second", "2"));
        let code = render(&req).unwrap();

        let first = code.find("x-first").unwrap();
        let second = code.find("x-second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn options_without_body_uses_method_fallback() {
        let req = Request::new(HttpMethod::Options, "http://example.com");
        let code = render(&req).unwrap();
        assert!(code.contains(".method(\"OPTIONS\", null)"));
    }

    #[test]
    fn chain_ends_with_synchronous_execute() {
        let req = Request::get("http://example.com");
        let code = render(&req).unwrap();
        assert!(code.ends_with("Response response = client.newCall(request).execute();"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut req = Request::post("http://example.com");
        req.body = Body::json(r#"{"a":1}"#);
        assert_eq!(render(&req).unwrap(), render(&req).unwrap());
    }
}
