//! Shell + curl renderer.

use quiver_domain::{HttpMethod, Request};

use crate::error::RenderResult;
use crate::escape::SHELL_SINGLE_QUOTED;
use crate::payload;
use crate::targets::emission_headers;

pub(crate) fn render(request: &Request) -> RenderResult<String> {
    let mut parts = vec!["curl".to_string()];

    // GET is curl's default verb.
    if request.method != HttpMethod::Get {
        parts.push(format!("-X {}", request.method.as_str()));
    }

    for (name, value) in emission_headers(request) {
        parts.push(format!(
            "-H '{}'",
            SHELL_SINGLE_QUOTED.apply(&format!("{name}: {value}"))
        ));
    }

    if let Some(text) = payload::body_literal(request)? {
        parts.push(format!("-d '{}'", SHELL_SINGLE_QUOTED.apply(&text)));
    }

    parts.push(format!(
        "'{}'",
        SHELL_SINGLE_QUOTED.apply(&request.full_url())
    ));

    Ok(parts.join(" \\\n  "))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quiver_domain::{Body, CookiePair, Header};

    #[test]
    fn get_omits_method_flag() {
        let req = Request::get("http://example.com");
        assert_eq!(render(&req).unwrap(), "curl \\\n  'http://example.com'");
    }

    #[test]
    fn full_invocation_order() {
        let mut req = Request::post("http://example.com/har?key=value");
        req.headers.add(Header::new("accept", "application/json"));
        req.cookies.push(CookiePair::new("foo", "bar"));
        req.body = Body::json(r#"{"a":1}"#);

        assert_eq!(
            render(&req).unwrap(),
            "curl \\\n  \
             -X POST \\\n  \
             -H 'accept: application/json' \\\n  \
             -H 'content-type: application/json' \\\n  \
             -H 'cookie: foo=bar' \\\n  \
             -d '{\"a\":1}' \\\n  \
             'http://example.com/har?key=value'"
        );
    }

    #[test]
    fn single_quotes_in_body_are_dodged() {
        let mut req = Request::post("http://example.com");
        req.body = Body::text("it's");
        let code = render(&req).unwrap();
        assert!(code.contains("-d 'it'\\''s'"));
    }
}
