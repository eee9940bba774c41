//! Ruby + Net::HTTP renderer.
//!
//! Headers and the URL use single quotes; the body uses double quotes so
//! control characters (multipart CRLFs) survive as escapes.

use quiver_domain::{HttpMethod, Request};

use crate::error::RenderResult;
use crate::escape::{LITERAL_SINGLE_QUOTED, RUBY_DOUBLE_QUOTED};
use crate::payload;
use crate::targets::emission_headers;

pub(crate) fn render(request: &Request) -> RenderResult<String> {
    let mut code = String::new();
    code.push_str("require 'net/http'\nrequire 'uri'\n\n");
    code.push_str(&format!(
        "uri = URI('{}')\n",
        LITERAL_SINGLE_QUOTED.apply(&request.full_url())
    ));
    code.push_str("http = Net::HTTP.new(uri.host, uri.port)\n");
    code.push_str("http.use_ssl = uri.scheme == 'https'\n\n");

    code.push_str(&format!(
        "request = Net::HTTP::{}.new(uri)\n",
        class_name(request.method)
    ));
    for (name, value) in emission_headers(request) {
        code.push_str(&format!(
            "request['{}'] = '{}'\n",
            LITERAL_SINGLE_QUOTED.apply(&name),
            LITERAL_SINGLE_QUOTED.apply(&value)
        ));
    }
    if let Some(text) = payload::body_literal(request)? {
        code.push_str(&format!(
            "request.body = \"{}\"\n",
            RUBY_DOUBLE_QUOTED.apply(&text)
        ));
    }

    code.push_str("\nresponse = http.request(request)\n\n");
    code.push_str("puts response.code\nputs response.body");
    Ok(code)
}

const fn class_name(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "Get",
        HttpMethod::Post => "Post",
        HttpMethod::Put => "Put",
        HttpMethod::Patch => "Patch",
        HttpMethod::Delete => "Delete",
        HttpMethod::Head => "Head",
        HttpMethod::Options => "Options",
        HttpMethod::Trace => "Trace",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use quiver_domain::{Body, Part};

    #[test]
    fn verb_maps_to_request_class() {
        let req = Request::new(HttpMethod::Patch, "http://example.com");
        let code = render(&req).unwrap();
        assert!(code.contains("request = Net::HTTP::Patch.new(uri)"));
    }

    #[test]
    fn multipart_crlf_survives_in_double_quotes() {
        let mut req = Request::post("http://example.com");
        req.body = Body::Multipart {
            boundary: "xyz".to_string(),
            parts: vec![Part::new("foo", "bar")],
        };
        let code = render(&req).unwrap();
        assert!(code.contains("request.body = \"--xyz\\r\\n"));
    }
}
