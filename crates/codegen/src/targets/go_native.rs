//! Go + net/http renderer.

use quiver_domain::Request;

use crate::error::RenderResult;
use crate::escape::DOUBLE_QUOTED;
use crate::payload;
use crate::targets::emission_headers;

pub(crate) fn render(request: &Request) -> RenderResult<String> {
    let mut code = String::new();
    code.push_str(&format!(
        "url := \"{}\"\n\n",
        DOUBLE_QUOTED.apply(&request.full_url())
    ));

    let body = payload::body_literal(request)?;
    if let Some(text) = &body {
        code.push_str(&format!(
            "body := strings.NewReader(\"{}\")\n\n",
            DOUBLE_QUOTED.apply(text)
        ));
        code.push_str(&format!(
            "req, err := http.NewRequest(\"{}\", url, body)\n",
            request.method.as_str()
        ));
    } else {
        code.push_str(&format!(
            "req, err := http.NewRequest(\"{}\", url, nil)\n",
            request.method.as_str()
        ));
    }
    code.push_str("if err != nil {\n\tlog.Fatal(err)\n}\n\n");

    let headers = emission_headers(request);
    if !headers.is_empty() {
        for (name, value) in &headers {
            code.push_str(&format!(
                "req.Header.Add(\"{}\", \"{}\")\n",
                DOUBLE_QUOTED.apply(name),
                DOUBLE_QUOTED.apply(value)
            ));
        }
        code.push('\n');
    }

    code.push_str("res, err := http.DefaultClient.Do(req)\n");
    code.push_str("if err != nil {\n\tlog.Fatal(err)\n}\n");
    code.push_str("defer res.Body.Close()\n\n");
    code.push_str("data, _ := io.ReadAll(res.Body)\n");
    code.push_str("fmt.Println(string(data))");
    Ok(code)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use quiver_domain::{Body, Header};

    #[test]
    fn bodyless_request_passes_nil() {
        let req = Request::get("http://example.com");
        let code = render(&req).unwrap();
        assert!(code.contains("http.NewRequest(\"GET\", url, nil)"));
        assert!(!code.contains("strings.NewReader"));
    }

    #[test]
    fn body_reader_comes_before_the_request() {
        let mut req = Request::post("http://example.com");
        req.body = Body::json(r#"{"a":1}"#);
        let code = render(&req).unwrap();

        let reader = code.find("strings.NewReader").unwrap();
        let request_line = code.find("http.NewRequest").unwrap();
        assert!(reader < request_line);
        assert!(code.contains(r#"strings.NewReader("{\"a\":1}")"#));
    }

    #[test]
    fn headers_use_add_to_keep_duplicates() {
        let mut req = Request::get("http://example.com");
        req.headers.add(Header::new("x-tag", "one"));
        req.headers.add(Header::new("x-tag", "two"));
        let code = render(&req).unwrap();
        assert!(code.contains("req.Header.Add(\"x-tag\", \"one\")\nreq.Header.Add(\"x-tag\", \"two\")"));
    }
}
