//! Python + requests renderer.

use quiver_domain::Request;

use crate::error::RenderResult;
use crate::escape::DOUBLE_QUOTED;
use crate::payload;
use crate::targets::emission_headers;

pub(crate) fn render(request: &Request) -> RenderResult<String> {
    let mut code = String::new();
    code.push_str("import requests\n\n");
    code.push_str(&format!(
        "url = \"{}\"\n\n",
        DOUBLE_QUOTED.apply(&request.full_url())
    ));

    let body = payload::body_literal(request)?;
    if let Some(text) = &body {
        code.push_str(&format!(
            "payload = \"{}\"\n",
            DOUBLE_QUOTED.apply(text)
        ));
    }

    let headers = emission_headers(request);
    if !headers.is_empty() {
        let entries: Vec<String> = headers
            .iter()
            .map(|(name, value)| {
                format!(
                    "    \"{}\": \"{}\"",
                    DOUBLE_QUOTED.apply(name),
                    DOUBLE_QUOTED.apply(value)
                )
            })
            .collect();
        code.push_str(&format!("headers = {{\n{}\n}}\n", entries.join(",\n")));
    }
    if body.is_some() || !headers.is_empty() {
        code.push('\n');
    }

    let mut args = vec!["url".to_string()];
    if body.is_some() {
        args.push("data=payload".to_string());
    }
    if !headers.is_empty() {
        args.push("headers=headers".to_string());
    }
    code.push_str(&format!(
        "response = requests.{}({})\n\n",
        request.method.as_lower_str(),
        args.join(", ")
    ));
    code.push_str("print(response.text)");
    Ok(code)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quiver_domain::Body;

    #[test]
    fn bare_get_passes_only_the_url() {
        let req = Request::get("http://example.com");
        let code = render(&req).unwrap();
        assert!(code.contains("response = requests.get(url)\n"));
        assert!(!code.contains("payload"));
        assert!(!code.contains("headers"));
    }

    #[test]
    fn post_with_json_body() {
        let mut req = Request::post("http://example.com");
        req.body = Body::json(r#"{"a":1}"#);
        let code = render(&req).unwrap();

        assert!(code.contains(r#"payload = "{\"a\":1}""#));
        assert!(code.contains("\"content-type\": \"application/json\""));
        assert_eq!(
            code.lines().last(),
            Some("print(response.text)")
        );
        assert!(code.contains("requests.post(url, data=payload, headers=headers)"));
    }
}
