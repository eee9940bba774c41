//! JavaScript + axios renderer.

use quiver_domain::Request;

use crate::error::RenderResult;
use crate::escape::SINGLE_QUOTED;
use crate::payload;
use crate::targets::emission_headers;

pub(crate) fn render(request: &Request) -> RenderResult<String> {
    let mut options = vec![
        format!("  method: '{}'", request.method.as_lower_str()),
        format!("  url: '{}'", SINGLE_QUOTED.apply(&request.full_url())),
    ];

    let headers = emission_headers(request);
    if !headers.is_empty() {
        let entries: Vec<String> = headers
            .iter()
            .map(|(name, value)| {
                format!(
                    "    '{}': '{}'",
                    SINGLE_QUOTED.apply(name),
                    SINGLE_QUOTED.apply(value)
                )
            })
            .collect();
        options.push(format!("  headers: {{\n{}\n  }}", entries.join(",\n")));
    }

    if let Some(text) = payload::body_literal(request)? {
        options.push(format!("  data: '{}'", SINGLE_QUOTED.apply(&text)));
    }

    let mut code = String::new();
    code.push_str("axios({\n");
    code.push_str(&options.join(",\n"));
    code.push_str("\n})\n");
    code.push_str(".then(response => console.log(response.data));");
    Ok(code)
}
