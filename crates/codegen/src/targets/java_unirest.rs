//! Java + Unirest renderer.
//!
//! Fluent one-call style: method, URL, headers and body inline in a single
//! chained expression ending in `asString()`.

use quiver_domain::{HttpMethod, Request};

use crate::error::RenderResult;
use crate::escape::DOUBLE_QUOTED;
use crate::payload;

pub(crate) fn render(request: &Request) -> RenderResult<String> {
    let body = payload::body_literal(request)?;
    let url = DOUBLE_QUOTED.apply(&request.full_url());

    let opening = match request.method {
        // Unirest has no trace() call.
        HttpMethod::Trace => format!("Unirest.request(\"TRACE\", \"{url}\")"),
        method => format!("Unirest.{}(\"{url}\")", method.as_lower_str()),
    };

    let mut code = String::new();
    code.push_str(&format!("HttpResponse<String> response = {opening}\n"));
    for (name, value) in request.ordered_headers() {
        code.push_str(&format!(
            "  .header(\"{}\", \"{}\")\n",
            DOUBLE_QUOTED.apply(&name),
            DOUBLE_QUOTED.apply(&value)
        ));
    }
    if let Some(text) = &body {
        code.push_str(&format!("  .body(\"{}\")\n", DOUBLE_QUOTED.apply(text)));
    }
    code.push_str("  .asString();");
    Ok(code)
}
