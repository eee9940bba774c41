//! Kotlin + OkHttp renderer.

use quiver_domain::{HttpMethod, Request};

use crate::error::RenderResult;
use crate::escape::DOLLAR_DOUBLE_QUOTED;
use crate::payload;

pub(crate) fn render(request: &Request) -> RenderResult<String> {
    let mut code = String::new();
    code.push_str("val client = OkHttpClient()\n\n");

    let body = payload::body_literal(request)?;
    if let Some(text) = &body {
        let media_type = request.body.content_type().unwrap_or_default();
        code.push_str(&format!(
            "val mediaType = \"{}\".toMediaType()\n",
            DOLLAR_DOUBLE_QUOTED.apply(&media_type)
        ));
        code.push_str(&format!(
            "val body = \"{}\".toRequestBody(mediaType)\n\n",
            DOLLAR_DOUBLE_QUOTED.apply(text)
        ));
    }

    code.push_str("val request = Request.Builder()\n");
    code.push_str(&format!(
        "  .url(\"{}\")\n",
        DOLLAR_DOUBLE_QUOTED.apply(&request.full_url())
    ));
    code.push_str(&format!(
        "  {}\n",
        method_call(request.method, body.is_some())
    ));
    for (name, value) in request.ordered_headers() {
        code.push_str(&format!(
            "  .addHeader(\"{}\", \"{}\")\n",
            DOLLAR_DOUBLE_QUOTED.apply(&name),
            DOLLAR_DOUBLE_QUOTED.apply(&value)
        ));
    }
    code.push_str("  .build()\n\n");
    code.push_str("val response = client.newCall(request).execute()");
    Ok(code)
}

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
