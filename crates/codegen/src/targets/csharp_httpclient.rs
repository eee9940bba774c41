//! C# + HttpClient renderer.
//!
//! The content type rides on the `StringContent` object, so a content-type
//! entry never goes through `request.Headers.Add` (the BCL rejects it
//! there).

use quiver_domain::{HttpMethod, Request, fold_cookies};

use crate::error::RenderResult;
use crate::escape::DOUBLE_QUOTED;
use crate::payload;

pub(crate) fn render(request: &Request) -> RenderResult<String> {
    let mut code = String::new();
    code.push_str("using var client = new HttpClient();\n\n");

    code.push_str("var request = new HttpRequestMessage\n{\n");
    code.push_str(&format!("    Method = {},\n", method_name(request.method)));
    code.push_str(&format!(
        "    RequestUri = new Uri(\"{}\"),\n",
        DOUBLE_QUOTED.apply(&request.full_url())
    ));
    if let Some(text) = payload::body_literal(request)? {
        let media_type = request.body.content_type().unwrap_or_default();
        code.push_str(&format!(
            "    Content = new StringContent(\"{}\", Encoding.UTF8, \"{}\"),\n",
            DOUBLE_QUOTED.apply(&text),
            DOUBLE_QUOTED.apply(&media_type)
        ));
    }
    code.push_str("};\n\n");

    let mut header_lines = Vec::new();
    for header in request.headers.iter() {
        if header.name.eq_ignore_ascii_case("content-type") {
            continue;
        }
        header_lines.push(format!(
            "request.Headers.Add(\"{}\", \"{}\");",
            DOUBLE_QUOTED.apply(&header.name),
            DOUBLE_QUOTED.apply(&header.value)
        ));
    }
    if let Some(folded) = fold_cookies(&request.cookies) {
        header_lines.push(format!(
            "request.Headers.Add(\"cookie\", \"{}\");",
            DOUBLE_QUOTED.apply(&folded)
        ));
    }
    if !header_lines.is_empty() {
        code.push_str(&header_lines.join("\n"));
        code.push_str("\n\n");
    }

    code.push_str("var response = await client.SendAsync(request);\n");
    code.push_str("var content = await response.Content.ReadAsStringAsync();\n\n");
    code.push_str("Console.WriteLine(content);");
    Ok(code)
}

const fn method_name(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "HttpMethod.Get",
        HttpMethod::Post => "HttpMethod.Post",
        HttpMethod::Put => "HttpMethod.Put",
        HttpMethod::Patch => "HttpMethod.Patch",
        HttpMethod::Delete => "HttpMethod.Delete",
        HttpMethod::Head => "HttpMethod.Head",
        HttpMethod::Options => "HttpMethod.Options",
        HttpMethod::Trace => "HttpMethod.Trace",
    }
}
