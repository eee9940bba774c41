//! PHP + ext-curl renderer.

use quiver_domain::{HttpMethod, Request};

use crate::error::RenderResult;
use crate::escape::{DOLLAR_DOUBLE_QUOTED, LITERAL_SINGLE_QUOTED};
use crate::payload;
use crate::targets::emission_headers;

pub(crate) fn render(request: &Request) -> RenderResult<String> {
    let mut code = String::new();
    code.push_str("<?php\n\n");
    code.push_str("$ch = curl_init();\n\n");

    code.push_str(&format!(
        "curl_setopt($ch, CURLOPT_URL, '{}');\n",
        LITERAL_SINGLE_QUOTED.apply(&request.full_url())
    ));
    code.push_str("curl_setopt($ch, CURLOPT_RETURNTRANSFER, true);\n");
    if request.method != HttpMethod::Get {
        code.push_str(&format!(
            "curl_setopt($ch, CURLOPT_CUSTOMREQUEST, '{}');\n",
            request.method.as_str()
        ));
    }

    let headers = emission_headers(request);
    if !headers.is_empty() {
        code.push_str("\n$headers = [\n");
        for (name, value) in &headers {
            code.push_str(&format!(
                "    '{}',\n",
                LITERAL_SINGLE_QUOTED.apply(&format!("{name}: {value}"))
            ));
        }
        code.push_str("];\n");
        code.push_str("curl_setopt($ch, CURLOPT_HTTPHEADER, $headers);\n");
    }

    if let Some(text) = payload::body_literal(request)? {
        code.push_str(&format!(
            "\ncurl_setopt($ch, CURLOPT_POSTFIELDS, \"{}\");\n",
            DOLLAR_DOUBLE_QUOTED.apply(&text)
        ));
    }

    code.push_str("\n$response = curl_exec($ch);\ncurl_close($ch);\n\n");
    code.push_str("echo $response;");
    Ok(code)
}
