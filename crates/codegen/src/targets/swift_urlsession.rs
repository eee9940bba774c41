//! Swift + URLSession renderer.

use quiver_domain::Request;

use crate::error::RenderResult;
use crate::escape::DOUBLE_QUOTED;
use crate::payload;
use crate::targets::emission_headers;

pub(crate) fn render(request: &Request) -> RenderResult<String> {
    let mut code = String::new();
    code.push_str(&format!(
        "let url = URL(string: \"{}\")!\n",
        DOUBLE_QUOTED.apply(&request.full_url())
    ));
    code.push_str("var request = URLRequest(url: url)\n");
    code.push_str(&format!(
        "request.httpMethod = \"{}\"\n",
        request.method.as_str()
    ));

    for (name, value) in emission_headers(request) {
        code.push_str(&format!(
            "request.setValue(\"{}\", forHTTPHeaderField: \"{}\")\n",
            DOUBLE_QUOTED.apply(&value),
            DOUBLE_QUOTED.apply(&name)
        ));
    }

    if let Some(text) = payload::body_literal(request)? {
        code.push_str(&format!(
            "request.httpBody = \"{}\".data(using: .utf8)\n",
            DOUBLE_QUOTED.apply(&text)
        ));
    }

    code.push_str("\nlet task = URLSession.shared.dataTask(with: request) { data, response, error in\n");
    code.push_str("    if let error = error {\n");
    code.push_str("        print(\"Error: \\(error)\")\n");
    code.push_str("        return\n");
    code.push_str("    }\n");
    code.push_str("    if let data = data, let string = String(data: data, encoding: .utf8) {\n");
    code.push_str("        print(string)\n");
    code.push_str("    }\n");
    code.push_str("}\n");
    code.push_str("task.resume()");
    Ok(code)
}
