use serde_json::{Map, Value};

use crate::request::{BodyKind, Request};
use crate::targets::code_builder::CodeBuilder;
use crate::targets::{ClientGenerator, ClientInfo, GeneratorOptions};

/// Browser / Node `fetch` API.
#[derive(Debug, Clone)]
pub struct JsFetch {
    info: ClientInfo,
}

impl JsFetch {
    pub fn new() -> Self {
        Self {
            info: ClientInfo::new("fetch", "fetch")
                .with_link("https://developer.mozilla.org/en-US/docs/Web/API/fetch")
                .with_description("Perform asynchronous HTTP requests with the Fetch API"),
        }
    }
}

impl Default for JsFetch {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientGenerator for JsFetch {
    fn info(&self) -> &ClientInfo {
        &self.info
    }

    fn generate(&self, request: &Request, options: &GeneratorOptions) -> String {
        let mut code = CodeBuilder::new(options.indent.as_str(), "\n");
        let body = &request.post_data;
        let kind = BodyKind::classify(&body.mime_type);
        let multipart = kind == BodyKind::Multipart && !body.params.is_empty();

        if multipart {
            code.push("const form = new FormData();");
            for param in &body.params {
                let value = js_string(param.value.as_deref().unwrap_or_default());
                match &param.file_name {
                    Some(file_name) => code.push(format!(
                        "form.append({}, new Blob([{}]), {});",
                        js_string(&param.name),
                        value,
                        js_string(file_name)
                    )),
                    None => code.push(format!(
                        "form.append({}, {});",
                        js_string(&param.name),
                        value
                    )),
                };
            }
            code.blank();
        }

        code.push(format!("const url = {};", js_string(&request.full_url)));

        // FormData supplies its own content type and boundary
        let headers: Map<String, Value> = request
            .all_headers
            .iter()
            .filter(|(name, _)| !(multipart && name.eq_ignore_ascii_case("content-type")))
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();

        let mut fields = vec![format!("method: {}", js_string(&request.method))];
        if !headers.is_empty() {
            fields.push(format!("headers: {}", Value::Object(headers)));
        }

        let body_expr = match (kind, &body.json_obj, &body.params_obj) {
            _ if multipart => Some("form".to_string()),
            (BodyKind::Json, Some(json), _) => Some(format!("JSON.stringify({json})")),
            (BodyKind::UrlEncoded, _, Some(params)) => {
                let params: Map<String, Value> = params
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect();
                Some(format!("new URLSearchParams({})", Value::Object(params)))
            }
            _ if !body.text.is_empty() => Some(js_string(&body.text)),
            _ => None,
        };
        if let Some(expr) = body_expr {
            fields.push(format!("body: {expr}"));
        }

        code.push("const options = {");
        let count = fields.len();
        for (i, field) in fields.into_iter().enumerate() {
            let comma = if i + 1 < count { "," } else { "" };
            code.push_indented(1, format!("{field}{comma}"));
        }
        code.push("};").blank();

        code.push("fetch(url, options)");
        code.push_indented(1, ".then(res => res.json())");
        code.push_indented(1, ".then(json => console.log(json))");
        code.push_indented(1, ".catch(err => console.error(err));");

        code.join()
    }
}

fn js_string(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}
