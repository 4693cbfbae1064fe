use serde_json::Value;

use crate::request::{BodyKind, Request};
use crate::targets::code_builder::CodeBuilder;
use crate::targets::{ClientGenerator, ClientInfo, GeneratorOptions};

/// Python `requests`.
#[derive(Debug, Clone)]
pub struct PythonRequests {
    info: ClientInfo,
}

impl PythonRequests {
    pub fn new() -> Self {
        Self {
            info: ClientInfo::new("requests", "Requests")
                .with_link("http://docs.python-requests.org/en/latest/api/#requests.request")
                .with_description("Requests HTTP library"),
        }
    }
}

impl Default for PythonRequests {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientGenerator for PythonRequests {
    fn info(&self) -> &ClientInfo {
        &self.info
    }

    fn generate(&self, request: &Request, options: &GeneratorOptions) -> String {
        let indent = options.indent.as_str();
        let mut code = CodeBuilder::new(indent, "\n");
        let mut args = vec!["url".to_string()];

        code.push("import requests").blank();
        code.push(format!("url = {}", py_string(&request.url))).blank();

        if !request.query_obj.is_empty() {
            code.push(format!("querystring = {}", py_dict(request.query_obj.iter())))
                .blank();
        }

        let body = &request.post_data;
        match (&body.json_obj, BodyKind::classify(&body.mime_type)) {
            (Some(json), BodyKind::Json) => {
                code.push(format!("payload = {}", py_literal(json)));
                args.push("json=payload".to_string());
            }
            _ if !body.text.is_empty() => {
                code.push(format!("payload = {}", py_string(&body.text)));
                args.push("data=payload".to_string());
            }
            _ => {}
        }

        if !request.all_headers.is_empty() {
            code.push("headers = {");
            let count = request.all_headers.len();
            for (i, (name, value)) in request.all_headers.iter().enumerate() {
                let comma = if i + 1 < count { "," } else { "" };
                code.push_indented(1, format!("{}: {}{}", py_string(name), py_string(value), comma));
            }
            code.push("}");
            args.push("headers=headers".to_string());
        }

        if !request.query_obj.is_empty() {
            args.push("params=querystring".to_string());
        }

        if !body.text.is_empty() || !request.all_headers.is_empty() {
            code.blank();
        }

        code.push(format!(
            "response = requests.request({}, {})",
            py_string(&request.method),
            args.join(", ")
        ))
        .blank();
        code.push("print(response.text)");

        code.join()
    }
}

fn py_string(value: &str) -> String {
    // JSON string escapes are valid Python string escapes
    Value::String(value.to_string()).to_string()
}

fn py_dict<'a>(entries: impl Iterator<Item = (&'a String, &'a String)>) -> String {
    let items: Vec<String> = entries
        .map(|(k, v)| format!("{}: {}", py_string(k), py_string(v)))
        .collect();
    format!("{{{}}}", items.join(", "))
}

fn py_literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => py_string(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(py_literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) => {
            let items: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", py_string(k), py_literal(v)))
                .collect();
            format!("{{{}}}", items.join(", "))
        }
    }
}
