use crate::request::{Request, has_header};
use crate::targets::code_builder::CodeBuilder;
use crate::targets::{ClientGenerator, ClientInfo, GeneratorOptions};

const CRLF: &str = "\r\n";

/// Raw HTTP/1.1 request message.
///
/// Options: `absolute_uri` (default false) puts the full url on the request
/// line, `auto_host` and `auto_content_length` (default true) add the
/// `Host` and `Content-Length` headers when the request lacks them.
#[derive(Debug, Clone)]
pub struct Http1 {
    info: ClientInfo,
}

impl Http1 {
    pub fn new() -> Self {
        Self {
            info: ClientInfo::new("http1.1", "HTTP/1.1")
                .with_link("https://tools.ietf.org/html/rfc7230")
                .with_description("HTTP/1.1 request string in accordance with RFC 7230"),
        }
    }
}

impl Default for Http1 {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientGenerator for Http1 {
    fn info(&self) -> &ClientInfo {
        &self.info
    }

    fn generate(&self, request: &Request, options: &GeneratorOptions) -> String {
        let absolute_uri = options.flag("absolute_uri").unwrap_or(false);
        let auto_host = options.flag("auto_host").unwrap_or(true);
        let auto_content_length = options.flag("auto_content_length").unwrap_or(true);

        let request_target = if absolute_uri {
            &request.full_url
        } else {
            &request.path
        };

        let mut code = CodeBuilder::new("", CRLF);
        code.push(format!(
            "{} {} {}",
            request.method, request_target, request.http_version
        ));

        if auto_host && !has_header(&request.all_headers, "host") {
            code.push(format!("Host: {}", request.host));
        }

        for (name, value) in &request.all_headers {
            code.push(format!("{name}: {value}"));
        }

        let body = &request.post_data.text;
        if auto_content_length
            && !body.is_empty()
            && !has_header(&request.all_headers, "content-length")
        {
            code.push(format!("Content-Length: {}", body.len()));
        }

        format!("{}{CRLF}{CRLF}{}", code.join(), body)
    }
}
