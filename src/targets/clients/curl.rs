use crate::request::{BodyKind, Request, has_header};
use crate::targets::code_builder::CodeBuilder;
use crate::targets::shell::{escape, quote};
use crate::targets::{ClientGenerator, ClientInfo, GeneratorOptions};

/// `curl` command line.
///
/// Options: `short` switches to single-letter flags, `binary` sends bodies
/// with `--data-binary`.
#[derive(Debug, Clone)]
pub struct Curl {
    info: ClientInfo,
}

impl Curl {
    pub fn new() -> Self {
        Self {
            info: ClientInfo::new("curl", "cURL")
                .with_link("http://curl.haxx.se/")
                .with_description("cURL is a command line tool and library for transferring data with URL syntax"),
        }
    }
}

impl Default for Curl {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientGenerator for Curl {
    fn info(&self) -> &ClientInfo {
        &self.info
    }

    fn generate(&self, request: &Request, options: &GeneratorOptions) -> String {
        let short = options.flag("short").unwrap_or(false);
        let binary = options.flag("binary").unwrap_or(false);
        let flag = |long: &'static str, abbr: &'static str| if short { abbr } else { long };
        let data_flag = if binary {
            "--data-binary"
        } else {
            flag("--data", "-d")
        };

        let mut code = CodeBuilder::new(
            options.indent.as_str(),
            format!(" \\\n{}", options.indent),
        );

        code.push(format!("curl {} {}", flag("--request", "-X"), request.method));
        code.push(format!(
            "{}{}",
            flag("--url ", ""),
            quote(&request.full_url)
        ));

        if request.http_version == "HTTP/1.0" {
            code.push(flag("--http1.0", "-0"));
        }

        let mut names: Vec<&String> = request.headers_obj.keys().collect();
        names.sort();
        for name in names {
            let header = format!("{}: {}", name, request.headers_obj[name]);
            code.push(format!("{} {}", flag("--header", "-H"), quote(&header)));
        }

        if !has_header(&request.headers_obj, "cookie") {
            if let Some(cookie) = request.all_headers.get("cookie") {
                code.push(format!("{} {}", flag("--cookie", "-b"), quote(cookie)));
            }
        }

        let body = &request.post_data;
        match BodyKind::classify(&body.mime_type) {
            BodyKind::Multipart => {
                for param in &body.params {
                    let field = match &param.file_name {
                        Some(file_name) => format!("{}=@{}", param.name, file_name),
                        None => format!(
                            "{}={}",
                            param.name,
                            param.value.as_deref().unwrap_or_default()
                        ),
                    };
                    code.push(format!("{} {}", flag("--form", "-F"), quote(&field)));
                }
            }
            BodyKind::UrlEncoded if !body.params.is_empty() => {
                for param in &body.params {
                    let pair = format!(
                        "{}={}",
                        param.name,
                        param.value.as_deref().unwrap_or_default()
                    );
                    code.push(format!("{} {}", data_flag, quote(&pair)));
                }
            }
            _ => {
                if !body.text.is_empty() {
                    code.push(format!("{} {}", data_flag, escape(&quote(&body.text))));
                }
            }
        }

        code.join()
    }
}
