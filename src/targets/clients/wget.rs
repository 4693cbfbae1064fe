use crate::request::Request;
use crate::targets::code_builder::CodeBuilder;
use crate::targets::shell::{escape, quote};
use crate::targets::{ClientGenerator, ClientInfo, GeneratorOptions};

/// GNU Wget command line. Options: `short`, `verbose`.
#[derive(Debug, Clone)]
pub struct Wget {
    info: ClientInfo,
}

impl Wget {
    pub fn new() -> Self {
        Self {
            info: ClientInfo::new("wget", "Wget")
                .with_link("https://www.gnu.org/software/wget/")
                .with_description("a free software package for retrieving files using HTTP, HTTPS"),
        }
    }
}

impl Default for Wget {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientGenerator for Wget {
    fn info(&self) -> &ClientInfo {
        &self.info
    }

    fn generate(&self, request: &Request, options: &GeneratorOptions) -> String {
        let short = options.flag("short").unwrap_or(false);
        let verbose = options.flag("verbose").unwrap_or(false);

        let mut code = CodeBuilder::new(
            options.indent.as_str(),
            format!(" \\\n{}", options.indent),
        );

        code.push(match (verbose, short) {
            (true, _) => "wget --verbose",
            (false, true) => "wget -q",
            (false, false) => "wget --quiet",
        });
        code.push(format!("--method {}", quote(&request.method)));

        for (name, value) in &request.all_headers {
            code.push(format!("--header {}", quote(&format!("{name}: {value}"))));
        }

        if !request.post_data.text.is_empty() {
            code.push(format!(
                "--body-data {}",
                escape(&quote(&request.post_data.text))
            ));
        }

        code.push(if short { "-O" } else { "--output-document" });
        code.push(format!("- {}", quote(&request.full_url)));

        code.join()
    }
}
