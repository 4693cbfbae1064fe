//! In-memory `multipart/form-data` body builder.

use bytes::{BufMut, Bytes, BytesMut};

/// Fixed boundary so generated snippets are reproducible.
pub const DEFAULT_BOUNDARY: &str = "---011000010111000001101001";

const CRLF: &str = "\r\n";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Field {
        name: String,
        value: String,
        content_type: Option<String>,
    },
    File {
        name: String,
        value: String,
        file_name: String,
        content_type: String,
    },
}

#[derive(Debug, Clone)]
pub struct MultipartForm {
    boundary: String,
    parts: Vec<Part>,
}

impl MultipartForm {
    pub fn new(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            parts: Vec::new(),
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn append_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push(Part::Field {
            name: name.into(),
            value: value.into(),
            content_type: None,
        });
    }

    /// Append a text field that carries its own `Content-Type` line.
    pub fn append_typed_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        content_type: impl Into<String>,
    ) {
        self.parts.push(Part::Field {
            name: name.into(),
            value: value.into(),
            content_type: Some(content_type.into()),
        });
    }

    /// Append file content. A missing content type is sent as
    /// `application/octet-stream`.
    pub fn append_file(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Option<&str>,
    ) {
        self.parts.push(Part::File {
            name: name.into(),
            value: value.into(),
            file_name: file_name.into(),
            content_type: content_type
                .filter(|ct| !ct.is_empty())
                .unwrap_or(mime::APPLICATION_OCTET_STREAM.essence_str())
                .to_string(),
        });
    }

    /// Encoded chunks: one per part, then the closing delimiter.
    pub fn chunks(&self) -> impl Iterator<Item = Bytes> + '_ {
        self.parts
            .iter()
            .map(|part| self.encode_part(part))
            .chain(std::iter::once(self.encode_closing()))
    }

    pub fn render(&self) -> String {
        self.chunks()
            .map(|chunk| String::from_utf8_lossy(&chunk).into_owned())
            .collect()
    }

    fn encode_part(&self, part: &Part) -> Bytes {
        let mut buf = BytesMut::new();
        buf.put_slice(b"--");
        buf.put_slice(self.boundary.as_bytes());
        buf.put_slice(CRLF.as_bytes());

        match part {
            Part::Field {
                name,
                value,
                content_type,
            } => {
                buf.put_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"{CRLF}").as_bytes(),
                );
                if let Some(content_type) = content_type {
                    buf.put_slice(format!("Content-Type: {content_type}{CRLF}").as_bytes());
                }
                buf.put_slice(CRLF.as_bytes());
                buf.put_slice(value.as_bytes());
            }
            Part::File {
                name,
                value,
                file_name,
                content_type,
            } => {
                buf.put_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"{CRLF}"
                    )
                    .as_bytes(),
                );
                buf.put_slice(format!("Content-Type: {content_type}{CRLF}").as_bytes());
                buf.put_slice(CRLF.as_bytes());
                buf.put_slice(value.as_bytes());
            }
        }

        buf.put_slice(CRLF.as_bytes());
        buf.freeze()
    }

    fn encode_closing(&self) -> Bytes {
        Bytes::from(format!("--{}--{CRLF}", self.boundary))
    }
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new(DEFAULT_BOUNDARY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_field() {
        let mut form = MultipartForm::new("XYZ");
        form.append_field("foo", "bar");

        assert_eq!(
            form.render(),
            "--XYZ\r\nContent-Disposition: form-data; name=\"foo\"\r\n\r\nbar\r\n--XYZ--\r\n"
        );
    }

    #[test]
    fn test_render_typed_field() {
        let mut form = MultipartForm::new("XYZ");
        form.append_typed_field("meta", "{}", "application/json");

        assert_eq!(
            form.render(),
            "--XYZ\r\nContent-Disposition: form-data; name=\"meta\"\r\n\
             Content-Type: application/json\r\n\r\n{}\r\n--XYZ--\r\n"
        );
    }

    #[test]
    fn test_render_file_with_default_content_type() {
        let mut form = MultipartForm::new("XYZ");
        form.append_file("upload", "hello", "hello.txt", None);

        let body = form.render();
        assert!(body.contains("name=\"upload\"; filename=\"hello.txt\"\r\n"));
        assert!(body.contains("Content-Type: application/octet-stream\r\n\r\nhello\r\n"));
    }

    #[test]
    fn test_chunks_per_part_plus_closing() {
        let mut form = MultipartForm::default();
        form.append_field("a", "1");
        form.append_file("b", "2", "b.json", Some("application/json"));

        let chunks: Vec<Bytes> = form.chunks().collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(
            chunks[2],
            Bytes::from_static(b"-----011000010111000001101001--\r\n")
        );
    }

    #[test]
    fn test_empty_form_is_only_closing_delimiter() {
        let form = MultipartForm::new("b");
        assert!(form.is_empty());
        assert_eq!(form.render(), "--b--\r\n");
    }
}
