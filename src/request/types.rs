use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::har::{HarParam, Pair};

pub type HeadersMap = IndexMap<String, String>;
pub type QueryMap = IndexMap<String, String>;

/// Fully normalized request handed to client generators.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub method: String,
    /// Url without its query string.
    pub url: String,
    /// Url with the reconciled query string re-attached.
    pub full_url: String,
    pub http_version: String,
    pub query_string: Vec<Pair>,
    pub headers: Vec<Pair>,
    pub cookies: Vec<Pair>,
    pub post_data: PostData,
    pub query_obj: QueryMap,
    pub headers_obj: HeadersMap,
    pub cookies_obj: IndexMap<String, String>,
    pub all_headers: HeadersMap,
    /// Path plus query, as sent on an HTTP/1.x request line.
    pub path: String,
    pub host: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub mime_type: String,
    pub text: String,
    pub params: Vec<HarParam>,
    /// Parsed body for JSON mime types; `None` when not applicable.
    pub json_obj: Option<Value>,
    pub params_obj: Option<IndexMap<String, String>>,
    pub boundary: Option<String>,
}

impl PostData {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.params.is_empty()
    }
}

/// Body family selected from the post data mime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Multipart,
    UrlEncoded,
    Json,
    Other,
}

impl BodyKind {
    /// Classify by the mime type essence; parameters such as `charset` are ignored.
    pub fn classify(mime_type: &str) -> Self {
        let essence = match mime_type.parse::<mime::Mime>() {
            Ok(parsed) => parsed.essence_str().to_ascii_lowercase(),
            Err(_) => return BodyKind::Other,
        };

        match essence.as_str() {
            "multipart/mixed" | "multipart/related" | "multipart/form-data"
            | "multipart/alternative" => BodyKind::Multipart,
            "application/x-www-form-urlencoded" => BodyKind::UrlEncoded,
            "text/json" | "text/x-json" | "application/json" | "application/x-json" => {
                BodyKind::Json
            }
            _ => BodyKind::Other,
        }
    }
}
