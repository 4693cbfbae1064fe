//! Raw HTTP Archive models.
//!
//! These mirror the `request` object of a HAR 1.2 entry. Everything except
//! the method and url is optional on the wire; missing sections are filled in
//! when a record is converted into a [`super::RawRequest`].

use serde::{Deserialize, Serialize};

/// One element of `log.entries` in an archive.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub request: HarRequest,
}

/// One captured request, as it appears in the archive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarRequest {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub url: String,
    pub http_version: Option<String>,
    pub query_string: Option<Vec<Pair>>,
    pub headers: Option<Vec<Pair>>,
    pub cookies: Option<Vec<Pair>>,
    pub post_data: Option<HarPostData>,
}

/// A `{name, value}` record used for query pairs, headers and cookies.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Pair {
    pub name: String,
    pub value: String,
}

impl Pair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarPostData {
    pub mime_type: Option<String>,
    pub text: Option<String>,
    pub params: Option<Vec<HarParam>>,
}

/// A posted form parameter; `file_name` marks file content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HarParam {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl HarParam {
    pub fn is_file(&self) -> bool {
        self.file_name.is_some()
    }
}
