//! HTTP Archive input for harsnip
//!
//! - [`HarRequest`] - request record exactly as found in an archive entry
//! - [`RawRequest`] - the same record with optional sections defaulted
//! - [`RequestValidator`] - structural check applied before canonicalization
//! - [`HarSchemaValidator`] - built-in validator following the HAR 1.2 request schema

mod models;
mod validation;

pub use models::{Entry, HarParam, HarPostData, HarRequest, Pair};
pub use validation::{HarSchemaValidator, RequestValidator, ValidationError};

pub const DEFAULT_HTTP_VERSION: &str = "HTTP/1.1";
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// A request record with every optional section filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRequest {
    pub method: String,
    pub url: String,
    pub http_version: String,
    pub query_string: Vec<Pair>,
    pub headers: Vec<Pair>,
    pub cookies: Vec<Pair>,
    pub post_data: RawPostData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPostData {
    pub mime_type: String,
    pub text: String,
    pub params: Vec<HarParam>,
}

impl From<HarRequest> for RawRequest {
    fn from(request: HarRequest) -> Self {
        let post_data = request.post_data.unwrap_or_default();

        Self {
            method: request.method,
            url: request.url,
            http_version: request
                .http_version
                .unwrap_or_else(|| DEFAULT_HTTP_VERSION.to_string()),
            query_string: request.query_string.unwrap_or_default(),
            headers: request.headers.unwrap_or_default(),
            cookies: request.cookies.unwrap_or_default(),
            post_data: RawPostData {
                mime_type: post_data
                    .mime_type
                    .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
                text: post_data.text.unwrap_or_default(),
                params: post_data.params.unwrap_or_default(),
            },
        }
    }
}
