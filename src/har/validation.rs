use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use super::RawRequest;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("request is malformed: {0}")]
    Malformed(String),
    #[error("request is missing required field '{0}'")]
    MissingField(&'static str),
    #[error("method '{0}' is not a valid token")]
    InvalidMethod(String),
    #[error("url '{url}' is invalid: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("httpVersion '{0}' is not recognised")]
    InvalidHttpVersion(String),
    #[error("{section}[{index}] has an empty name")]
    EmptyName { section: &'static str, index: usize },
}

impl From<serde_json::Error> for ValidationError {
    fn from(value: serde_json::Error) -> Self {
        ValidationError::Malformed(value.to_string())
    }
}

/// Structural check applied to a defaulted request before canonicalization.
///
/// The check is async so that implementations backed by an external schema
/// service can suspend; callers await each request in input order.
#[async_trait]
pub trait RequestValidator: Send + Sync {
    async fn validate(&self, request: &RawRequest) -> Result<(), ValidationError>;
}

/// Built-in validator for the HAR 1.2 `request` object.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarSchemaValidator;

#[async_trait]
impl RequestValidator for HarSchemaValidator {
    async fn validate(&self, request: &RawRequest) -> Result<(), ValidationError> {
        validate_request(request)
    }
}

pub fn validate_request(request: &RawRequest) -> Result<(), ValidationError> {
    if request.method.is_empty() {
        return Err(ValidationError::MissingField("method"));
    }

    if !request.method.bytes().all(is_token_byte) {
        return Err(ValidationError::InvalidMethod(request.method.clone()));
    }

    if request.url.is_empty() {
        return Err(ValidationError::MissingField("url"));
    }

    let url = Url::parse(&request.url).map_err(|err| ValidationError::InvalidUrl {
        url: request.url.clone(),
        reason: err.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ValidationError::InvalidUrl {
            url: request.url.clone(),
            reason: "url must be hierarchical".to_string(),
        });
    }

    if request.http_version.trim().is_empty() {
        return Err(ValidationError::InvalidHttpVersion(
            request.http_version.clone(),
        ));
    }

    // other sections only require `name` to be a string
    check_names("headers", request.headers.iter().map(|p| &p.name))?;

    if request.post_data.mime_type.is_empty() {
        return Err(ValidationError::MissingField("postData.mimeType"));
    }

    Ok(())
}

fn check_names<'a>(
    section: &'static str,
    names: impl Iterator<Item = &'a String>,
) -> Result<(), ValidationError> {
    for (index, name) in names.enumerate() {
        if name.is_empty() {
            return Err(ValidationError::EmptyName { section, index });
        }
    }
    Ok(())
}

// RFC 9110 tchar
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}
