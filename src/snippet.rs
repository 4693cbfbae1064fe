//! Batch construction and dispatch.
//!
//! [`HttpSnippet`] accepts either a whole archive (`{"log": {"entries": [...]}}`)
//! or a single request object, canonicalizes every request in input order and
//! hands them to the client generator picked by [`HttpSnippet::convert`].

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::har::{Entry, HarRequest, HarSchemaValidator, RequestValidator, ValidationError};
use crate::request::{Request, canonicalize};
use crate::targets::{GeneratorOptions, TargetRegistry};

#[derive(Debug, Error)]
pub enum SnippetError {
    #[error("input must be a HAR archive or a request object")]
    UnsupportedInput,
    #[error("entry {index} failed validation: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// Output of [`HttpSnippet::convert`]: a bare snippet for a single request,
/// otherwise one snippet per request in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    Single(String),
    Many(Vec<String>),
}

impl Conversion {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Conversion::Single(snippet) => vec![snippet],
            Conversion::Many(snippets) => snippets,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpSnippet {
    requests: Vec<Request>,
}

impl HttpSnippet {
    /// Build a batch using the built-in [`HarSchemaValidator`].
    pub async fn new(input: Value) -> Result<Self, SnippetError> {
        Self::with_validator(input, &HarSchemaValidator).await
    }

    /// Build a batch, awaiting `validator` for each entry in input order.
    /// The first failing entry aborts the batch.
    pub async fn with_validator(
        input: Value,
        validator: &dyn RequestValidator,
    ) -> Result<Self, SnippetError> {
        let entries = split_entries(input)?;
        let mut requests = Vec::with_capacity(entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            let har_request = entry.map_err(|source| SnippetError::InvalidEntry { index, source })?;

            let request = canonicalize(har_request, validator)
                .await
                .map_err(|source| SnippetError::InvalidEntry { index, source })?;

            debug!(index, url = %request.full_url, "entry accepted");
            requests.push(request);
        }

        info!(count = requests.len(), "canonicalized requests");
        Ok(Self { requests })
    }

    pub fn from_requests(requests: Vec<Request>) -> Self {
        Self { requests }
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    /// Render every request with the resolved client.
    ///
    /// The client is the one named by `client` when the target has it,
    /// otherwise the target's default. Returns `None` for an unknown target.
    pub fn convert(
        &self,
        registry: &TargetRegistry,
        target: &str,
        client: Option<&str>,
        options: Option<&GeneratorOptions>,
    ) -> Option<Conversion> {
        let generator = registry.resolve(target, client)?;
        let default_options = GeneratorOptions::default();
        let options = options.unwrap_or(&default_options);

        debug!(
            target_key = %target,
            client = %generator.info().key,
            requests = self.requests.len(),
            "converting"
        );

        let mut snippets: Vec<String> = self
            .requests
            .iter()
            .map(|request| generator.generate(request, options))
            .collect();

        if snippets.len() == 1 {
            snippets.pop().map(Conversion::Single)
        } else {
            Some(Conversion::Many(snippets))
        }
    }
}

/// Pull request records out of either input shape. Entries are decoded
/// individually so a malformed one is reported with its index.
fn split_entries(input: Value) -> Result<Vec<Result<HarRequest, ValidationError>>, SnippetError> {
    let entries = match input {
        Value::Object(mut root) if is_archive(&root) => match root.remove("log") {
            Some(Value::Object(mut log)) => match log.remove("entries") {
                Some(Value::Array(entries)) => entries,
                _ => return Err(SnippetError::UnsupportedInput),
            },
            _ => return Err(SnippetError::UnsupportedInput),
        },
        Value::Object(request) => {
            return Ok(vec![
                serde_json::from_value(Value::Object(request)).map_err(Into::into),
            ]);
        }
        _ => return Err(SnippetError::UnsupportedInput),
    };

    Ok(entries
        .into_iter()
        .map(|entry| {
            serde_json::from_value::<Entry>(entry)
                .map(|entry| entry.request)
                .map_err(Into::into)
        })
        .collect())
}

fn is_archive(root: &serde_json::Map<String, Value>) -> bool {
    root.get("log")
        .and_then(|log| log.get("entries"))
        .is_some_and(Value::is_array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    use crate::har::RawRequest;

    #[tokio::test]
    async fn test_single_request_input() {
        let snippet = HttpSnippet::new(json!({"method": "GET", "url": "http://x.test/"}))
            .await
            .unwrap();
        assert_eq!(snippet.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_entry_reports_index() {
        let input = json!({
            "log": {
                "entries": [
                    { "request": { "method": "GET", "url": "http://a.test/" } },
                    { "response": {} }
                ]
            }
        });

        let err = HttpSnippet::new(input).await.unwrap_err();
        assert!(matches!(
            err,
            SnippetError::InvalidEntry {
                index: 1,
                source: ValidationError::Malformed(_)
            }
        ));
    }

    #[tokio::test]
    async fn test_rejects_non_object_input() {
        let err = HttpSnippet::new(json!([1, 2])).await.unwrap_err();
        assert!(matches!(err, SnippetError::UnsupportedInput));
    }

    struct RecordingValidator {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RequestValidator for RecordingValidator {
        async fn validate(&self, request: &RawRequest) -> Result<(), ValidationError> {
            tokio::task::yield_now().await;
            self.seen.lock().unwrap().push(request.url.clone());
            if request.url.contains("bad") {
                return Err(ValidationError::MissingField("url"));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_validation_is_sequential_and_stops_at_first_failure() {
        let validator = RecordingValidator {
            seen: Mutex::new(Vec::new()),
        };
        let input = json!({
            "log": {
                "entries": [
                    { "request": { "method": "GET", "url": "http://a.test/" } },
                    { "request": { "method": "GET", "url": "http://bad.test/" } },
                    { "request": { "method": "GET", "url": "http://c.test/" } }
                ]
            }
        });

        let err = HttpSnippet::with_validator(input, &validator)
            .await
            .unwrap_err();

        assert!(matches!(err, SnippetError::InvalidEntry { index: 1, .. }));
        assert_eq!(
            *validator.seen.lock().unwrap(),
            vec!["http://a.test/", "http://bad.test/"]
        );
    }
}
