use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::debug;
use url::Url;

use super::headers::{get_header_name, has_header};
use super::multipart::{DEFAULT_BOUNDARY, MultipartForm};
use super::reducer::reduce_pairs;
use super::types::{BodyKind, HeadersMap, PostData, QueryMap, Request};
use crate::har::{HarRequest, Pair, RawPostData, RawRequest, RequestValidator, ValidationError};

/// Default, validate, then normalize a single archive request.
pub async fn canonicalize(
    request: HarRequest,
    validator: &dyn RequestValidator,
) -> Result<Request, ValidationError> {
    let raw = RawRequest::from(request);
    validator.validate(&raw).await?;
    prepare(raw)
}

/// Derive the canonical model from an already validated request.
pub fn prepare(raw: RawRequest) -> Result<Request, ValidationError> {
    let RawRequest {
        method,
        url,
        http_version,
        query_string,
        headers,
        cookies,
        post_data,
    } = raw;

    let query_obj = reduce_pairs(query_string.iter().map(|p| (&*p.name, &*p.value)));
    let mut headers_obj = build_headers(&headers, &http_version);
    let cookies_obj = build_cookies(&cookies);

    let mut all_headers = HeadersMap::new();
    if !cookies.is_empty() {
        let cookie = cookies
            .iter()
            .map(|c| format!("{}={}", encode_component(&c.name), encode_component(&c.value)))
            .collect::<Vec<_>>()
            .join("; ");
        all_headers.insert("cookie".to_string(), cookie);
    }

    let post_data = normalize_body(post_data, &mut headers_obj);

    // an explicit cookie header replaces the synthesized one whatever its casing
    if has_header(&headers_obj, "cookie") {
        all_headers.shift_remove("cookie");
    }
    all_headers.extend(headers_obj.iter().map(|(k, v)| (k.clone(), v.clone())));

    let mut parsed = Url::parse(&url).map_err(|err| ValidationError::InvalidUrl {
        url: url.clone(),
        reason: err.to_string(),
    })?;

    let mut query_obj = query_obj;
    for (name, value) in parsed.query_pairs() {
        query_obj.insert(name.into_owned(), value.into_owned());
    }

    parsed.set_query(None);
    let url = parsed.to_string();

    let search = serialize_query(&query_obj);
    if !search.is_empty() {
        parsed.set_query(Some(&search));
    }
    let full_url = parsed.to_string();

    let path = match parsed.query() {
        Some(query) => format!("{}?{}", parsed.path(), query),
        None => parsed.path().to_string(),
    };
    let host = match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };

    debug!(%method, %full_url, mime_type = %post_data.mime_type, "canonicalized request");

    Ok(Request {
        method,
        url,
        full_url,
        http_version,
        query_string,
        headers,
        cookies,
        post_data,
        query_obj,
        headers_obj,
        cookies_obj,
        all_headers,
        path,
        host,
    })
}

/// Characters left as-is when encoding a URL component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `name=value` pairs joined with `&`, each side percent-encoded as a URL
/// component (a space becomes `%20`).
pub fn serialize_query(query: &QueryMap) -> String {
    query
        .iter()
        .map(|(name, value)| format!("{}={}", encode_component(name), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

fn lowercases_header_names(http_version: &str) -> bool {
    let version = http_version.to_ascii_uppercase();
    version.starts_with("HTTP/2") || version.starts_with("HTTP/3")
}

fn build_headers(headers: &[Pair], http_version: &str) -> HeadersMap {
    let lowercase = lowercases_header_names(http_version);
    headers.iter().fold(HeadersMap::new(), |mut acc, header| {
        let name = if lowercase {
            header.name.to_ascii_lowercase()
        } else {
            header.name.clone()
        };
        acc.insert(name, header.value.clone());
        acc
    })
}

// first occurrence wins
fn build_cookies(cookies: &[Pair]) -> IndexMap<String, String> {
    cookies.iter().fold(IndexMap::new(), |mut acc, cookie| {
        acc.entry(cookie.name.clone())
            .or_insert_with(|| cookie.value.clone());
        acc
    })
}

fn normalize_body(post_data: RawPostData, headers_obj: &mut HeadersMap) -> PostData {
    let RawPostData {
        mime_type,
        text,
        params,
    } = post_data;

    let mut body = PostData {
        mime_type,
        text,
        params,
        json_obj: None,
        params_obj: None,
        boundary: None,
    };

    match BodyKind::classify(&body.mime_type) {
        BodyKind::Multipart => {
            body.mime_type = mime::MULTIPART_FORM_DATA.essence_str().to_string();
            body.text.clear();

            if !body.params.is_empty() {
                let mut form = MultipartForm::new(DEFAULT_BOUNDARY);
                for param in &body.params {
                    let value = param.value.clone().unwrap_or_default();
                    let content_type = param.content_type.as_deref().filter(|ct| !ct.is_empty());
                    match (&param.file_name, content_type) {
                        (Some(file_name), _) => {
                            form.append_file(&param.name, value, file_name, content_type)
                        }
                        (None, Some(content_type)) => {
                            form.append_typed_field(&param.name, value, content_type)
                        }
                        (None, None) => form.append_field(&param.name, value),
                    }
                }

                body.text = form.render();
                body.boundary = Some(form.boundary().to_string());

                let header_name = get_header_name(headers_obj, "content-type")
                    .unwrap_or("content-type")
                    .to_string();
                headers_obj.insert(
                    header_name,
                    format!("multipart/form-data; boundary={}", form.boundary()),
                );
            }
        }
        BodyKind::UrlEncoded => {
            if body.params.is_empty() {
                body.text.clear();
            } else {
                let params_obj = reduce_pairs(body.params.iter().map(|p| {
                    (p.name.as_str(), p.value.as_deref().unwrap_or_default())
                }));
                body.text = serialize_query(&params_obj);
                body.params_obj = Some(params_obj);
            }
        }
        BodyKind::Json => {
            body.mime_type = mime::APPLICATION_JSON.essence_str().to_string();
            if !body.text.is_empty() {
                match serde_json::from_str(&body.text) {
                    Ok(value) => body.json_obj = Some(value),
                    Err(err) => {
                        debug!(error = %err, "body is not valid JSON, treating as text/plain");
                        body.mime_type = mime::TEXT_PLAIN.essence_str().to_string();
                    }
                }
            }
        }
        BodyKind::Other => {}
    }

    body
}
