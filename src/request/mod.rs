//! Request canonicalization
//!
//! Turns a raw archive request into the [`Request`] model that every client
//! generator consumes. The pipeline defaults missing sections, validates,
//! then reconciles query, headers, cookies and body into one consistent view.
//!
//! ## Key Components
//!
//! - [`canonicalize`] - default, validate and normalize one request
//! - [`Request`] / [`PostData`] - the canonical model
//! - [`get_header`], [`get_header_name`], [`has_header`] - case-insensitive lookups
//! - [`reduce_pairs`] - later-wins fold of name/value pairs
//! - [`MultipartForm`] - in-memory multipart body builder

mod canonicalize;
mod headers;
mod multipart;
mod reducer;
mod types;

pub use canonicalize::{canonicalize, prepare, serialize_query};
pub use headers::{get_header, get_header_name, has_header};
pub use multipart::{DEFAULT_BOUNDARY, MultipartForm};
pub use reducer::reduce_pairs;
pub use types::{BodyKind, HeadersMap, PostData, QueryMap, Request};
