pub mod config;
pub mod har;
pub mod humanize;
pub mod observability;
pub mod request;
pub mod snippet;
pub mod targets;

pub use har::{HarRequest, RequestValidator, ValidationError};
pub use request::Request;
pub use snippet::{Conversion, HttpSnippet, SnippetError};
pub use targets::{GeneratorOptions, RegistrationError, TargetRegistry};
