//! Built-in client generators.

mod curl;
mod fetch;
mod http1;
mod requests;
mod wget;

pub use curl::Curl;
pub use fetch::JsFetch;
pub use http1::Http1;
pub use requests::PythonRequests;
pub use wget::Wget;
