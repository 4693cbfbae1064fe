use std::fmt;

use super::types::{ClientInfo, GeneratorOptions};
use crate::request::Request;

/// Renders a canonical request as source code for one client library.
///
/// Generators are pure: the same request and options always produce the
/// same text, and they never touch the registry they are stored in.
pub trait ClientGenerator: Send + Sync {
    fn info(&self) -> &ClientInfo;

    fn generate(&self, request: &Request, options: &GeneratorOptions) -> String;
}

type GenerateFn = dyn Fn(&Request, &GeneratorOptions) -> String + Send + Sync;

/// Adapter registering a closure as a client.
pub struct FnClient {
    info: ClientInfo,
    func: Box<GenerateFn>,
}

impl FnClient {
    pub fn new<F>(info: ClientInfo, func: F) -> Self
    where
        F: Fn(&Request, &GeneratorOptions) -> String + Send + Sync + 'static,
    {
        Self {
            info,
            func: Box::new(func),
        }
    }
}

impl ClientGenerator for FnClient {
    fn info(&self) -> &ClientInfo {
        &self.info
    }

    fn generate(&self, request: &Request, options: &GeneratorOptions) -> String {
        (self.func)(request, options)
    }
}

impl fmt::Debug for FnClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnClient").field("info", &self.info).finish()
    }
}
