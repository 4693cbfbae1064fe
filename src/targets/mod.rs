//! Targets and client generators
//!
//! A target is a family of output (a language or tool); each target owns one
//! or more clients that render a canonical [`crate::request::Request`] as
//! source text.
//!
//! ## Key Components
//!
//! - [`TargetRegistry`] - registered targets, seeded with [`BuiltinTarget`]s
//! - [`ClientGenerator`] - trait implemented by every client
//! - [`FnClient`] - registers a closure as a client
//! - [`GeneratorOptions`] - indent plus client-specific switches
//! - [`CodeBuilder`] - line accumulator used by generators
//!
//! ## Example
//!
//! ```rust,ignore
//! use harsnip::targets::{ClientInfo, FnClient, Target, TargetInfo, TargetRegistry};
//!
//! let mut registry = TargetRegistry::with_defaults();
//! registry.add_target(
//!     Target::new(TargetInfo::new("echo", "Echo", ".txt", "method"))
//!         .with_client(FnClient::new(ClientInfo::new("method", "Method"), |req, _| req.method.clone())),
//! )?;
//! ```

mod builtin;
pub mod clients;
mod code_builder;
mod registry;
pub mod shell;
mod traits;
mod types;

pub use builtin::BuiltinTarget;
pub use code_builder::CodeBuilder;
pub use registry::{RESERVED_CLIENT_KEYS, RegistrationError, Target, TargetRegistry};
pub use traits::{ClientGenerator, FnClient};
pub use types::{ClientInfo, GeneratorOptions, TargetInfo, TargetSummary};
