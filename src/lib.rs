//! Per-request user-agent variables.
//!
//! A [`UaModule`] is built once at startup from a uap-core `regexes.yaml`
//! ruleset and shared by all requests. Each [`Request`] resolves any of the
//! 13 [`Variable`]s on demand; the device, OS and browser categories are each
//! parsed at most once per request and memoized in a
//! [`RequestAttributeCache`].

mod cache;
mod catalog;
mod config;
mod db;
mod error;
mod helpers;
mod module;
mod parser;
mod parser_data;
mod request;
mod substitution;
mod types;
mod ua_parser;

pub use cache::RequestAttributeCache;
pub use catalog::Catalog;
pub use config::{Config, DEFAULT_REGEXES_PATH, DEFAULT_VARIABLE_PREFIX};
pub use error::{Error, Result};
pub use module::UaModule;
pub use request::{Request, VariableValue};
pub use types::*;
pub use ua_parser::{Parse, UaParser, UNKNOWN_FAMILY};
