//! HTTP boundary to the external parser service.
//!
//! The rest of the crate talks to [`ParserService`]; tests swap in their own
//! implementation.

pub mod config;
pub mod error;
pub mod service;

pub use config::ServiceConfig;
pub use error::{Result, ServiceError};
pub use service::{shared_service, HttpParserService, ParserService};
