//! Parser Studio core: request lifecycle, result shaping and example data.
//!
//! ## Module Structure
//!
//! - **token.rs**: `Token` and the open-ended `TokenKind`
//! - **result.rs**: products, parse results and the wire envelope
//! - **controller.rs**: the one-request-at-a-time state machine
//! - **presentation.rs**: confidence bands and render-ready views
//! - **catalog.rs**: example inputs fetched at startup

pub mod catalog;
pub mod controller;
pub mod presentation;
pub mod result;
pub mod token;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::ExampleCatalog;
pub use controller::{ParseRequestController, RequestState, RequestTicket, SubmitOutcome};
pub use presentation::{
    classify, confidence_band, summarize, ConfidenceBand, DisplayCategory, ProductView,
    ResultSummary, TokenView,
};
pub use result::{ExampleCategory, ParseResult, ParserStats, Product};
pub use token::{Token, TokenKind};
