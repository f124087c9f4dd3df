//! Parser Studio: an interactive terminal workspace for exercising the
//! product-text parser service and inspecting the tokens it returns.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod studio;
pub mod ui;
