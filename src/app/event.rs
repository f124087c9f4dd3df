use crate::client::ServiceError;
use crate::studio::{ExampleCatalog, ParseResult, ParserStats};

/// User intents
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    InsertChar(char),
    DeleteBackward,
    /// Replace the whole input buffer
    InputChanged(String),
    PasteClipboard,
    Submit,
    Clear,
    ToggleExamples,
    SelectNextExample,
    SelectPreviousExample,
    PickSelectedExample,
    PickExample(String),
    ScrollResultsUp,
    ScrollResultsDown,
    Quit,
    None,
}

/// Completions of background calls, applied on the UI loop
#[derive(Debug)]
pub enum ServiceMessage {
    Parsed {
        id: u64,
        outcome: Result<ParseResult, ServiceError>,
    },
    ExamplesLoaded(ExampleCatalog),
    StatsLoaded(Option<ParserStats>),
}
