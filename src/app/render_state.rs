use crate::app::mode::AppMode;
use crate::studio::{ExampleCategory, ParserStats, ResultSummary};

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub input: String,
    pub pending: bool,
    pub error: Option<String>,
    pub summary: Option<ResultSummary>,
    /// First results row on screen
    pub results_scroll: u16,
    /// Empty unless the examples panel is open
    pub examples: Vec<ExampleCategory>,
    pub selected_example: usize,
    pub stats: Option<ParserStats>,
}

impl RenderState {
    /// Create an empty render state for a fresh workspace
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            input: String::new(),
            pending: false,
            error: None,
            summary: None,
            results_scroll: 0,
            examples: vec![],
            selected_example: 0,
            stats: None,
        }
    }

    pub fn examples_visible(&self) -> bool {
        self.mode == AppMode::Examples
    }
}
