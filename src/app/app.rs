use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

use super::event::{AppEvent, ServiceMessage};
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::client::ParserService;
use crate::input::clipboard;
use crate::studio::{
    summarize, ExampleCatalog, ParseRequestController, ParserStats, RequestState, ResultSummary,
    SubmitOutcome,
};

/// Rows moved per results scroll step.
pub const RESULTS_SCROLL_STEP: u16 = 5;

/// The Parser Studio workspace.
///
/// Owns the input buffer, the request controller and the example catalog.
/// Network calls are spawned onto the tokio runtime and report back through
/// `messages`; [`App::handle_message`] applies them on the UI loop.
pub struct App {
    mode: AppMode,
    input: String,
    controller: ParseRequestController,
    summary: Option<ResultSummary>,
    results_scroll: u16,
    catalog: ExampleCatalog,
    selected_example: usize,
    stats: Option<ParserStats>,
    show_stats: bool,
    service: Arc<dyn ParserService>,
    messages: UnboundedSender<ServiceMessage>,
}

impl App {
    pub fn new(service: Arc<dyn ParserService>, messages: UnboundedSender<ServiceMessage>) -> Self {
        Self {
            mode: AppMode::Editing,
            input: String::new(),
            controller: ParseRequestController::new(),
            summary: None,
            results_scroll: 0,
            catalog: ExampleCatalog::default(),
            selected_example: 0,
            stats: None,
            show_stats: true,
            service,
            messages,
        }
    }

    pub fn with_stats_visible(mut self, show_stats: bool) -> Self {
        self.show_stats = show_stats;
        self
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn request_state(&self) -> &RequestState {
        self.controller.state()
    }

    pub fn summary(&self) -> Option<&ResultSummary> {
        self.summary.as_ref()
    }

    pub fn results_scroll(&self) -> u16 {
        self.results_scroll
    }

    /// Pull the results offset back to what the last frame could show.
    pub fn clamp_results_scroll(&mut self, max: u16) {
        self.results_scroll = self.results_scroll.min(max);
    }

    pub fn catalog(&self) -> &ExampleCatalog {
        &self.catalog
    }

    pub fn selected_example(&self) -> usize {
        self.selected_example
    }

    /// Kick off the one-time examples and stats fetches.
    pub fn load_reference_data(&self) {
        let service = Arc::clone(&self.service);
        let tx = self.messages.clone();
        tokio::spawn(async move {
            let catalog = ExampleCatalog::load(service.as_ref()).await;
            let _ = tx.send(ServiceMessage::ExamplesLoaded(catalog));
        });

        if self.show_stats {
            let service = Arc::clone(&self.service);
            let tx = self.messages.clone();
            tokio::spawn(async move {
                let stats = match service.stats().await {
                    Ok(stats) => Some(stats),
                    Err(err) => {
                        warn!("Failed to fetch parser stats: {}", err);
                        None
                    }
                };
                let _ = tx.send(ServiceMessage::StatsLoaded(stats));
            });
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::InsertChar(c) => self.input.push(c),
            AppEvent::DeleteBackward => self.delete_backward(),
            AppEvent::InputChanged(text) => self.input = text,
            AppEvent::PasteClipboard => match clipboard::read_text() {
                Ok(text) => self.input.push_str(&text),
                Err(err) => warn!("Paste failed: {}", err),
            },
            AppEvent::Submit => self.submit(),
            AppEvent::Clear => self.clear(),
            AppEvent::ToggleExamples => self.toggle_examples(),
            AppEvent::SelectNextExample => {
                let len = self.catalog.len();
                if len > 0 {
                    self.selected_example = (self.selected_example + 1) % len;
                }
            }
            AppEvent::SelectPreviousExample => {
                let len = self.catalog.len();
                if len > 0 {
                    self.selected_example = (self.selected_example + len - 1) % len;
                }
            }
            AppEvent::PickSelectedExample => {
                if let Some(example) = self.catalog.get(self.selected_example) {
                    let example = ExampleCatalog::select(example);
                    self.pick_example(example);
                }
            }
            AppEvent::PickExample(example) => self.pick_example(example),
            AppEvent::ScrollResultsUp => {
                self.results_scroll = self.results_scroll.saturating_sub(RESULTS_SCROLL_STEP);
            }
            AppEvent::ScrollResultsDown => {
                if self.summary.is_some() {
                    self.results_scroll = self.results_scroll.saturating_add(RESULTS_SCROLL_STEP);
                }
            }
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::None => {}
        }
    }

    pub fn handle_message(&mut self, message: ServiceMessage) {
        match message {
            ServiceMessage::Parsed { id, outcome } => {
                if self.controller.complete(id, outcome) {
                    self.refresh_summary();
                }
            }
            ServiceMessage::ExamplesLoaded(catalog) => {
                self.catalog = catalog;
                self.selected_example = 0;
            }
            ServiceMessage::StatsLoaded(stats) => self.stats = stats,
        }
    }

    fn delete_backward(&mut self) {
        if let Some((idx, _)) = self.input.grapheme_indices(true).next_back() {
            self.input.truncate(idx);
        }
    }

    fn submit(&mut self) {
        match self.controller.begin(&self.input) {
            SubmitOutcome::Accepted(ticket) => {
                let service = Arc::clone(&self.service);
                let tx = self.messages.clone();
                tokio::spawn(async move {
                    let outcome = service.parse(&ticket.text).await;
                    let _ = tx.send(ServiceMessage::Parsed {
                        id: ticket.id,
                        outcome,
                    });
                });
            }
            SubmitOutcome::Busy => debug!("Submit ignored, request in flight"),
            SubmitOutcome::Invalid => {}
        }
        self.refresh_summary();
    }

    fn clear(&mut self) {
        self.input.clear();
        self.controller.clear();
        self.refresh_summary();
    }

    fn toggle_examples(&mut self) {
        self.mode = match self.mode {
            AppMode::Editing => AppMode::Examples,
            AppMode::Examples => AppMode::Editing,
            AppMode::Quit => AppMode::Quit,
        };
    }

    fn pick_example(&mut self, example: String) {
        self.input = example;
        if self.mode == AppMode::Examples {
            self.mode = AppMode::Editing;
        }
    }

    fn refresh_summary(&mut self) {
        let summary = self.controller.result().map(summarize);
        if summary != self.summary {
            self.results_scroll = 0;
        }
        self.summary = summary;
    }

    pub fn get_render_state(&self) -> RenderState {
        let mut state = RenderState::empty(self.mode);
        state.input = self.input.clone();
        state.pending = self.controller.is_pending();
        state.error = self.controller.error().map(str::to_string);
        state.summary = self.summary.clone();
        state.results_scroll = self.results_scroll;
        if self.mode == AppMode::Examples {
            state.examples = self.catalog.categories().to_vec();
        }
        state.selected_example = self.selected_example;
        if self.show_stats {
            state.stats = self.stats.clone();
        }
        state
    }
}
