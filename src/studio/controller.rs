//! Lifecycle of the single parse request the studio allows at a time.
//!
//! A submission is split in two halves so the UI loop never blocks on the
//! network: [`ParseRequestController::begin`] validates input and moves to
//! `Pending`, the caller performs the call, and
//! [`ParseRequestController::complete`] applies the outcome. [`submit`] runs
//! both halves inline for callers that can simply await.
//!
//! [`submit`]: ParseRequestController::submit

use tracing::{error, info, warn};

use super::result::ParseResult;
use crate::client::{ParserService, ServiceError};

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to parse";
pub const CONNECTION_FAILED_MESSAGE: &str = "Failed to connect to parser service";

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Pending,
    Succeeded(ParseResult),
    Failed(String),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }
}

/// An accepted submission. Its id must be handed back to `complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub id: u64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Now `Pending`; exactly one call should be made for this ticket.
    Accepted(RequestTicket),
    /// A request is already in flight. Nothing changed.
    Busy,
    /// Input was empty after trimming. State is `Failed`, nothing was sent.
    Invalid,
}

pub struct ParseRequestController {
    state: RequestState,
    next_id: u64,
    in_flight: Option<u64>,
    last_text: Option<String>,
}

impl ParseRequestController {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            next_id: 1,
            in_flight: None,
            last_text: None,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    pub fn result(&self) -> Option<&ParseResult> {
        match &self.state {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Text of the most recent accepted submission.
    pub fn last_text(&self) -> Option<&str> {
        self.last_text.as_deref()
    }

    pub fn begin(&mut self, text: &str) -> SubmitOutcome {
        if self.state.is_pending() {
            warn!("Ignoring submit while a parse request is pending");
            return SubmitOutcome::Busy;
        }

        if text.trim().is_empty() {
            self.state = RequestState::Failed(EMPTY_INPUT_MESSAGE.to_string());
            return SubmitOutcome::Invalid;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.in_flight = Some(id);
        self.last_text = Some(text.to_string());
        self.state = RequestState::Pending;
        info!(request = id, "Parse request pending");

        SubmitOutcome::Accepted(RequestTicket {
            id,
            text: text.to_string(),
        })
    }

    /// Apply the outcome of ticket `id`. Returns false when the ticket is no
    /// longer current (cleared meanwhile) and the outcome was dropped.
    pub fn complete(&mut self, id: u64, outcome: Result<ParseResult, ServiceError>) -> bool {
        if self.in_flight != Some(id) {
            info!(request = id, "Dropping stale parse response");
            return false;
        }
        self.in_flight = None;

        self.state = match outcome {
            Ok(result) => {
                info!(
                    request = id,
                    tokens = result.tokens.len(),
                    products = result.products.len(),
                    "Parse succeeded"
                );
                RequestState::Succeeded(result)
            }
            Err(ServiceError::Rejected(message)) => {
                info!(request = id, "Parser rejected input: {}", message);
                RequestState::Failed(message)
            }
            Err(err) => {
                error!(request = id, "Parser service call failed: {}", err);
                RequestState::Failed(CONNECTION_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    /// Validate, call the service once, and land in a terminal state.
    pub async fn submit(&mut self, service: &dyn ParserService, text: &str) -> &RequestState {
        if let SubmitOutcome::Accepted(ticket) = self.begin(text) {
            let outcome = service.parse(&ticket.text).await;
            self.complete(ticket.id, outcome);
        }
        &self.state
    }

    /// Back to `Idle`. A response still in flight will be discarded.
    pub fn clear(&mut self) {
        self.state = RequestState::Idle;
        self.in_flight = None;
        self.last_text = None;
    }
}

impl Default for ParseRequestController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::studio::testing::{sample_result, StubService};

    #[test]
    fn test_initial_state_is_idle() {
        let controller = ParseRequestController::new();
        assert_eq!(controller.state(), &RequestState::Idle);
        assert!(controller.result().is_none());
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_begin_with_blank_input_fails_locally() {
        let mut controller = ParseRequestController::new();
        for input in ["", "   ", "\t\n "] {
            assert_eq!(controller.begin(input), SubmitOutcome::Invalid);
            assert_eq!(controller.error(), Some(EMPTY_INPUT_MESSAGE));
        }
    }

    #[test]
    fn test_begin_moves_to_pending() {
        let mut controller = ParseRequestController::new();
        let outcome = controller.begin("iPhone 15 Pro 256GB");
        assert!(matches!(outcome, SubmitOutcome::Accepted(ref t) if t.text == "iPhone 15 Pro 256GB"));
        assert!(controller.is_pending());
        assert_eq!(controller.last_text(), Some("iPhone 15 Pro 256GB"));
    }

    #[test]
    fn test_begin_while_pending_is_busy() {
        let mut controller = ParseRequestController::new();
        let first = controller.begin("first");
        assert!(matches!(first, SubmitOutcome::Accepted(_)));
        assert_eq!(controller.begin("second"), SubmitOutcome::Busy);
        assert_eq!(controller.begin(""), SubmitOutcome::Busy);
        assert!(controller.is_pending());
        assert_eq!(controller.last_text(), Some("first"));
    }

    #[test]
    fn test_complete_success() {
        let mut controller = ParseRequestController::new();
        let SubmitOutcome::Accepted(ticket) = controller.begin("honey") else {
            panic!("expected accepted submission");
        };
        assert!(controller.complete(ticket.id, Ok(sample_result())));
        assert_eq!(controller.result(), Some(&sample_result()));
    }

    #[test]
    fn test_complete_rejection_is_verbatim() {
        let mut controller = ParseRequestController::new();
        let SubmitOutcome::Accepted(ticket) = controller.begin("honey") else {
            panic!("expected accepted submission");
        };
        controller.complete(
            ticket.id,
            Err(ServiceError::Rejected("Unrecognized encoding".to_string())),
        );
        assert_eq!(
            controller.state(),
            &RequestState::Failed("Unrecognized encoding".to_string())
        );
    }

    #[test]
    fn test_complete_transport_error_is_generic() {
        let mut controller = ParseRequestController::new();
        let SubmitOutcome::Accepted(ticket) = controller.begin("honey") else {
            panic!("expected accepted submission");
        };
        controller.complete(
            ticket.id,
            Err(ServiceError::Timeout(std::time::Duration::from_secs(1))),
        );
        assert_eq!(controller.error(), Some(CONNECTION_FAILED_MESSAGE));
    }

    #[test]
    fn test_failure_replaces_previous_result() {
        let mut controller = ParseRequestController::new();
        let SubmitOutcome::Accepted(first) = controller.begin("a") else {
            panic!("expected accepted submission");
        };
        controller.complete(first.id, Ok(sample_result()));

        let SubmitOutcome::Accepted(second) = controller.begin("b") else {
            panic!("expected accepted submission");
        };
        assert!(controller.result().is_none());
        controller.complete(second.id, Err(ServiceError::Rejected("nope".into())));
        assert!(controller.result().is_none());
        assert_eq!(controller.error(), Some("nope"));
    }

    #[test]
    fn test_clear_while_pending_drops_late_response() {
        let mut controller = ParseRequestController::new();
        let SubmitOutcome::Accepted(ticket) = controller.begin("honey") else {
            panic!("expected accepted submission");
        };
        controller.clear();
        assert_eq!(controller.state(), &RequestState::Idle);
        assert!(controller.last_text().is_none());

        assert!(!controller.complete(ticket.id, Ok(sample_result())));
        assert_eq!(controller.state(), &RequestState::Idle);
    }

    #[test]
    fn test_ticket_ids_increase() {
        let mut controller = ParseRequestController::new();
        let SubmitOutcome::Accepted(a) = controller.begin("a") else {
            panic!("expected accepted submission");
        };
        controller.complete(a.id, Ok(sample_result()));
        let SubmitOutcome::Accepted(b) = controller.begin("b") else {
            panic!("expected accepted submission");
        };
        assert!(b.id > a.id);
        assert!(!controller.complete(a.id, Ok(sample_result())));
        assert!(controller.is_pending());
    }

    #[tokio::test]
    async fn test_submit_blank_never_calls_service() {
        let service = StubService::succeeding(sample_result());
        let mut controller = ParseRequestController::new();
        controller.submit(&service, "   ").await;
        assert_eq!(service.parse_calls(), 0);
        assert_eq!(controller.error(), Some(EMPTY_INPUT_MESSAGE));
    }

    #[tokio::test]
    async fn test_submit_calls_service_once() {
        let service = StubService::succeeding(sample_result());
        let mut controller = ParseRequestController::new();
        let state = controller.submit(&service, "iPhone").await.clone();
        assert_eq!(service.parse_calls(), 1);
        assert_eq!(state, RequestState::Succeeded(sample_result()));
        assert_eq!(service.last_text().as_deref(), Some("iPhone"));
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_recovers() {
        let service = StubService::failing_transport();
        let mut controller = ParseRequestController::new();
        controller.submit(&service, "iPhone").await;
        assert_eq!(controller.error(), Some(CONNECTION_FAILED_MESSAGE));

        let service = StubService::succeeding(sample_result());
        controller.submit(&service, "iPhone").await;
        assert!(controller.result().is_some());
    }
}
