//! In-memory `ParserService` for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::result::{ExampleCategory, ParseResult, ParserStats, Product};
use super::token::{Token, TokenKind};
use crate::client::{ParserService, Result, ServiceError};

pub fn sample_result() -> ParseResult {
    let tokens = vec![
        Token::new("iPhone", TokenKind::Brand, 0.92),
        Token::new("15 Pro", TokenKind::Model, 0.88).at(1),
        Token::new("256GB", TokenKind::Measurement, 0.95).at(2),
    ];
    ParseResult {
        products: vec![Product::new("15 Pro 256GB iPhone", tokens.clone())
            .with_priority_tokens(vec!["15 Pro".to_string(), "256GB".to_string()])],
        tokens,
        confidence: 0.91,
        parser_used: "generic".to_string(),
        raw_text: "iPhone 15 Pro 256GB".to_string(),
    }
}

pub fn sample_examples() -> Vec<ExampleCategory> {
    vec![
        ExampleCategory {
            category: "Electronics".to_string(),
            inputs: vec![
                "iPhone 15 Pro 256GB".to_string(),
                "Samsung 65 inch OLED TV".to_string(),
            ],
        },
        ExampleCategory {
            category: "Fashion".to_string(),
            inputs: vec!["red dress size 8".to_string()],
        },
    ]
}

enum Reply {
    Parsed(ParseResult),
    Rejected(String),
    Transport,
}

pub struct StubService {
    reply: Reply,
    examples: Option<Vec<ExampleCategory>>,
    parse_calls: AtomicUsize,
    example_calls: AtomicUsize,
    last_text: Mutex<Option<String>>,
}

impl StubService {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            examples: Some(sample_examples()),
            parse_calls: AtomicUsize::new(0),
            example_calls: AtomicUsize::new(0),
            last_text: Mutex::new(None),
        }
    }

    pub fn succeeding(result: ParseResult) -> Self {
        Self::with_reply(Reply::Parsed(result))
    }

    pub fn rejecting(message: &str) -> Self {
        Self::with_reply(Reply::Rejected(message.to_string()))
    }

    pub fn failing_transport() -> Self {
        let mut stub = Self::with_reply(Reply::Transport);
        stub.examples = None;
        stub
    }

    pub fn parse_calls(&self) -> usize {
        self.parse_calls.load(Ordering::SeqCst)
    }

    pub fn example_calls(&self) -> usize {
        self.example_calls.load(Ordering::SeqCst)
    }

    pub fn last_text(&self) -> Option<String> {
        self.last_text.lock().unwrap().clone()
    }
}

#[async_trait]
impl ParserService for StubService {
    async fn parse(&self, text: &str) -> Result<ParseResult> {
        self.parse_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(text.to_string());
        match &self.reply {
            Reply::Parsed(result) => Ok(result.clone()),
            Reply::Rejected(message) => Err(ServiceError::Rejected(message.clone())),
            Reply::Transport => Err(ServiceError::Timeout(Duration::from_secs(1))),
        }
    }

    async fn examples(&self) -> Result<Vec<ExampleCategory>> {
        self.example_calls.fetch_add(1, Ordering::SeqCst);
        self.examples
            .clone()
            .ok_or(ServiceError::Timeout(Duration::from_secs(1)))
    }

    async fn stats(&self) -> Result<ParserStats> {
        Err(ServiceError::Timeout(Duration::from_secs(1)))
    }
}
