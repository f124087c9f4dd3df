use serde::{Deserialize, Serialize};
use std::fmt;

/// Token type as reported by the parser service.
///
/// Any label the service sends that is not one of the known kinds is kept
/// verbatim in `Other`, so deserialization never fails on the type field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TokenKind {
    ExactPhrase,
    Measurement,
    Model,
    Brand,
    Number,
    Keyword,
    Other(String),
}

impl TokenKind {
    pub fn as_str(&self) -> &str {
        match self {
            TokenKind::ExactPhrase => "exact_phrase",
            TokenKind::Measurement => "measurement",
            TokenKind::Model => "model",
            TokenKind::Brand => "brand",
            TokenKind::Number => "number",
            TokenKind::Keyword => "keyword",
            TokenKind::Other(raw) => raw,
        }
    }
}

impl From<&str> for TokenKind {
    fn from(label: &str) -> Self {
        match label {
            "exact_phrase" => TokenKind::ExactPhrase,
            "measurement" => TokenKind::Measurement,
            "model" => TokenKind::Model,
            "brand" => TokenKind::Brand,
            "number" => TokenKind::Number,
            "keyword" => TokenKind::Keyword,
            other => TokenKind::Other(other.to_string()),
        }
    }
}

impl From<String> for TokenKind {
    fn from(label: String) -> Self {
        TokenKind::from(label.as_str())
    }
}

impl From<TokenKind> for String {
    fn from(kind: TokenKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single classified fragment of the parsed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub confidence: f64,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub context: Option<String>,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind, confidence: f64) -> Self {
        Self {
            value: value.into(),
            kind,
            confidence,
            position: 0,
            context: None,
        }
    }

    pub fn at(mut self, position: u32) -> Self {
        self.position = position;
        self
    }
}
