//! Response payloads of the parser service.
//!
//! Bodies are deserialized into these types at the HTTP boundary and then run
//! through [`ParseResult::validate`], so nothing past the client ever sees a
//! half-formed result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::token::Token;

/// One product extracted from the input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub search_query: String,
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub raw_text: String,
    pub token_count: usize,
    #[serde(default)]
    pub priority_tokens: Vec<String>,
}

impl Product {
    pub fn new(search_query: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            search_query: search_query.into(),
            token_count: tokens.len(),
            tokens,
            raw_text: String::new(),
            priority_tokens: Vec::new(),
        }
    }

    pub fn with_priority_tokens(mut self, priority_tokens: Vec<String>) -> Self {
        self.priority_tokens = priority_tokens;
        self
    }
}

/// Full result of a single parse call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub tokens: Vec<Token>,
    pub confidence: f64,
    pub parser_used: String,
    #[serde(default)]
    pub raw_text: String,
}

/// Ways a decoded body can still be unusable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("confidence {value} of {field} is outside [0, 1]")]
    ConfidenceOutOfRange { field: String, value: f64 },

    #[error("product {index} reports token_count {reported} but carries {actual} tokens")]
    TokenCountMismatch {
        index: usize,
        reported: usize,
        actual: usize,
    },

    #[error("response reported success without a result")]
    MissingResult,
}

fn check_confidence(field: impl FnOnce() -> String, value: f64) -> Result<(), ShapeError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ShapeError::ConfidenceOutOfRange {
            field: field(),
            value,
        })
    }
}

impl ParseResult {
    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_confidence(|| "result".to_string(), self.confidence)?;

        for (i, token) in self.tokens.iter().enumerate() {
            check_confidence(|| format!("token {}", i), token.confidence)?;
        }

        for (index, product) in self.products.iter().enumerate() {
            if product.token_count != product.tokens.len() {
                return Err(ShapeError::TokenCountMismatch {
                    index,
                    reported: product.token_count,
                    actual: product.tokens.len(),
                });
            }
            for (i, token) in product.tokens.iter().enumerate() {
                check_confidence(
                    || format!("product {} token {}", index, i),
                    token.confidence,
                )?;
            }
        }

        Ok(())
    }
}

/// Body of `POST /api/admin/parser/test`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseEnvelope {
    pub success: bool,
    #[serde(default)]
    pub result: Option<ParseResult>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What a well-formed envelope says about the parse.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseReply {
    Parsed(ParseResult),
    Rejected(String),
}

/// Shown when the service rejects input without saying why.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Failed to parse text";

impl ParseEnvelope {
    pub fn into_reply(self) -> Result<ParseReply, ShapeError> {
        if self.success {
            let result = self.result.ok_or(ShapeError::MissingResult)?;
            result.validate()?;
            Ok(ParseReply::Parsed(result))
        } else {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
            Ok(ParseReply::Rejected(message))
        }
    }
}

/// A named group of sample inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleCategory {
    pub category: String,
    pub inputs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCount {
    pub pattern: String,
    pub count: u64,
}

/// Body of `GET /api/admin/parser/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserStats {
    pub total_parses_today: u64,
    pub average_confidence: f64,
    pub average_parse_time_ms: f64,
    pub cache_hit_rate: f64,
    #[serde(default)]
    pub top_patterns: Vec<PatternCount>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::studio::token::TokenKind;

    fn sample_result() -> ParseResult {
        let tokens = vec![
            Token::new("iPhone", TokenKind::Brand, 0.92),
            Token::new("15 Pro", TokenKind::Model, 0.88).at(1),
        ];
        ParseResult {
            products: vec![Product::new("15 Pro iPhone", tokens.clone())],
            tokens,
            confidence: 0.9,
            parser_used: "generic".to_string(),
            raw_text: "iPhone 15 Pro".to_string(),
        }
    }

    #[test]
    fn test_valid_result_passes() {
        assert_eq!(sample_result().validate(), Ok(()));
    }

    #[test]
    fn test_result_confidence_out_of_range() {
        let mut result = sample_result();
        result.confidence = 1.5;
        assert!(matches!(
            result.validate(),
            Err(ShapeError::ConfidenceOutOfRange { .. })
        ));
    }

    #[test]
    fn test_nan_confidence_rejected() {
        let mut result = sample_result();
        result.tokens[0].confidence = f64::NAN;
        assert!(result.validate().is_err());
    }

    #[test]
    fn test_token_count_mismatch() {
        let mut result = sample_result();
        result.products[0].token_count = 7;
        assert_eq!(
            result.validate(),
            Err(ShapeError::TokenCountMismatch {
                index: 0,
                reported: 7,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_envelope_success_without_result() {
        let envelope = ParseEnvelope {
            success: true,
            result: None,
            error: None,
        };
        assert_eq!(envelope.into_reply(), Err(ShapeError::MissingResult));
    }

    #[test]
    fn test_envelope_rejection_keeps_message() {
        let envelope: ParseEnvelope =
            serde_json::from_str(r#"{"success":false,"error":"Unrecognized encoding"}"#).unwrap();
        assert_eq!(
            envelope.into_reply(),
            Ok(ParseReply::Rejected("Unrecognized encoding".to_string()))
        );
    }

    #[test]
    fn test_envelope_rejection_without_message() {
        let envelope: ParseEnvelope = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(
            envelope.into_reply(),
            Ok(ParseReply::Rejected(DEFAULT_REJECTION_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_backend_product_shape_deserializes() {
        let json = r#"{
            "search_query": "256GB 15 Pro iPhone",
            "tokens": [
                {"value": "256GB", "type": "measurement", "confidence": 0.95, "position": 2, "context": null}
            ],
            "raw_text": "iPhone 15 Pro 256GB",
            "token_count": 1,
            "priority_tokens": ["256GB"]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.token_count, 1);
        assert_eq!(product.priority_tokens, vec!["256GB".to_string()]);
    }

    #[test]
    fn test_stats_deserialize() {
        let json = r#"{
            "total_parses_today": 1234,
            "average_confidence": 0.923,
            "average_parse_time_ms": 15,
            "cache_hit_rate": 0.67,
            "top_patterns": [{"pattern": "measurement", "count": 456}]
        }"#;
        let stats: ParserStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_parses_today, 1234);
        assert_eq!(stats.top_patterns[0].pattern, "measurement");
    }

    #[test]
    fn test_example_category_requires_inputs() {
        let err = serde_json::from_str::<Vec<ExampleCategory>>(r#"[{"category": "Electronics"}]"#);
        assert!(err.is_err());

        let ok: Vec<ExampleCategory> =
            serde_json::from_str(r#"[{"category": "Electronics", "inputs": []}]"#).unwrap();
        assert!(ok[0].inputs.is_empty());
    }
}
