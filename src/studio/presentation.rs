//! Display-ready views of a [`ParseResult`].
//!
//! Everything here is a pure function of its input. A new summary is built
//! from scratch whenever a new result arrives; nothing is cached.

use super::result::{ParseResult, Product};
use super::token::{Token, TokenKind};

/// Confidence at or above this is shown as high.
pub const HIGH_CONFIDENCE: f64 = 0.9;
/// Confidence at or above this (and below high) is shown as medium.
pub const MEDIUM_CONFIDENCE: f64 = 0.7;

pub const NO_PRIORITY_TOKENS: &str = "no priority tokens";

/// Presentation bucket for a token type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayCategory {
    ExactPhrase,
    Measurement,
    Model,
    Brand,
    Number,
    Keyword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    pub fn label(self) -> &'static str {
        match self {
            ConfidenceBand::High => "high",
            ConfidenceBand::Medium => "medium",
            ConfidenceBand::Low => "low",
        }
    }
}

/// Map a token type onto its display bucket. Unknown types land in `Keyword`.
pub fn classify(kind: &TokenKind) -> DisplayCategory {
    match kind {
        TokenKind::ExactPhrase => DisplayCategory::ExactPhrase,
        TokenKind::Measurement => DisplayCategory::Measurement,
        TokenKind::Model => DisplayCategory::Model,
        TokenKind::Brand => DisplayCategory::Brand,
        TokenKind::Number => DisplayCategory::Number,
        TokenKind::Keyword | TokenKind::Other(_) => DisplayCategory::Keyword,
    }
}

/// Same as [`classify`] but straight from the wire label.
pub fn classify_label(label: &str) -> DisplayCategory {
    classify(&TokenKind::from(label))
}

pub fn confidence_band(confidence: f64) -> ConfidenceBand {
    if confidence >= HIGH_CONFIDENCE {
        ConfidenceBand::High
    } else if confidence >= MEDIUM_CONFIDENCE {
        ConfidenceBand::Medium
    } else {
        ConfidenceBand::Low
    }
}

/// `0.91` -> `"91.0%"`
pub fn format_overall_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// `0.92` -> `"92%"`
pub fn format_token_confidence(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenView {
    pub value: String,
    /// Type label as the service sent it.
    pub kind_label: String,
    pub category: DisplayCategory,
    pub confidence: f64,
    pub band: ConfidenceBand,
    pub position: u32,
}

impl TokenView {
    pub fn from_token(token: &Token) -> Self {
        Self {
            value: token.value.clone(),
            kind_label: token.kind.as_str().to_string(),
            category: classify(&token.kind),
            confidence: token.confidence,
            band: confidence_band(token.confidence),
            position: token.position,
        }
    }

    pub fn confidence_label(&self) -> String {
        format_token_confidence(self.confidence)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    /// 1-based, for "Product N" headings.
    pub number: usize,
    pub search_query: String,
    pub priority_tokens: Vec<String>,
    pub token_count: usize,
    pub tokens: Vec<TokenView>,
}

impl ProductView {
    pub fn from_product(number: usize, product: &Product) -> Self {
        Self {
            number,
            search_query: product.search_query.clone(),
            priority_tokens: product.priority_tokens.clone(),
            token_count: product.token_count,
            tokens: product.tokens.iter().map(TokenView::from_token).collect(),
        }
    }

    pub fn has_priority_tokens(&self) -> bool {
        !self.priority_tokens.is_empty()
    }

    pub fn priority_label(&self) -> String {
        if self.priority_tokens.is_empty() {
            NO_PRIORITY_TOKENS.to_string()
        } else {
            self.priority_tokens.join(", ")
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub overall_confidence: f64,
    pub overall_band: ConfidenceBand,
    pub parser_used: String,
    pub products: Vec<ProductView>,
    pub tokens: Vec<TokenView>,
}

impl ResultSummary {
    pub fn overall_label(&self) -> String {
        format_overall_confidence(self.overall_confidence)
    }
}

pub fn summarize(result: &ParseResult) -> ResultSummary {
    ResultSummary {
        overall_confidence: result.confidence,
        overall_band: confidence_band(result.confidence),
        parser_used: result.parser_used.clone(),
        products: result
            .products
            .iter()
            .enumerate()
            .map(|(i, product)| ProductView::from_product(i + 1, product))
            .collect(),
        tokens: result.tokens.iter().map(TokenView::from_token).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_band_thresholds() {
        assert_eq!(confidence_band(0.95), ConfidenceBand::High);
        assert_eq!(confidence_band(0.85), ConfidenceBand::Medium);
        assert_eq!(confidence_band(0.5), ConfidenceBand::Low);
    }

    #[test]
    fn test_confidence_band_boundaries_inclusive() {
        assert_eq!(confidence_band(0.9), ConfidenceBand::High);
        assert_eq!(confidence_band(0.7), ConfidenceBand::Medium);
        assert_eq!(confidence_band(0.0), ConfidenceBand::Low);
        assert_eq!(confidence_band(1.0), ConfidenceBand::High);
    }

    #[test]
    fn test_confidence_band_just_below_boundaries() {
        assert_eq!(confidence_band(0.8999), ConfidenceBand::Medium);
        assert_eq!(confidence_band(0.6999), ConfidenceBand::Low);
    }

    #[test]
    fn test_classify_known_types() {
        assert_eq!(classify_label("exact_phrase"), DisplayCategory::ExactPhrase);
        assert_eq!(classify_label("measurement"), DisplayCategory::Measurement);
        assert_eq!(classify_label("model"), DisplayCategory::Model);
        assert_eq!(classify_label("brand"), DisplayCategory::Brand);
        assert_eq!(classify_label("number"), DisplayCategory::Number);
        assert_eq!(classify_label("keyword"), DisplayCategory::Keyword);
    }

    #[test]
    fn test_classify_unknown_falls_back_to_keyword() {
        for label in ["", "other", "color", "EXACT_PHRASE", "🦄"] {
            assert_eq!(classify_label(label), DisplayCategory::Keyword, "{label:?}");
        }
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(format_overall_confidence(0.91), "91.0%");
        assert_eq!(format_overall_confidence(0.9234), "92.3%");
        assert_eq!(format_token_confidence(0.92), "92%");
        assert_eq!(format_token_confidence(0.0), "0%");
    }

    #[test]
    fn test_priority_label_when_empty() {
        let view = ProductView::from_product(1, &Product::new("honey", vec![]));
        assert!(!view.has_priority_tokens());
        assert_eq!(view.priority_label(), NO_PRIORITY_TOKENS);
    }

    #[test]
    fn test_priority_label_joins_tokens() {
        let product = Product::new("q", vec![])
            .with_priority_tokens(vec!["32oz".to_string(), "organic honey".to_string()]);
        let view = ProductView::from_product(2, &product);
        assert_eq!(view.number, 2);
        assert_eq!(view.priority_label(), "32oz, organic honey");
    }

    #[test]
    fn test_summarize_counts_and_order() {
        let first = vec![
            Token::new("red", TokenKind::Keyword, 0.6),
            Token::new("dress", TokenKind::Keyword, 0.6).at(1),
        ];
        let second = vec![Token::new("size 8", TokenKind::Measurement, 0.95).at(2)];
        let mut flat = first.clone();
        flat.extend(second.clone());
        flat.push(Token::new("and", TokenKind::Other("stop".into()), 0.1).at(3));

        let result = ParseResult {
            products: vec![Product::new("red dress", first), Product::new("size 8", second)],
            tokens: flat,
            confidence: 0.72,
            parser_used: "generic".to_string(),
            raw_text: String::new(),
        };

        let summary = summarize(&result);
        assert_eq!(summary.overall_band, ConfidenceBand::Medium);
        assert_eq!(summary.tokens.len(), 4);
        assert_eq!(summary.products.len(), 2);
        let values: Vec<&str> = summary.products[0]
            .tokens
            .iter()
            .map(|t| t.value.as_str())
            .collect();
        assert_eq!(values, vec!["red", "dress"]);
        assert_eq!(summary.tokens[3].category, DisplayCategory::Keyword);
        assert_eq!(summary.tokens[3].kind_label, "stop");
        assert_eq!(summary.tokens[3].band, ConfidenceBand::Low);
    }

    #[test]
    fn test_summarize_empty_result() {
        let result = ParseResult {
            products: vec![],
            tokens: vec![],
            confidence: 0.0,
            parser_used: "generic".to_string(),
            raw_text: String::new(),
        };
        let summary = summarize(&result);
        assert!(summary.products.is_empty());
        assert!(summary.tokens.is_empty());
        assert_eq!(summary.overall_label(), "0.0%");
    }
}
