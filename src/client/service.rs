//! The parser service seam and its reqwest-backed implementation.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use super::config::{ServiceConfig, EXAMPLES_PATH, PARSE_PATH, STATS_PATH};
use super::error::{Result, ServiceError};
use crate::studio::result::{ExampleCategory, ParseEnvelope, ParseReply, ParseResult, ParserStats};

/// Calls the studio makes against the parser backend.
///
/// `parse` resolves a `success:false` envelope to [`ServiceError::Rejected`];
/// every other error is a transport failure.
#[async_trait]
pub trait ParserService: Send + Sync {
    async fn parse(&self, text: &str) -> Result<ParseResult>;

    async fn examples(&self) -> Result<Vec<ExampleCategory>>;

    async fn stats(&self) -> Result<ParserStats>;
}

#[derive(Serialize)]
struct ParseRequest<'a> {
    text: &'a str,
}

pub struct HttpParserService {
    inner: reqwest::Client,
    config: ServiceConfig,
    base: Url,
}

impl HttpParserService {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let mut base = Url::parse(&config.base_url)
            .map_err(|e| ServiceError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ServiceError::InvalidUrl(config.base_url.clone()));
        }
        // Endpoints resolve under the base path, so it has to end in a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner,
            config,
            base,
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ServiceError::InvalidUrl(format!("{}: {}", path, e)))
    }

    fn map_send_error(&self, err: reqwest::Error) -> ServiceError {
        if err.is_timeout() {
            ServiceError::Timeout(self.config.timeout)
        } else {
            ServiceError::Request(err)
        }
    }

    async fn read_body(&self, response: Response) -> Result<(reqwest::StatusCode, String)> {
        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;
        Ok((status, body))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!("HTTP GET: {}", url);

        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let (status, body) = self.read_body(response).await?;

        if !status.is_success() {
            return Err(ServiceError::HttpStatus { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ParserService for HttpParserService {
    async fn parse(&self, text: &str) -> Result<ParseResult> {
        let url = self.endpoint(PARSE_PATH)?;
        debug!("HTTP POST: {} ({} chars)", url, text.chars().count());

        let response = self
            .inner
            .post(url)
            .json(&ParseRequest { text })
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;
        let (status, body) = self.read_body(response).await?;

        // The backend answers 400/500 with a regular `{success:false}` envelope.
        let envelope = match serde_json::from_str::<ParseEnvelope>(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(ServiceError::HttpStatus { status, body });
            }
            Err(e) => return Err(ServiceError::MalformedPayload(e)),
        };

        if !status.is_success() && envelope.success {
            return Err(ServiceError::HttpStatus { status, body });
        }

        match envelope.into_reply()? {
            ParseReply::Parsed(result) => Ok(result),
            ParseReply::Rejected(message) => Err(ServiceError::Rejected(message)),
        }
    }

    async fn examples(&self) -> Result<Vec<ExampleCategory>> {
        self.get_json(EXAMPLES_PATH).await
    }

    async fn stats(&self) -> Result<ParserStats> {
        self.get_json(STATS_PATH).await
    }
}

/// Build the HTTP service behind a shareable trait object.
pub fn shared_service(config: ServiceConfig) -> Result<Arc<dyn ParserService>> {
    Ok(Arc::new(HttpParserService::new(config)?))
}
