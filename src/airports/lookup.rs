//! External airport name lookup.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::config::AirportLookupConfig;

/// Errors from a single airport name lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid lookup URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("lookup request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("lookup returned status {0}")]
    Status(u16),
}

/// Source of airport display names.
///
/// `Ok(None)` means the source answered but had no name for the code.
#[async_trait]
pub trait AirportLookup: Send + Sync {
    async fn lookup(&self, code: &str) -> Result<Option<String>, LookupError>;
}

#[derive(Debug, Deserialize)]
struct AirportSearchResponse {
    #[serde(default)]
    response: Option<Vec<AirportEntry>>,
}

#[derive(Debug, Deserialize)]
struct AirportEntry {
    #[serde(default)]
    name: Option<String>,
}

impl AirportSearchResponse {
    fn first_name(self) -> Option<String> {
        self.response?
            .into_iter()
            .next()?
            .name
            .filter(|name| !name.is_empty())
    }
}

/// Looks names up over HTTP: `GET <base_url>?name=<code>`.
#[derive(Clone)]
pub struct HttpAirportLookup {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpAirportLookup {
    pub fn new(config: &AirportLookupConfig) -> Result<Self, LookupError> {
        let base_url = Url::parse(&config.base_url)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    fn url_for(&self, code: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("name", code);
        url
    }
}

#[async_trait]
impl AirportLookup for HttpAirportLookup {
    async fn lookup(&self, code: &str) -> Result<Option<String>, LookupError> {
        let response = self.client.get(self.url_for(code)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body: AirportSearchResponse = response.json().await?;
        Ok(body.first_name())
    }
}
