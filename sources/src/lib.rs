//! Passive subdomain sources.
//!
//! Every source turns a root [`Domain`] into a list of candidate names by
//! asking one external provider. Callers should go through
//! [`SubdomainSource::fetch`], which never fails: a broken source only logs a
//! warning and contributes nothing.

use std::collections::BTreeSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use subscout_common::{Domain, Subdomain, info, warn};
use thiserror::Error;

pub mod crtsh;
pub mod finder;
pub mod hackertarget;

pub use crtsh::CrtSh;
pub use finder::FinderTools;
pub use hackertarget::HackerTarget;

const USER_AGENT: &str = concat!("subscout/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request timed out")]
    Timeout,
    #[error("request failed: {0}")]
    Http(#[source] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return SourceError::Timeout;
        }
        match err.status() {
            Some(status) => SourceError::Status(status),
            None => SourceError::Http(err),
        }
    }
}

#[async_trait]
pub trait SubdomainSource: Send + Sync {
    /// Human readable provider name, used in log lines.
    fn name(&self) -> &'static str;

    /// Performs the request and normalizes the provider's format.
    async fn query(&self, domain: &Domain) -> Result<Vec<Subdomain>, SourceError>;

    /// Like [`query`](Self::query), but a failure is logged and turned into
    /// an empty set so it can never abort the run.
    async fn fetch(&self, domain: &Domain) -> BTreeSet<Subdomain> {
        info!("Fetching from {}...", self.name());
        match self.query(domain).await {
            Ok(names) => {
                let names: BTreeSet<Subdomain> = names.into_iter().collect();
                info!("{} returned {} names", self.name(), names.len());
                names
            }
            Err(e) => {
                warn!("{} error: {e}", self.name());
                BTreeSet::new()
            }
        }
    }
}

/// URL template with a `{domain}` placeholder.
#[derive(Debug, Clone)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn render(&self, domain: &Domain) -> String {
        self.0.replace("{domain}", domain.as_str())
    }
}

/// Builds the client shared by all sources.
///
/// `timeout` bounds each request from connect to the end of the body.
pub fn http_client(timeout: Duration) -> Result<Client, SourceError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(SourceError::Http)
}

/// The providers queried on a normal run.
pub fn default_sources(client: &Client) -> Vec<Box<dyn SubdomainSource>> {
    vec![
        Box::new(CrtSh::new(client.clone())),
        Box::new(FinderTools::new(client.clone())),
        Box::new(HackerTarget::new(client.clone())),
    ]
}

async fn get_text(client: &Client, url: &str) -> Result<String, SourceError> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}
