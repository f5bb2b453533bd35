//! Certificate transparency logs through [crt.sh](https://crt.sh).
//!
//! The JSON API answers with one record per certificate. A record's
//! `name_value` may hold several names separated by newlines.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use subscout_common::{Domain, Subdomain};

use crate::{Endpoint, SourceError, SubdomainSource};

const ENDPOINT: &str = "https://crt.sh/?q=%25.{domain}&output=json";

#[derive(Debug, Deserialize)]
struct CertificateEntry {
    #[serde(default)]
    name_value: String,
}

pub struct CrtSh {
    client: Client,
    endpoint: Endpoint,
}

impl CrtSh {
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, Endpoint::new(ENDPOINT))
    }

    pub fn with_endpoint(client: Client, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl SubdomainSource for CrtSh {
    fn name(&self) -> &'static str {
        "crt.sh"
    }

    async fn query(&self, domain: &Domain) -> Result<Vec<Subdomain>, SourceError> {
        let body = crate::get_text(&self.client, &self.endpoint.render(domain)).await?;
        parse(&body, domain)
    }
}

/// Splits every record into its names and keeps those below `domain`.
pub fn parse(body: &str, domain: &Domain) -> Result<Vec<Subdomain>, SourceError> {
    let entries: Vec<CertificateEntry> = serde_json::from_str(body)?;
    let names = entries
        .iter()
        .flat_map(|entry| entry.name_value.split('\n'))
        .map(str::trim)
        .filter(|name| domain.is_suffix_of(name))
        .filter_map(Subdomain::new)
        .collect();
    Ok(names)
}
