//! The finder.tools subdomain API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use subscout_common::{Domain, Subdomain};

use crate::{Endpoint, SourceError, SubdomainSource};

const ENDPOINT: &str = "https://subdomains.finder.tools/api/subdomain/{domain}";

#[derive(Debug, Deserialize)]
struct FinderResponse {
    #[serde(default)]
    subdomains: Vec<String>,
}

pub struct FinderTools {
    client: Client,
    endpoint: Endpoint,
}

impl FinderTools {
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, Endpoint::new(ENDPOINT))
    }

    pub fn with_endpoint(client: Client, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl SubdomainSource for FinderTools {
    fn name(&self) -> &'static str {
        "finder.tools"
    }

    async fn query(&self, domain: &Domain) -> Result<Vec<Subdomain>, SourceError> {
        let body = crate::get_text(&self.client, &self.endpoint.render(domain)).await?;
        parse(&body)
    }
}

/// Reads the names listed under `subdomains`. A missing key means no names.
pub fn parse(body: &str) -> Result<Vec<Subdomain>, SourceError> {
    let response: FinderResponse = serde_json::from_str(body)?;
    Ok(response
        .subdomains
        .iter()
        .filter_map(|name| Subdomain::new(name))
        .collect())
}
