//! HackerTarget host search.
//!
//! Plain text, one `name,address` pair per line. Quota and error messages come
//! back as a single line without a comma.

use async_trait::async_trait;
use reqwest::Client;
use subscout_common::{Domain, Subdomain};

use crate::{Endpoint, SourceError, SubdomainSource};

const ENDPOINT: &str = "https://api.hackertarget.com/hostsearch/?q={domain}";

pub struct HackerTarget {
    client: Client,
    endpoint: Endpoint,
}

impl HackerTarget {
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, Endpoint::new(ENDPOINT))
    }

    pub fn with_endpoint(client: Client, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl SubdomainSource for HackerTarget {
    fn name(&self) -> &'static str {
        "HackerTarget"
    }

    async fn query(&self, domain: &Domain) -> Result<Vec<Subdomain>, SourceError> {
        let body = crate::get_text(&self.client, &self.endpoint.render(domain)).await?;
        Ok(parse(&body, domain))
    }
}

pub fn parse(body: &str, domain: &Domain) -> Vec<Subdomain> {
    body.trim()
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            match fields.as_slice() {
                [name, _address] => Some(name.trim()),
                _ => None,
            }
        })
        .filter(|name| domain.is_suffix_of(name))
        .filter_map(Subdomain::new)
        .collect()
}
