use std::collections::HashMap;
use std::io;
use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use subscout_common::{Domain, Subdomain};
use subscout_core::resolver::HostResolver;
use subscout_sources::{SourceError, SubdomainSource};
use tokio::net::TcpListener;

pub fn domain() -> Domain {
    "example.com".parse().unwrap()
}

pub fn subdomains(names: &[&str]) -> Vec<Subdomain> {
    names.iter().map(|n| Subdomain::new(n).unwrap()).collect()
}

/// Source answering with a fixed list of names.
pub struct StaticSource {
    pub name: &'static str,
    pub names: Vec<String>,
}

impl StaticSource {
    pub fn boxed(name: &'static str, names: &[&str]) -> Box<dyn SubdomainSource> {
        Self::from_names(name, names.iter().map(|n| n.to_string()).collect())
    }

    pub fn from_names(name: &'static str, names: Vec<String>) -> Box<dyn SubdomainSource> {
        Box::new(Self { name, names })
    }
}

#[async_trait]
impl SubdomainSource for StaticSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn query(&self, _domain: &Domain) -> Result<Vec<Subdomain>, SourceError> {
        Ok(self.names.iter().filter_map(|n| Subdomain::new(n)).collect())
    }
}

/// Source that waits a little and then reports a timeout.
pub struct TimeoutSource;

#[async_trait]
impl SubdomainSource for TimeoutSource {
    fn name(&self) -> &'static str {
        "timeout"
    }

    async fn query(&self, _domain: &Domain) -> Result<Vec<Subdomain>, SourceError> {
        tokio::time::sleep(Duration::from_millis(20)).await;
        Err(SourceError::Timeout)
    }
}

/// Resolver backed by a lookup table. Unknown names fail like a real NXDOMAIN.
#[derive(Default)]
pub struct TableResolver {
    table: HashMap<String, IpAddr>,
}

impl TableResolver {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        let table = entries
            .iter()
            .map(|(name, ip)| (name.to_string(), ip.parse().unwrap()))
            .collect();
        Self { table }
    }
}

#[async_trait]
impl HostResolver for TableResolver {
    async fn lookup(&self, name: &str) -> io::Result<Vec<IpAddr>> {
        tokio::time::sleep(Duration::from_millis(2)).await;
        match self.table.get(name) {
            Some(ip) => Ok(vec![*ip]),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("failed to lookup address information for {name}"),
            )),
        }
    }
}

/// Local endpoint that accepts connections and never answers.
pub async fn silent_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    format!("http://{addr}/hostsearch/?q={{domain}}")
}
