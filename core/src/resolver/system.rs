use std::io;
use std::net::IpAddr;

use async_trait::async_trait;

use super::HostResolver;

/// Resolves names with the operating system's resolver (`getaddrinfo`).
///
/// The call runs on tokio's blocking pool and is bounded by the host's own
/// resolver timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

#[async_trait]
impl HostResolver for SystemResolver {
    async fn lookup(&self, name: &str) -> io::Result<Vec<IpAddr>> {
        let addrs = tokio::net::lookup_host((name, 0)).await?;
        Ok(addrs.map(|addr| addr.ip()).collect())
    }
}
