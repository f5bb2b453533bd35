use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::domain::Subdomain;

/// Text used in place of an address when a name did not resolve.
pub const UNRESOLVED: &str = "Unresolved";

/// Outcome of a single host lookup.
///
/// `ip == None` is a normal terminal state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub subdomain: Subdomain,
    pub ip: Option<IpAddr>,
}

impl ResolutionResult {
    pub fn resolved(subdomain: Subdomain, ip: IpAddr) -> Self {
        Self {
            subdomain,
            ip: Some(ip),
        }
    }

    pub fn unresolved(subdomain: Subdomain) -> Self {
        Self {
            subdomain,
            ip: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.ip.is_some()
    }

    pub fn ip_or_unresolved(&self) -> String {
        self.ip
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| UNRESOLVED.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn serializes_address_as_string() {
        let sub = Subdomain::new("a.example.com").unwrap();
        let record = ResolutionResult::resolved(sub, IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"subdomain":"a.example.com","ip":"1.2.3.4"}"#);
    }

    #[test]
    fn serializes_unresolved_as_null() {
        let record = ResolutionResult::unresolved(Subdomain::new("b.example.com").unwrap());
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"subdomain":"b.example.com","ip":null}"#);
        assert_eq!(record.ip_or_unresolved(), UNRESOLVED);
    }
}
