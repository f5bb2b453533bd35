//! # Discovery Pipeline
//!
//! Ties the stages of a run together:
//! 1. **Gathering**: every source is queried concurrently.
//! 2. **Aggregation**: the contributions are merged into one sorted list.
//! 3. **Resolution**: each candidate is looked up by the [`ResolutionEngine`].
//!
//! Writing the reports is left to the caller.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use futures::future::join_all;
use subscout_common::{Domain, ResolutionResult, Subdomain, info, success};
use subscout_sources::SubdomainSource;

use crate::aggregate::aggregate;
use crate::resolver::ResolutionEngine;

#[derive(Debug)]
pub struct DiscoveryReport {
    /// Number of unique candidates handed to the engine.
    pub candidates: usize,
    /// One record per candidate, in completion order.
    pub results: Vec<ResolutionResult>,
    pub elapsed: Duration,
}

impl DiscoveryReport {
    pub fn resolved_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_resolved()).count()
    }
}

/// Queries all sources at once. A failing source contributes an empty set.
pub async fn gather(
    sources: &[Box<dyn SubdomainSource>],
    domain: &Domain,
) -> Vec<BTreeSet<Subdomain>> {
    join_all(sources.iter().map(|source| source.fetch(domain))).await
}

/// Runs a complete discovery against `domain`.
pub async fn run(
    sources: &[Box<dyn SubdomainSource>],
    engine: &ResolutionEngine,
    domain: &Domain,
) -> DiscoveryReport {
    let start_time: Instant = Instant::now();

    let contributions = gather(sources, domain).await;
    let candidates: Vec<Subdomain> = aggregate(contributions);
    let candidate_count: usize = candidates.len();
    success!("Total unique subdomains found: {candidate_count}");

    if candidate_count > 0 {
        info!(
            "Resolving {candidate_count} subdomains with {} concurrent lookups...",
            engine.limit()
        );
    }
    let results = engine.resolve_all(candidates).await;

    DiscoveryReport {
        candidates: candidate_count,
        results,
        elapsed: start_time.elapsed(),
    }
}
