//! The **resolution engine**.
//!
//! Turns the aggregated candidate list into one [`ResolutionResult`] per name.
//! Lookups run concurrently, but never more than the configured limit at once:
//! every candidate gets its own task on a [`JoinSet`], and a task has to hold a
//! permit of the shared [`Semaphore`] while it talks to the resolver.
//!
//! A task goes through `Pending -> InFlight -> Resolved | Unresolved`:
//! * **Pending**: spawned, waiting for a permit.
//! * **InFlight**: holds a permit and waits for the resolver.
//! * **Resolved / Unresolved**: the lookup returned, the permit is released.
//!
//! There is no retry and no cancellation. A failed lookup, or a task that
//! panics, ends up as an unresolved record and never affects its siblings.
//!
//! Results are collected by a single owner, the loop draining the join set, in
//! the order the lookups finish.

use std::collections::HashMap;
use std::io;
use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use subscout_common::{ResolutionResult, Subdomain, debug, error, info};
use tokio::sync::Semaphore;
use tokio::task::{self, JoinSet};

mod system;

pub use system::SystemResolver;

/// Log target of the per-name outcome lines.
pub const RESOLUTION_TARGET: &str = "subscout::resolution";

/// Invoked after every completed lookup with `(completed, total)`.
pub type ProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Name-to-address lookup.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Returns every address the name maps to. An empty list and an error
    /// both mean the name did not resolve.
    async fn lookup(&self, name: &str) -> io::Result<Vec<IpAddr>>;
}

pub struct ResolutionEngine {
    resolver: Arc<dyn HostResolver>,
    limit: usize,
    on_progress: Option<ProgressCallback>,
}

impl ResolutionEngine {
    /// Creates an engine running at most `limit` lookups at a time.
    ///
    /// A limit of zero would never make progress and is raised to one.
    pub fn new(resolver: impl HostResolver + 'static, limit: usize) -> Self {
        Self::from_shared(Arc::new(resolver), limit)
    }

    pub fn from_shared(resolver: Arc<dyn HostResolver>, limit: usize) -> Self {
        Self {
            resolver,
            limit: limit.max(1),
            on_progress: None,
        }
    }

    pub fn on_progress(mut self, callback: ProgressCallback) -> Self {
        self.on_progress = Some(callback);
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Resolves every candidate exactly once.
    ///
    /// The returned records are in completion order. The call only returns
    /// once every spawned lookup has finished.
    pub async fn resolve_all(&self, candidates: Vec<Subdomain>) -> Vec<ResolutionResult> {
        let total: usize = candidates.len();
        let permits = Arc::new(Semaphore::new(self.limit));
        let mut tasks: JoinSet<ResolutionResult> = JoinSet::new();
        let mut pending: HashMap<task::Id, Subdomain> = HashMap::with_capacity(total);

        for candidate in candidates {
            let permits = Arc::clone(&permits);
            let resolver = Arc::clone(&self.resolver);
            let name = candidate.clone();

            let handle = tasks.spawn(async move {
                let Ok(_permit) = permits.acquire().await else {
                    return ResolutionResult::unresolved(name);
                };
                match resolve_one(resolver.as_ref(), name.as_str()).await {
                    Some(ip) => ResolutionResult::resolved(name, ip),
                    None => ResolutionResult::unresolved(name),
                }
            });
            pending.insert(handle.id(), candidate);
        }

        let mut results: Vec<ResolutionResult> = Vec::with_capacity(total);
        while let Some(joined) = tasks.join_next_with_id().await {
            let result = match joined {
                Ok((id, result)) => {
                    pending.remove(&id);
                    result
                }
                Err(join_err) => match pending.remove(&join_err.id()) {
                    Some(name) => {
                        debug!(target: RESOLUTION_TARGET, "lookup task for {name} failed: {join_err}");
                        ResolutionResult::unresolved(name)
                    }
                    None => {
                        error!("lookup task {} finished without a known candidate", join_err.id());
                        continue;
                    }
                },
            };

            report(&result);
            results.push(result);

            if let Some(callback) = &self.on_progress {
                callback(results.len(), total);
            }
        }

        results
    }
}

async fn resolve_one(resolver: &dyn HostResolver, name: &str) -> Option<IpAddr> {
    match resolver.lookup(name).await {
        Ok(addrs) => pick_address(&addrs),
        Err(e) => {
            debug!(target: RESOLUTION_TARGET, "{name}: {e}");
            None
        }
    }
}

/// First IPv4 address, or the first address of any family if there is none.
fn pick_address(addrs: &[IpAddr]) -> Option<IpAddr> {
    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
}

fn report(result: &ResolutionResult) {
    info!(
        target: RESOLUTION_TARGET,
        resolved = result.is_resolved(),
        "{} -> {}",
        result.subdomain,
        result.ip_or_unresolved()
    );
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
