pub mod config;
pub mod domain;
pub mod log;
pub mod record;

pub use domain::{Domain, DomainError, Subdomain};
pub use record::ResolutionResult;

#[doc(hidden)]
pub use tracing as __tracing;
