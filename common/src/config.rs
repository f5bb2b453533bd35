use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CONCURRENCY: usize = 25;
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_OUTPUT_DIR: &str = "subdomains";

#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of host lookups in flight at the same time.
    pub concurrency: usize,

    /// Upper bound for a single request to a subdomain source.
    pub fetch_timeout: Duration,

    /// Directory receiving the CSV and JSON reports.
    ///
    /// Created on demand if it does not exist yet.
    pub output_dir: PathBuf,

    /// Sort the reports by subdomain instead of keeping completion order.
    pub sorted: bool,

    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sorted: false,
            quiet: 0,
            no_banner: false,
        }
    }
}
