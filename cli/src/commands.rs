pub mod enumerate;

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use subscout_common::{Domain, config::Config};

#[derive(Parser, Debug)]
#[command(name = "subscout", version)]
#[command(about = "Passive subdomain enumeration with concurrent resolution.")]
pub struct CommandLine {
    /// Root domain to enumerate (prompted for when omitted)
    #[arg(short, long)]
    pub domain: Option<Domain>,

    /// Maximum number of concurrent host lookups [default: 25]
    #[arg(short, long)]
    pub concurrency: Option<NonZeroUsize>,

    /// Timeout in seconds for each source request [default: 10]
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Directory receiving the CSV and JSON reports [default: subdomains]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Sort the reports by subdomain instead of completion order
    #[arg(long)]
    pub sorted: bool,

    /// Reduce output, repeat for even less (-qq)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            concurrency: self
                .concurrency
                .map_or(defaults.concurrency, NonZeroUsize::get),
            fetch_timeout: self
                .timeout
                .map_or(defaults.fetch_timeout, Duration::from_secs),
            output_dir: self.output_dir.clone().unwrap_or(defaults.output_dir),
            sorted: self.sorted,
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}
