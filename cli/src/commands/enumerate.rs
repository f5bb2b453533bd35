use anyhow::Context;
use colored::*;
use tracing::Instrument;

use crate::sprint;
use crate::terminal::{format, print, spinner};
use subscout_common::{Domain, config::Config, success};
use subscout_core::discovery::{self, DiscoveryReport};
use subscout_core::resolver::{ResolutionEngine, SystemResolver};
use subscout_core::sink::{self, OutputPaths};
use subscout_sources as sources;

pub async fn enumerate(domain: Domain, cfg: &Config) -> anyhow::Result<()> {
    sink::prepare_output_dir(&cfg.output_dir)?;

    let client = sources::http_client(cfg.fetch_timeout).context("building HTTP client")?;
    let sources = sources::default_sources(&client);

    let span = spinner::discovery_span();
    let engine = ResolutionEngine::new(SystemResolver, cfg.concurrency)
        .on_progress(spinner::resolution_progress(span.clone()));

    let mut report: DiscoveryReport = discovery::run(&sources, &engine, &domain)
        .instrument(span)
        .await;

    if cfg.sorted {
        report.results.sort_by(|a, b| a.subdomain.cmp(&b.subdomain));
    }

    let prefix = sink::destination_prefix(&cfg.output_dir, &domain);
    let paths: OutputPaths = sink::persist(&report.results, &prefix)?;

    discovery_ends(&domain, &report, &paths, cfg);
    Ok(())
}

fn discovery_ends(domain: &Domain, report: &DiscoveryReport, paths: &OutputPaths, cfg: &Config) {
    if report.candidates == 0 {
        print::header("zero subdomains found", cfg.quiet);
        print::no_results(cfg.quiet);
    } else {
        print::header("subdomain discovery", cfg.quiet);
        print_summary(domain, report, cfg);
    }

    if cfg.quiet == 0 {
        sprint!();
        print::tree_head("Reports");
        print::as_tree_one_level(format::output_details(paths));
        print::fat_separator();
    }

    success!(
        "Results saved to: {} and {}",
        paths.csv.display(),
        paths.json.display()
    );
}

fn print_summary(domain: &Domain, report: &DiscoveryReport, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let details = format::report_details(report);
    print::set_key_width(
        details
            .iter()
            .map(|(key, _)| key.as_str())
            .chain(["Domain"]),
    );
    print::aligned_line("Domain", domain.as_str());
    for (key, value) in details {
        print::aligned_line(&key, value);
    }

    let resolved: ColoredString = format!("{} resolved", report.resolved_count()).bold().green();
    let found: ColoredString = format!("{} unique subdomains", report.candidates).bold();
    let output: String = format!(
        "Discovery Complete: {resolved} of {found} in {}",
        format::elapsed(report.elapsed)
    );
    print::fat_separator();
    print::centerln(&output);
}
