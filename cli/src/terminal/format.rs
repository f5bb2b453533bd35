use std::path::Path;
use std::time::Duration;

use crate::terminal::colors;
use colored::*;
use subscout_core::discovery::DiscoveryReport;
use subscout_core::sink::OutputPaths;

type Detail = (String, ColoredString);

pub fn elapsed(duration: Duration) -> ColoredString {
    format!("{:.2}s", duration.as_secs_f64()).bold().yellow()
}

pub fn report_details(report: &DiscoveryReport) -> Vec<Detail> {
    let resolved: usize = report.resolved_count();
    let unresolved: usize = report.results.len() - resolved;
    vec![
        ("Found".to_string(), report.candidates.to_string().bold()),
        ("Resolved".to_string(), resolved.to_string().color(colors::IPV4_ADDR)),
        ("Unresolved".to_string(), unresolved.to_string().color(colors::UNRESOLVED)),
        ("Elapsed".to_string(), elapsed(report.elapsed)),
    ]
}

pub fn output_details(paths: &OutputPaths) -> Vec<Detail> {
    vec![
        ("CSV".to_string(), path(&paths.csv)),
        ("JSON".to_string(), path(&paths.json)),
    ]
}

fn path(path: &Path) -> ColoredString {
    path.display().to_string().color(colors::PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};
    use std::path::PathBuf;
    use subscout_common::{ResolutionResult, Subdomain};

    #[test]
    fn report_details_count_outcomes() {
        colored::control::set_override(false);
        let report = DiscoveryReport {
            candidates: 3,
            results: vec![
                ResolutionResult::resolved(
                    Subdomain::new("a.example.com").unwrap(),
                    IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)),
                ),
                ResolutionResult::unresolved(Subdomain::new("b.example.com").unwrap()),
                ResolutionResult::unresolved(Subdomain::new("c.example.com").unwrap()),
            ],
            elapsed: Duration::from_millis(1500),
        };

        let details: Vec<(String, String)> = report_details(&report)
            .into_iter()
            .map(|(k, v)| (k, v.to_string()))
            .collect();
        assert_eq!(
            details,
            [
                ("Found".to_string(), "3".to_string()),
                ("Resolved".to_string(), "1".to_string()),
                ("Unresolved".to_string(), "2".to_string()),
                ("Elapsed".to_string(), "1.50s".to_string()),
            ]
        );
    }

    #[test]
    fn output_details_list_both_files() {
        colored::control::set_override(false);
        let paths = OutputPaths::from_prefix(&PathBuf::from("subdomains/example.com"));
        let keys: Vec<String> = output_details(&paths).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["CSV", "JSON"]);
    }
}
