use std::collections::BTreeSet;
use std::fs;
use std::time::Duration;

use subscout_common::{ResolutionResult, Subdomain};
use subscout_core::aggregate::aggregate;
use subscout_core::discovery;
use subscout_core::resolver::ResolutionEngine;
use subscout_core::sink;
use subscout_sources::{Endpoint, HackerTarget, SubdomainSource, http_client};

use crate::utils::{StaticSource, TableResolver, TimeoutSource, domain, silent_endpoint, subdomains};

fn names(results: &[ResolutionResult]) -> BTreeSet<String> {
    results.iter().map(|r| r.subdomain.to_string()).collect()
}

/// Overlapping contributions collapse into one sorted candidate list.
#[tokio::test]
async fn overlapping_sources_are_merged() {
    let sources = vec![
        StaticSource::boxed("one", &["x.example.com"]),
        StaticSource::boxed("two", &["x.example.com", "y.example.com"]),
        StaticSource::boxed("three", &[]),
    ];

    let contributions = discovery::gather(&sources, &domain()).await;
    assert_eq!(contributions.len(), 3);

    let candidates = aggregate(contributions);
    assert_eq!(candidates, subdomains(&["x.example.com", "y.example.com"]));
}

/// A source that times out only removes its own contribution.
#[tokio::test]
async fn timed_out_source_does_not_abort_the_run() {
    let sources: Vec<Box<dyn SubdomainSource>> = vec![
        StaticSource::boxed("one", &["a.example.com", "b.example.com"]),
        Box::new(TimeoutSource),
        StaticSource::boxed("three", &["c.example.com"]),
    ];
    let resolver = TableResolver::new(&[("a.example.com", "10.0.0.1"), ("c.example.com", "10.0.0.3")]);
    let engine = ResolutionEngine::new(resolver, 25);

    let report = discovery::run(&sources, &engine, &domain()).await;

    assert_eq!(report.candidates, 3);
    assert_eq!(
        names(&report.results),
        BTreeSet::from([
            "a.example.com".to_string(),
            "b.example.com".to_string(),
            "c.example.com".to_string(),
        ])
    );
    assert_eq!(report.resolved_count(), 2);
}

/// Same scenario against a real HTTP source whose endpoint never answers.
#[tokio::test]
async fn unresponsive_http_source_is_contained() {
    let client = http_client(Duration::from_millis(250)).unwrap();
    let sources: Vec<Box<dyn SubdomainSource>> = vec![
        StaticSource::boxed("one", &["www.example.com"]),
        Box::new(HackerTarget::with_endpoint(client, Endpoint::new(silent_endpoint().await))),
        StaticSource::boxed("three", &["api.example.com"]),
    ];
    let engine = ResolutionEngine::new(TableResolver::default(), 5);

    let report = discovery::run(&sources, &engine, &domain()).await;

    assert_eq!(report.candidates, 2);
    assert_eq!(report.resolved_count(), 0);
}

/// Every candidate yields exactly one record, whatever the worker count.
#[tokio::test]
async fn exactly_one_record_per_candidate() {
    let generated: Vec<String> = (0..50).map(|n| format!("h{n}.example.com")).collect();

    for limit in [1, 5, 25] {
        let sources = vec![
            StaticSource::from_names("one", generated[..30].to_vec()),
            StaticSource::from_names("two", generated[20..].to_vec()),
        ];
        let engine = ResolutionEngine::new(TableResolver::new(&[("h7.example.com", "10.0.0.7")]), limit);

        let report = discovery::run(&sources, &engine, &domain()).await;

        assert_eq!(report.candidates, 50, "limit {limit}");
        assert_eq!(report.results.len(), 50, "limit {limit}");
        assert_eq!(names(&report.results).len(), 50, "duplicate records at limit {limit}");
        assert_eq!(report.resolved_count(), 1, "limit {limit}");
    }
}

/// End to end: one name resolves, one does not, both reports agree.
#[tokio::test]
async fn reports_describe_resolved_and_unresolved_names() {
    let sources = vec![
        StaticSource::boxed("one", &["a.example.com"]),
        StaticSource::boxed("two", &["b.example.com", "a.example.com"]),
    ];
    let engine = ResolutionEngine::new(TableResolver::new(&[("a.example.com", "1.2.3.4")]), 25);
    let report = discovery::run(&sources, &engine, &domain()).await;
    assert_eq!(report.results.len(), 2);

    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("subdomains");
    sink::prepare_output_dir(&output_dir).unwrap();
    let prefix = sink::destination_prefix(&output_dir, &domain());
    let paths = sink::persist(&report.results, &prefix).unwrap();

    assert!(paths.csv.ends_with("example.com_subdomains.csv"));
    assert!(paths.json.ends_with("example.com_subdomains.json"));

    let csv = fs::read_to_string(&paths.csv).unwrap();
    let mut lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.remove(0), "Subdomain,IP");
    lines.sort();
    assert_eq!(lines, ["a.example.com,1.2.3.4", "b.example.com,Unresolved"]);

    let json: Vec<ResolutionResult> =
        serde_json::from_str(&fs::read_to_string(&paths.json).unwrap()).unwrap();
    let mut from_json: Vec<(String, Option<String>)> = json
        .iter()
        .map(|r| (r.subdomain.to_string(), r.ip.map(|ip| ip.to_string())))
        .collect();
    from_json.sort();
    assert_eq!(
        from_json,
        [
            ("a.example.com".to_string(), Some("1.2.3.4".to_string())),
            ("b.example.com".to_string(), None),
        ]
    );
}

/// Nothing found still produces (empty) reports.
#[tokio::test]
async fn empty_run_writes_empty_reports() {
    let sources: Vec<Box<dyn SubdomainSource>> = vec![Box::new(TimeoutSource)];
    let engine = ResolutionEngine::new(TableResolver::default(), 25);
    let report = discovery::run(&sources, &engine, &domain()).await;

    assert_eq!(report.candidates, 0);
    assert!(report.results.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let paths = sink::persist(&report.results, &dir.path().join("example.com")).unwrap();
    let json: Vec<Subdomain> = serde_json::from_str(&fs::read_to_string(&paths.json).unwrap()).unwrap();
    assert!(json.is_empty());
}
