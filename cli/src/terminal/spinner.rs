use indicatif::ProgressStyle;
use subscout_core::resolver::ProgressCallback;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

const SPINNER_TEMPLATE: &str = "{spinner:.blue} {msg}";
const BAR_TEMPLATE: &str =
    "{spinner:.blue} [{bar:32.green/bright_black}] {pos}/{len} resolved ({elapsed})";

/// Span that owns the progress display of a discovery run.
///
/// It starts as a spinner while the sources are queried and turns into a
/// bar once the first lookup completes.
pub fn discovery_span() -> Span {
    let span = info_span!("discovery", indicatif.pb_show = true);
    span.pb_set_style(&spinner_style());
    span.pb_set_message("Querying subdomain sources...");
    span
}

/// Progress callback for the resolution engine that drives `span`'s bar.
pub fn resolution_progress(span: Span) -> ProgressCallback {
    Box::new(move |completed, total| {
        if completed == 1 {
            span.pb_set_style(&bar_style());
            span.pb_set_length(total as u64);
        }
        span.pb_inc(1);
    })
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template(SPINNER_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(TICKS)
}
