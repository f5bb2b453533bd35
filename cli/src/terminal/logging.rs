use std::fmt::{self, Debug};

use colored::*;
use subscout_common::log::{PRINT_TARGET, SUCCESS_TARGET};
use subscout_core::resolver::RESOLUTION_TARGET;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_indicatif::filter::IndicatifFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the quiet level when it is set.
pub fn init_logging(quiet: u8) {
    let indicatif_layer = IndicatifLayer::new();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(SubscoutFormatter)
                .with_writer(indicatif_layer.get_stdout_writer()),
        )
        .with(indicatif_layer.with_filter(IndicatifFilter::new(false)))
        .init();
}

fn default_directives(quiet: u8) -> String {
    match quiet {
        0 => "info".to_string(),
        1 => format!("info,{RESOLUTION_TARGET}=warn"),
        _ => format!("warn,{SUCCESS_TARGET}=info,{PRINT_TARGET}=info"),
    }
}

pub struct SubscoutFormatter;

impl<S, N> FormatEvent<S, N> for SubscoutFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        let mut fields = EventFields::default();
        event.record(&mut fields);

        if meta.target() == PRINT_TARGET {
            return writeln!(writer, "{}", fields.raw_msg.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match (meta.target(), fields.resolved) {
                (SUCCESS_TARGET, _) => ("[✓]", |s| s.green().bold()),
                (RESOLUTION_TARGET, Some(true)) => ("[+]", |s| s.green().bold()),
                (RESOLUTION_TARGET, Some(false)) => ("[-]", |s| s.red().bold()),
                _ => level_symbol(*meta.level()),
            };

        write!(writer, "{} {}", color_func(symbol.into()), fields.message)?;
        for extra in &fields.extras {
            write!(writer, " {}", extra.as_str().dimmed())?;
        }
        writeln!(writer)
    }
}

fn level_symbol(level: Level) -> (&'static str, fn(ColoredString) -> ColoredString) {
    match level {
        Level::TRACE => ("[ ]", |s| s.dimmed()),
        Level::DEBUG => ("[?]", |s| s.blue()),
        Level::INFO => ("[+]", |s| s.green().bold()),
        Level::WARN => ("[*]", |s| s.yellow().bold()),
        Level::ERROR => ("[!]", |s| s.red().bold()),
    }
}

#[derive(Default)]
struct EventFields {
    message: String,
    raw_msg: Option<String>,
    resolved: Option<bool>,
    extras: Vec<String>,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "raw_msg" => self.raw_msg = Some(value.to_string()),
            name => self.extras.push(format!("{name}={value}")),
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "resolved" => self.resolved = Some(value),
            name => self.extras.push(format!("{name}={value}")),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "raw_msg" => self.raw_msg = Some(format!("{value:?}")),
            name => self.extras.push(format!("{name}={value:?}")),
        }
    }
}
