//! Tracing configuration for the confirm-demo binary.
//!
//! Installs a subscriber that drops webview pointer noise before Dioxus gets
//! a chance to install its own logger.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use confirm_dioxus::config::LoggingConfig;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Event formatter that skips events whose rendered line contains a suppressed pattern.
struct SuppressingFormatter {
    inner: fmt::format::Format,
    suppressed: Vec<String>,
}

impl SuppressingFormatter {
    fn new(suppressed: Vec<String>, ansi: bool) -> Self {
        Self {
            inner: fmt::format::Format::default().with_target(false).with_ansi(ansi),
            suppressed,
        }
    }

    fn is_suppressed(&self, line: &str) -> bool {
        self.suppressed
            .iter()
            .any(|pattern| line.contains(pattern.as_str()))
    }
}

impl<S, N> FormatEvent<S, N> for SuppressingFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut line = String::new();
        self.inner.format_event(ctx, Writer::new(&mut line), event)?;

        if self.is_suppressed(&line) {
            return Ok(());
        }
        write!(writer, "{line}")
    }
}

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over the configured level. Output goes to the
/// configured log file, or stderr when none is set or it cannot be created.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let suppressed = config.suppressed_patterns.clone();

    let log_file = config.log_file.as_ref().and_then(|path| {
        File::create(path)
            .map_err(|err| eprintln!("Cannot open log file {}: {err}", path.display()))
            .ok()
            .map(|file| (path, file))
    });

    if let Some((path, file)) = log_file {
        let layer = fmt::layer()
            .with_writer(Mutex::new(file))
            .event_format(SuppressingFormatter::new(suppressed, false));
        tracing_subscriber::registry().with(env_filter).with(layer).init();
        eprintln!("Logging to {}", path.display());
    } else {
        let layer = fmt::layer()
            .with_writer(io::stderr)
            .event_format(SuppressingFormatter::new(suppressed, true));
        tracing_subscriber::registry().with(env_filter).with(layer).init();
    }
}
