//! JSON log lines: one JSON object per line (ndjson).

use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub struct StructuredLogger;

impl StructuredLogger {
    /// Install global subscriber: JSON lines to stdout, level from RUST_LOG or `default_level`.
    /// A second call is a no-op.
    pub fn init(json: bool, default_level: &str) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        let registry = tracing_subscriber::registry().with(filter);
        if json {
            let fmt = tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_writer(std::io::stdout);
            let _ = registry.with(fmt).try_init();
        } else {
            let fmt = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);
            let _ = registry.with(fmt).try_init();
        }
    }

    /// Write `event` as a single JSON line, bypassing tracing
    pub fn emit_json(event: &impl Serialize, w: &mut impl Write) -> std::io::Result<()> {
        let line = serde_json::to_string(event)?;
        writeln!(w, "{}", line)
    }
}
