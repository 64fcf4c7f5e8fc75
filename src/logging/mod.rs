//! Structured logging (tracing JSON lines) and line-oriented JSON output.

mod format;

pub use format::StructuredLogger;
