//! Tracing with file-based OpenTelemetry export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK → FileSpanExporter → storefront-otlp.json
//! ```
//!
//! The trace file holds one OTLP/JSON document per line and rotates at 10 MB,
//! keeping three backups. The filter level is taken from the `trace_level`
//! plugin option and defaults to `info`.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`exporter`]: the span exporter and tracer provider
//! - [`otlp`]: OTLP/JSON encoding
//! - [`rotating`]: size-rotated append-only file

pub mod exporter;
pub mod init;
pub mod otlp;
pub mod rotating;

pub use init::init_tracing;
