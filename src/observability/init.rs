//! Subscriber setup: `tracing` macros feed an OpenTelemetry layer whose spans
//! are exported to the trace file.

use super::exporter::file_tracer_provider;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name recorded on every exported batch.
pub const SERVICE_NAME: &str = "Storefront";

/// Trace file name inside the data directory.
pub const TRACE_FILE: &str = "storefront-otlp.json";

/// Level used when the configuration names none.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// The filter comes from `config.trace_level`, falling back to `"info"`.
/// Spans go to `~/.local/share/zellij/storefront/storefront-otlp.json`
/// (seen as `/host/...` from inside the sandbox).
///
/// Tracing is optional: if the data directory cannot be created, no
/// subscriber is installed and the plugin runs without traces. Calling this
/// more than once is harmless; only the first subscriber is kept.
///
/// # Example
///
/// ```rust,no_run
/// use storefront::observability::init_tracing;
/// use storefront::Config;
///
/// init_tracing(&Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// });
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = file_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(layer)
        .try_init();
}
