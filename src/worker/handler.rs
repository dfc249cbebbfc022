//! Worker thread implementation for catalog loading.
//!
//! Reading and validating the catalog document happens here, off the plugin's
//! render thread. The worker answers every [`WorkerMessage`] with exactly one
//! [`WorkerResponse`].

use crate::catalog::CatalogSourceSpec;
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// Zellij constructs the worker through `Default` and keeps it alive for the
/// plugin's lifetime. The worker itself holds no catalog; every load reads
/// the source afresh.
#[derive(Serialize, Deserialize, Default)]
pub struct StorefrontWorker {
    /// Number of loads served, for log correlation.
    #[serde(skip)]
    loads: u64,
}

impl StorefrontWorker {
    /// Loads the catalog described by `source`.
    fn load(source: &CatalogSourceSpec) -> Result<Vec<crate::domain::Product>> {
        let source = source.open();
        let _span = tracing::debug_span!("catalog_load", source = %source.describe()).entered();

        let catalog = source.load()?;
        tracing::info!(
            product_count = catalog.len(),
            categories = catalog.categories().len(),
            "catalog loaded"
        );
        Ok(catalog.products().to_vec())
    }

    /// Handles the `LoadCatalog` message.
    fn handle_load_catalog(&mut self, source: &CatalogSourceSpec) -> WorkerResponse {
        self.loads += 1;
        match Self::load(source) {
            Ok(products) => WorkerResponse::CatalogLoaded { products },
            Err(e) => {
                tracing::warn!(error = %e, load = self.loads, "catalog load failed");
                WorkerResponse::Error {
                    message: format!("load catalog: {e}"),
                }
            }
        }
    }

    /// Re-attaches the sender's trace context on this thread.
    ///
    /// The returned guard must be held while the message is processed.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Processes a worker message and returns its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _guard = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadCatalog { source, .. } => self.handle_load_catalog(&source),
        }
    }
}

/// Whether tracing has been set up on the worker thread.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

fn reply(name: String, response: &WorkerResponse) {
    match response.to_payload() {
        Ok(payload) => post_message_to_plugin(PluginMessage {
            name,
            payload,
            worker_name: None,
        }),
        Err(e) => tracing::warn!(error = %e, "failed to serialize worker response"),
    }
}

impl ZellijWorker<'_> for StorefrontWorker {
    /// Zellij entry point: decodes the payload, handles it, and posts the
    /// response back under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        let worker_message = match WorkerMessage::from_payload(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker message");
                reply(
                    message,
                    &WorkerResponse::Error {
                        message: e.to_string(),
                    },
                );
                return;
            }
        };

        let response = self.handle_message(worker_message);
        reply(message, &response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_load_returns_products() {
        let mut worker = StorefrontWorker::default();
        let response = worker.handle_message(WorkerMessage::load_catalog(CatalogSourceSpec::Bundled));

        match response {
            WorkerResponse::CatalogLoaded { products } => assert!(!products.is_empty()),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"products": [{{"id": 1, "name": "A"}}, {{"id": 1, "name": "B"}}]}}"#
        )
        .unwrap();

        let mut worker = StorefrontWorker::default();
        let source = CatalogSourceSpec::File(file.path().to_string_lossy().into_owned());
        let response = worker.handle_message(WorkerMessage::load_catalog(source));

        assert!(matches!(response, WorkerResponse::Error { ref message } if message.starts_with("load catalog")));
    }
}
