//! Worker thread message types for cross-thread communication.
//!
//! The plugin thread asks the worker for the catalog with a [`WorkerMessage`]
//! and receives a [`WorkerResponse`]. Both travel as JSON payloads of Zellij
//! plugin messages. Requests carry a [`TraceContext`] so worker spans join the
//! trace that issued them.

use crate::catalog::CatalogSourceSpec;
use crate::domain::error::{Result, StorefrontError};
use crate::domain::Product;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Plugin message name used for worker round trips.
pub const CATALOG_MESSAGE: &str = "catalog";

/// Trace and parent span ids captured on the sending thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry context of the current tracing span.
    ///
    /// Returns `None` when no valid span context is active, for instance when
    /// tracing was never initialized.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use storefront::worker::TraceContext;
    ///
    /// if let Some(ctx) = TraceContext::from_current() {
    ///     println!("trace {}", ctx.trace_id);
    /// }
    /// ```
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_catalog(LoadCatalog { source: CatalogSourceSpec }),
}

/// Requests sent from the plugin thread to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load and validate the catalog from `source`.
    LoadCatalog {
        /// Where the catalog document lives.
        source: CatalogSourceSpec,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none", default)]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Trace context carried by the message, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The catalog loaded and passed validation.
    CatalogLoaded {
        /// Products in document order.
        products: Vec<Product>,
    },

    /// Loading failed.
    Error {
        /// Human-readable error message.
        message: String,
    },
}

fn encode<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| StorefrontError::Worker(format!("encode payload: {e}")))
}

fn decode<T: DeserializeOwned>(payload: &str) -> Result<T> {
    serde_json::from_str(payload).map_err(|e| StorefrontError::Worker(format!("malformed payload: {e}")))
}

impl WorkerMessage {
    /// Serializes the message for `post_message_to`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Worker`] if serialization fails.
    pub fn to_payload(&self) -> Result<String> {
        encode(self)
    }

    /// Decodes a message received by the worker.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Worker`] if the payload is not a message.
    pub fn from_payload(payload: &str) -> Result<Self> {
        decode(payload)
    }
}

impl WorkerResponse {
    /// Serializes the response for `post_message_to_plugin`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Worker`] if serialization fails.
    pub fn to_payload(&self) -> Result<String> {
        encode(self)
    }

    /// Decodes a response received by the plugin.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Worker`] if the payload is not a response.
    pub fn from_payload(payload: &str) -> Result<Self> {
        decode(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_catalog_survives_json_transport() {
        let message = WorkerMessage::LoadCatalog {
            source: CatalogSourceSpec::File("~/books.json".into()),
            trace_context: None,
        };

        let payload = message.to_payload().unwrap();
        assert!(!payload.contains("trace_context"));

        let decoded = WorkerMessage::from_payload(&payload).unwrap();
        assert_eq!(decoded, message);
        assert!(decoded.trace_context().is_none());
    }

    #[test]
    fn builder_without_tracing_has_no_context() {
        let message = WorkerMessage::load_catalog(CatalogSourceSpec::Bundled);
        assert!(message.trace_context().is_none());
    }

    #[test]
    fn garbage_payload_is_worker_error() {
        let err = WorkerResponse::from_payload("not json").unwrap_err();
        assert!(matches!(err, StorefrontError::Worker(ref m) if m.starts_with("malformed payload")));
        assert!(WorkerMessage::from_payload(r#"{"Unknown": {}}"#).is_err());
    }

    #[test]
    fn error_response_decodes() {
        let response = WorkerResponse::from_payload(r#"{"Error": {"message": "boom"}}"#).unwrap();
        assert_eq!(
            response,
            WorkerResponse::Error {
                message: "boom".to_string()
            }
        );
    }
}
