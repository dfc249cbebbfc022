//! Background worker thread for catalog loading.
//!
//! Uses Zellij's worker API so document I/O never blocks rendering. Requests
//! carry trace context so worker spans land in the caller's trace.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::StorefrontWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse, CATALOG_MESSAGE};
