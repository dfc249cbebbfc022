//! Error types for the Storefront plugin.
//!
//! This module defines the centralized error type [`StorefrontError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Storefront plugin operations.
///
/// Consolidates every failure the plugin can observe, from catalog loading to
/// theme parsing. Variants wrapping external errors use `#[from]` so `?` works
/// across the crate.
///
/// # Examples
///
/// ```
/// use storefront::StorefrontError;
///
/// let err = StorefrontError::Catalog("duplicate product id 7".to_string());
/// assert_eq!(err.to_string(), "Catalog error: duplicate product id 7");
/// ```
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The catalog document is structurally valid JSON but violates a catalog
    /// invariant (for example two products sharing an id).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, typically reading a
    /// catalog file configured via `catalog_path`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A worker payload could not be encoded or decoded.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for Storefront operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;
