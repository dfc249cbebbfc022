//! Domain layer for the Storefront plugin.
//!
//! Core value types, independent of Zellij APIs and rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`product`]: Product value object
//!
//! # Examples
//!
//! ```
//! use storefront::domain::{Product, Result};
//!
//! fn sample() -> Result<Product> {
//!     Ok(Product::new(7, "Kitap A", "TYT", "kitap.png"))
//! }
//!
//! assert_eq!(sample().unwrap().category(), Some("TYT"));
//! ```

pub mod error;
pub mod product;

pub use error::{Result, StorefrontError};
pub use product::Product;
