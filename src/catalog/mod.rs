//! Catalog layer: the product list and the operations over it.
//!
//! # Modules
//!
//! - `store`: The immutable [`Catalog`] container
//! - `source`: Where catalogs come from (bundled document or JSON file)
//! - `filter`: The pure filter engine used by the catalog view

pub mod filter;
pub mod source;
pub mod store;

pub use filter::{filter_products, match_ranges};
pub use source::{BundledSource, CatalogSource, CatalogSourceSpec, JsonFileSource};
pub use store::Catalog;
