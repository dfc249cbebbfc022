//! Infrastructure layer for filesystem and environment interactions.
//!
//! Zellij runs plugins in a WASI sandbox where the host filesystem is mounted
//! under `/host`. This module keeps the path rules for that sandbox in one place.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, strip_host_prefix};
