//! Path manipulation utilities for the Zellij sandbox environment.
//!
//! In the sandbox the host filesystem is visible under `/host`. Configured
//! paths (a catalog file, a theme file) are written by users in host terms, so
//! they are translated before use and translated back before display.

use std::path::PathBuf;

/// Returns the data directory used for trace files.
///
/// Resolves to `/host/.local/share/zellij/storefront` inside the sandbox,
/// which maps to `~/.local/share/zellij/storefront` when Zellij was started
/// from the home directory.
///
/// # Examples
///
/// ```
/// use storefront::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/storefront");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("storefront")
}

/// Expands tilde paths to the `/host` prefix.
///
/// # Examples
///
/// ```
/// use storefront::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/catalogs/db.json"), "/host/catalogs/db.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/db.json"), "/absolute/db.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix from sandbox paths for display purposes.
///
/// # Examples
///
/// ```
/// use storefront::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/catalogs/db.json"), "/catalogs/db.json");
/// assert_eq!(strip_host_prefix("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix("/host").unwrap_or(path).to_string()
}
