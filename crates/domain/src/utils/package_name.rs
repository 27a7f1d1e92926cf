//! Package file name extraction

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{MarketplaceError, Result};

// Trailing `<name>.zip` segment, optionally preceded by a separator.
static PACKAGE_NAME: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"/?([^/]+\.zip)$").expect("package name pattern is valid")
});

/// Extract the file name submitted alongside a package.
///
/// # Examples
///
/// ```
/// use marketplace_domain::extract_package_name;
///
/// assert_eq!(extract_package_name("/foo/bar/My App.zip").unwrap(), "My App.zip");
/// assert_eq!(extract_package_name("app.zip").unwrap(), "app.zip");
/// ```
///
/// # Errors
///
/// Returns `MarketplaceError::InvalidInput` if the path does not end in a
/// `.zip` file name.
pub fn extract_package_name(path: &str) -> Result<&str> {
    PACKAGE_NAME
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| {
            MarketplaceError::InvalidInput(format!("package path must end in a .zip file: {path}"))
        })
}
