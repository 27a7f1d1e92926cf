//! Service constants
//!
//! Base URLs, endpoint paths and workflow timings shared by every crate.

// Environment base URLs
pub const DEVELOPMENT_BASE_URL: &str = "https://marketplace-dev.allizom.org/api/v2/";
pub const PRODUCTION_BASE_URL: &str = "https://marketplace.firefox.com/api/v2/";

// Endpoint paths, relative to the base URL
pub const ACCOUNT_DETAILS_PATH: &str = "account/settings/mine/";
pub const INSTALLED_APPS_PATH: &str = "account/installed/mine/";
pub const PERMISSIONS_PATH: &str = "account/permissions/mine/";
pub const VALIDATION_PATH: &str = "apps/validation/";
pub const PUBLISH_PATH: &str = "apps/app/";

// Validation workflow
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;
pub const PACKAGE_MIME_TYPE: &str = "application/zip";
pub const PACKAGED_FORMAT: &str = "packaged";

// Transport
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
