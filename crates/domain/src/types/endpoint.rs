//! Fixed endpoint table

use crate::constants::{
    ACCOUNT_DETAILS_PATH, INSTALLED_APPS_PATH, PERMISSIONS_PATH, PUBLISH_PATH, VALIDATION_PATH,
};

/// Relative API paths used by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    AccountDetails,
    InstalledApps,
    Permissions,
    Validation,
    Publish,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::AccountDetails => ACCOUNT_DETAILS_PATH,
            Self::InstalledApps => INSTALLED_APPS_PATH,
            Self::Permissions => PERMISSIONS_PATH,
            Self::Validation => VALIDATION_PATH,
            Self::Publish => PUBLISH_PATH,
        }
    }

    /// Join this endpoint onto a base URL.
    ///
    /// Base URLs are stored with a trailing slash; plain concatenation is
    /// the addressing scheme the service expects.
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url, self.path())
    }

    /// URL of a single resource below this endpoint (e.g. one validation).
    pub fn resource_url(self, base_url: &str, id: &str) -> String {
        format!("{}{}{}", base_url, self.path(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://example.test/api/v2/";

    #[test]
    fn joins_paths_onto_base() {
        assert_eq!(
            Endpoint::AccountDetails.url(BASE),
            "https://example.test/api/v2/account/settings/mine/"
        );
        assert_eq!(
            Endpoint::InstalledApps.url(BASE),
            "https://example.test/api/v2/account/installed/mine/"
        );
        assert_eq!(
            Endpoint::Permissions.url(BASE),
            "https://example.test/api/v2/account/permissions/mine/"
        );
        assert_eq!(Endpoint::Publish.url(BASE), "https://example.test/api/v2/apps/app/");
    }

    #[test]
    fn appends_resource_id() {
        assert_eq!(
            Endpoint::Validation.resource_url(BASE, "42"),
            "https://example.test/api/v2/apps/validation/42"
        );
    }
}
