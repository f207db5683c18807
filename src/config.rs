//! API Configuration
//!
//! Where the party backend lives.

/// Backend root shared by every cohort
pub const DEFAULT_BASE_URL: &str = "https://fsa-crud-2aa9294fe819.herokuapp.com/api";
/// Cohort path segment selecting this app's data partition
pub const DEFAULT_COHORT: &str = "/2504-MATTHEW";
/// Id of the element the app mounts into
pub const MOUNT_ID: &str = "app";

/// Base URL + cohort path of the REST service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub cohort: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cohort: DEFAULT_COHORT.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, cohort: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cohort: cohort.into(),
        }
    }

    /// `base + cohort`, the prefix of every resource URL
    pub fn api_root(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.cohort)
    }

    pub fn events_url(&self) -> String {
        format!("{}/events", self.api_root())
    }

    pub fn event_url(&self, id: u32) -> String {
        format!("{}/events/{}", self.api_root(), id)
    }

    pub fn rsvps_url(&self) -> String {
        format!("{}/rsvps", self.api_root())
    }

    pub fn guests_url(&self) -> String {
        format!("{}/guests", self.api_root())
    }
}
