// src/core/settings.rs
use std::time::Duration;

const PRODUCTION_BASE_URL: &str = "https://instantllychannelpatner.onrender.com";
const DEFAULT_COUNTRY: &str = "India";
const TARGET_PHONE: &str = "9768676666";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything the check targets. The binary always uses `Default`; tests
/// swap `base_url` for a mock server.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    pub base_url: String,
    pub country: String,
    pub target_phone: String,
    pub timeout: Duration,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            base_url: PRODUCTION_BASE_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            target_phone: TARGET_PHONE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CheckSettings {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
