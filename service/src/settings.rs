use std::time::Duration;

use http_fetcher::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeSettings {
    pub url: String,
    pub timeout: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
