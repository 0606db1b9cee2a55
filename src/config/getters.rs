//! Getter methods for `SearchConfig`

use std::time::Duration;

use url::Url;

use super::types::SearchConfig;

impl SearchConfig {
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    #[must_use]
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    #[must_use]
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    #[must_use]
    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    #[must_use]
    pub fn debounce_interval(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
