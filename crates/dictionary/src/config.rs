use std::time::Duration;

pub const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

/// Settings for the dictionary API client.
#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    /// Base URL the looked up word is appended to as a single path segment.
    pub base_url: String,
    /// Request timeout, `None` waits for as long as the client allows.
    pub timeout: Option<Duration>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            base_url: DICTIONARY_API_URL.to_owned(),
            timeout: None,
        }
    }
}

impl DictionaryConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
