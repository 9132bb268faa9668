use std::fmt::Debug;

pub const DEFAULT_ENDPOINT: &str = "https://api.newrelic.com/graphql";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(serde::Deserialize, Clone)]
pub struct NewRelicConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Key used by every report that does not set its own.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for NewRelicConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Debug for NewRelicConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewRelicConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
