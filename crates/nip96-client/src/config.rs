//! HTTP transport configuration for [`Nip96Client`](crate::Nip96Client).
//!
//! Nothing here touches the request contract: the default configuration sets
//! no timeout and no user agent, leaving reqwest's own defaults in place.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Transport settings applied when the client builds its reqwest client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Value sent as `User-Agent`. Blank values are ignored.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Whole-request timeout in seconds. `None` means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Trimmed user agent, or `None` when unset or blank.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Builds the reqwest client described by this configuration.
    pub(crate) fn build_http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent() {
            builder = builder.user_agent(user_agent);
        }
        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}
