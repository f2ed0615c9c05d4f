//! Client configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Endpoint the simulator listens on by default.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9080/api/endpoint";

/// Environment variable overriding the endpoint.
pub const ENDPOINT_ENV: &str = "QUBITVERSE_ENDPOINT";

/// How an action behaves while another one is still waiting for its reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestPolicy {
    /// Send regardless; replies apply in arrival order.
    #[default]
    Overlap,
    /// Fail fast with [`ClientError::Busy`](crate::ClientError::Busy).
    RejectWhileBusy,
}

/// Configuration for a [`BackendCaller`](crate::BackendCaller).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// URL the encoded circuit is posted to.
    pub endpoint: String,
    /// Whole-request timeout in seconds. `None` leaves it to the transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub policy: RequestPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
            policy: RequestPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the endpoint taken from `QUBITVERSE_ENDPOINT` if set.
    pub fn from_env() -> Self {
        match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) if !endpoint.trim().is_empty() => Self::default().with_endpoint(endpoint),
            _ => Self::default(),
        }
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set a whole-request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Set the overlapping-request policy.
    pub fn with_policy(mut self, policy: RequestPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "http://localhost:9080/api/endpoint");
        assert_eq!(config.timeout(), None);
        assert_eq!(config.policy, RequestPolicy::Overlap);
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::default()
            .with_endpoint("http://127.0.0.1:1234/run")
            .with_timeout_secs(30)
            .with_policy(RequestPolicy::RejectWhileBusy);

        assert_eq!(config.endpoint, "http://127.0.0.1:1234/run");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.policy, RequestPolicy::RejectWhileBusy);
    }

    #[test]
    fn test_serde_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"endpoint": "http://sim:9080/api/endpoint"}"#).unwrap();
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.policy, RequestPolicy::Overlap);

        let json = serde_json::to_string(&config.with_policy(RequestPolicy::RejectWhileBusy))
            .unwrap();
        assert!(json.contains("reject-while-busy"));
        assert!(!json.contains("timeout_secs"));
    }
}
