//! Request transport.
//!
//! [`Transport`] is the seam between the action logic and the network.
//! [`HttpTransport`] posts to the simulator with reqwest.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Content type of the request body.
pub const TEXT_PLAIN: &str = "text/plain";

/// Something that can deliver an encoded circuit and return the reply text.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Where requests go, for diagnostics.
    fn endpoint(&self) -> &str;

    /// Send `body` and return the reply text.
    async fn post_text(&self, body: String) -> ClientResult<String>;
}

/// POSTs `text/plain` bodies to a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Create a transport from client configuration.
    ///
    /// No timeout is set unless the configuration asks for one.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|e| ClientError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                reason: e.to_string(),
            })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ClientError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                reason: format!("unsupported scheme '{}'", endpoint.scheme()),
            });
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ClientError::Http)?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    #[instrument(skip(self, body), fields(bytes = body.len()))]
    async fn post_text(&self, body: String) -> ClientResult<String> {
        debug!("Posting circuit to {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, TEXT_PLAIN)
            .body(body)
            .send()
            .await?;

        // The simulator reports its own failures in the body, so any status
        // is handed on as text.
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Simulator answered with an error status");
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_parses() {
        let transport = HttpTransport::new(&ClientConfig::default()).unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:9080/api/endpoint");
    }

    #[test]
    fn test_relative_endpoint_rejected() {
        let config = ClientConfig::default().with_endpoint("localhost:9080/api/endpoint");
        let err = HttpTransport::new(&config).unwrap_err();
        assert!(matches!(err, ClientError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_garbage_endpoint_rejected() {
        let config = ClientConfig::default().with_endpoint("not a url");
        assert!(matches!(
            HttpTransport::new(&config),
            Err(ClientError::InvalidEndpoint { .. })
        ));
    }
}
